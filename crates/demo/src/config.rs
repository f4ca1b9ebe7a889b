//! Environment-driven configuration for the demo binary.

use splitledger_observability::LogFormat;

pub const CURRENCY_VAR: &str = "SPLITLEDGER_CURRENCY";
pub const LOG_FORMAT_VAR: &str = "SPLITLEDGER_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "SPLITLEDGER_OUTPUT";

/// Shape of the report written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Label printed before amounts, e.g. `Rs 100.00`.
    pub currency: String,
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            currency: "Rs".to_string(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

impl DemoConfig {
    /// Read configuration from the process environment.
    ///
    /// Returns the config plus one message per ignored value; logging is not
    /// initialised yet when this runs, so the caller reports them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(currency) = lookup(CURRENCY_VAR) {
            let currency = currency.trim();
            if currency.is_empty() {
                ignored.push(format!("{CURRENCY_VAR} is blank; using '{}'", config.currency));
            } else {
                config.currency = currency.to_string();
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => ignored.push(format!("{LOG_FORMAT_VAR}: {e}")),
            }
        }

        if let Some(raw) = lookup(OUTPUT_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "text" => config.output = OutputFormat::Text,
                "json" => config.output = OutputFormat::Json,
                other => ignored.push(format!(
                    "{OUTPUT_VAR}: unknown output '{other}' (expected text or json)"
                )),
            }
        }

        (config, ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let (config, ignored) = DemoConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DemoConfig::default());
        assert!(ignored.is_empty());
    }

    #[test]
    fn reads_all_variables() {
        let (config, ignored) = DemoConfig::from_lookup(lookup(&[
            (CURRENCY_VAR, "USD"),
            (LOG_FORMAT_VAR, "json"),
            (OUTPUT_VAR, "JSON"),
        ]));

        assert!(ignored.is_empty());
        assert_eq!(config.currency, "USD");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn bad_values_fall_back_and_are_reported() {
        let (config, ignored) = DemoConfig::from_lookup(lookup(&[
            (CURRENCY_VAR, "  "),
            (LOG_FORMAT_VAR, "xml"),
            (OUTPUT_VAR, "yaml"),
        ]));

        assert_eq!(config, DemoConfig::default());
        assert_eq!(ignored.len(), 3);
        assert!(ignored[2].contains("yaml"));
    }
}
