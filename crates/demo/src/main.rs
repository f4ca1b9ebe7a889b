use splitledger_demo::{DemoConfig, scenario};

fn main() -> anyhow::Result<()> {
    let (config, ignored) = DemoConfig::from_env();
    splitledger_observability::init(config.log_format);

    for message in ignored {
        tracing::warn!("ignoring configuration value: {message}");
    }

    let expenses = scenario::reference_expenses()?;
    let report = scenario::run(&expenses, &config)?;
    print!("{report}");

    Ok(())
}
