//! The three-expense walkthrough the demo replays.

use splitledger_core::{DomainResult, ParticipantId};
use splitledger_ledger::{BalanceLedger, Expense};

use crate::config::{DemoConfig, OutputFormat};
use crate::presenter;

/// A pays 300 for A, B, C; B pays 300 for A, B, C; C pays 300 for A and C.
pub fn reference_expenses() -> DomainResult<Vec<Expense>> {
    let a = ParticipantId::new("A")?;
    let b = ParticipantId::new("B")?;
    let c = ParticipantId::new("C")?;

    Ok(vec![
        Expense::equal(a.clone(), 300.0, [a.clone(), b.clone(), c.clone()])?,
        Expense::equal(b.clone(), 300.0, [a.clone(), b.clone(), c.clone()])?,
        Expense::equal(c.clone(), 300.0, [a, c])?,
    ])
}

/// Record `expenses` into a fresh ledger and render the report.
pub fn run(expenses: &[Expense], config: &DemoConfig) -> anyhow::Result<String> {
    let mut ledger = BalanceLedger::new();
    for expense in expenses {
        ledger.record(expense)?;
    }
    tracing::info!(
        expenses = expenses.len(),
        open_debts = ledger.len(),
        "ledger built"
    );

    match config.output {
        OutputFormat::Json => Ok(presenter::render_json(&ledger)?),
        OutputFormat::Text => {
            let mut users: Vec<&ParticipantId> = expenses
                .iter()
                .flat_map(|e| std::iter::once(e.payer()).chain(e.participants()))
                .collect();
            users.sort();
            users.dedup();

            let mut report = presenter::render_all_balances(&ledger, &config.currency);
            for user in users {
                report.push('\n');
                report.push_str(&presenter::render_user_balance(&ledger, user, &config.currency));
            }
            Ok(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_matches_walkthrough() {
        let report = run(&reference_expenses().unwrap(), &DemoConfig::default()).unwrap();

        assert_eq!(
            report,
            "=== All Balances ===\n\
             A owes C: Rs 50.00\n\
             C owes B: Rs 100.00\n\
             \n\
             === Balances for A ===\n\
             Owes C: Rs 50.00\n\
             \n\
             === Balances for B ===\n\
             C owes B: Rs 100.00\n\
             \n\
             === Balances for C ===\n\
             Owes B: Rs 100.00\n\
             A owes C: Rs 50.00\n"
        );
    }

    #[test]
    fn json_report_is_parseable() {
        let config = DemoConfig {
            output: OutputFormat::Json,
            ..DemoConfig::default()
        };
        let report = run(&reference_expenses().unwrap(), &config).unwrap();

        let parsed: Vec<serde_json::Value> = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["debtor"], "A");
        assert_eq!(parsed[0]["amount"], 50.0);
    }
}
