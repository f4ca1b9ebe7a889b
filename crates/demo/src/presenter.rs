//! Plain-text and JSON rendering of ledger queries.

use std::fmt::Write as _;

use splitledger_core::ParticipantId;
use splitledger_ledger::{Balance, BalanceLedger, Direction};

fn sorted_balances(ledger: &BalanceLedger) -> Vec<Balance> {
    let mut balances: Vec<_> = ledger.all_balances().collect();
    balances.sort_by(|a, b| (&a.debtor, &a.creditor).cmp(&(&b.debtor, &b.creditor)));
    balances
}

/// Every open debt, one line each, sorted by debtor then creditor.
pub fn render_all_balances(ledger: &BalanceLedger, currency: &str) -> String {
    let mut out = String::from("=== All Balances ===\n");
    for b in sorted_balances(ledger) {
        let _ = writeln!(out, "{} owes {}: {currency} {:.2}", b.debtor, b.creditor, b.amount);
    }
    out
}

/// What `user` owes, then what others owe `user`.
pub fn render_user_balance(ledger: &BalanceLedger, user: &ParticipantId, currency: &str) -> String {
    let mut out = format!("=== Balances for {user} ===\n");

    let mut facts: Vec<_> = ledger.balance_of(user).collect();
    if facts.is_empty() {
        out.push_str("No transactions for this user\n");
        return out;
    }

    // Owes sorts before OwedBy; keep that grouping and order counterparties within it.
    facts.sort_by(|a, b| {
        (a.direction == Direction::OwedBy, &a.counterparty)
            .cmp(&(b.direction == Direction::OwedBy, &b.counterparty))
    });

    for fact in facts {
        let _ = match fact.direction {
            Direction::Owes => writeln!(
                out,
                "Owes {}: {currency} {:.2}",
                fact.counterparty, fact.amount
            ),
            Direction::OwedBy => writeln!(
                out,
                "{} owes {user}: {currency} {:.2}",
                fact.counterparty, fact.amount
            ),
        };
    }
    out
}

/// All open debts as a JSON array of `{debtor, creditor, amount}`.
pub fn render_json(ledger: &BalanceLedger) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&sorted_balances(ledger))
}
