//! Pairwise balance ledger with automatic netting.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace, warn};

use splitledger_core::{ParticipantId, ValueObject};
use splitledger_splitting::{InvalidSplitError, SplitResult};

use crate::expense::Expense;

/// Directed key `from -> to` of a stored debt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DebtKey {
    from: ParticipantId,
    to: ParticipantId,
}

impl DebtKey {
    fn new(from: &ParticipantId, to: &ParticipantId) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
        }
    }

    fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// One open debt: `debtor` owes `creditor` a positive `amount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    pub debtor: ParticipantId,
    pub creditor: ParticipantId,
    pub amount: f64,
}

impl ValueObject for Balance {}

/// Which side of a debt the queried user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The user owes the counterparty.
    Owes,
    /// The counterparty owes the user.
    OwedBy,
}

/// A debt seen from one participant's point of view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserBalance {
    pub direction: Direction,
    pub counterparty: ParticipantId,
    pub amount: f64,
}

impl ValueObject for UserBalance {}

/// Netted pairwise debts between every known participant.
///
/// Invariant: for any pair `{x, y}` at most one of `debt(x, y)` and
/// `debt(y, x)` is stored, and stored amounts are always positive.
///
/// `record` is the only mutator. Netting is strictly pairwise: a chain
/// `a -> b -> c` is never collapsed into `a -> c`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceLedger {
    debts: HashMap<DebtKey, f64>,
    /// `x -> {y}` for every pair with an open debt in either direction.
    counterparties: HashMap<ParticipantId, HashSet<ParticipantId>>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one expense.
    ///
    /// The split is computed and checked before anything changes, so on error
    /// the ledger is left exactly as it was.
    pub fn record(&mut self, expense: &Expense) -> Result<(), InvalidSplitError> {
        let payer = expense.payer();

        let splits = expense.splits().inspect_err(|err| {
            warn!(
                payer = %payer,
                amount = expense.amount(),
                strategy = expense.strategy_name(),
                error = %err,
                "split computation failed; ledger unchanged"
            );
        })?;
        check_owed_amounts(&splits)?;

        debug!(
            payer = %payer,
            amount = expense.amount(),
            participants = expense.participants().len(),
            debtors = splits.len(),
            strategy = expense.strategy_name(),
            "recording expense"
        );

        for (debtor, owed) in splits.iter() {
            if debtor == payer || owed == 0.0 {
                continue;
            }
            self.accumulate_and_net(debtor, payer, owed);
        }

        Ok(())
    }

    /// Add `owed` to `debtor -> creditor`, then net it against
    /// `creditor -> debtor`.
    fn accumulate_and_net(&mut self, debtor: &ParticipantId, creditor: &ParticipantId, owed: f64) {
        let forward = DebtKey::new(debtor, creditor);
        let reverse = forward.reversed();

        let accumulated = self.debts.get(&forward).copied().unwrap_or(0.0) + owed;

        match self.debts.get(&reverse).copied() {
            Some(opposite) => {
                let net = accumulated - opposite;
                if settles(net, accumulated, opposite) {
                    self.debts.remove(&forward);
                    self.debts.remove(&reverse);
                } else if net > 0.0 {
                    self.debts.insert(forward, net);
                    self.debts.remove(&reverse);
                } else {
                    self.debts.insert(reverse, -net);
                    self.debts.remove(&forward);
                }
                trace!(debtor = %debtor, creditor = %creditor, net, "netted pair");
            }
            None => {
                self.debts.insert(forward, accumulated);
            }
        }

        self.reindex(debtor, creditor);
    }

    fn reindex(&mut self, x: &ParticipantId, y: &ParticipantId) {
        let open = self.debt(x, y).is_some() || self.debt(y, x).is_some();

        if open {
            self.counterparties.entry(x.clone()).or_default().insert(y.clone());
            self.counterparties.entry(y.clone()).or_default().insert(x.clone());
        } else {
            self.unlink(x, y);
            self.unlink(y, x);
        }
    }

    fn unlink(&mut self, x: &ParticipantId, y: &ParticipantId) {
        if let Some(others) = self.counterparties.get_mut(x) {
            others.remove(y);
            if others.is_empty() {
                self.counterparties.remove(x);
            }
        }
    }

    /// Amount `from` currently owes `to`, if any.
    pub fn debt(&self, from: &ParticipantId, to: &ParticipantId) -> Option<f64> {
        self.debts.get(&DebtKey::new(from, to)).copied()
    }

    /// Every open debt. Order is unspecified.
    pub fn all_balances(&self) -> impl Iterator<Item = Balance> + '_ {
        self.debts.iter().map(|(key, amount)| Balance {
            debtor: key.from.clone(),
            creditor: key.to.clone(),
            amount: *amount,
        })
    }

    /// Debts involving `user`: first everything `user` owes, then everything
    /// owed to `user`.
    ///
    /// Empty when the user has no open balances (including unknown users).
    pub fn balance_of<'a>(
        &'a self,
        user: &'a ParticipantId,
    ) -> impl Iterator<Item = UserBalance> + 'a {
        let others = self.counterparties.get(user);

        let owes = others.into_iter().flatten().filter_map(move |other| {
            self.debt(user, other).map(|amount| UserBalance {
                direction: Direction::Owes,
                counterparty: other.clone(),
                amount,
            })
        });

        let owed_by = others.into_iter().flatten().filter_map(move |other| {
            self.debt(other, user).map(|amount| UserBalance {
                direction: Direction::OwedBy,
                counterparty: other.clone(),
                amount,
            })
        });

        owes.chain(owed_by)
    }

    /// What `user` is owed minus what `user` owes.
    pub fn net_position(&self, user: &ParticipantId) -> f64 {
        self.balance_of(user)
            .map(|b| match b.direction {
                Direction::Owes => -b.amount,
                Direction::OwedBy => b.amount,
            })
            .sum()
    }

    /// Participants with at least one open debt.
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> + '_ {
        self.counterparties.keys()
    }

    /// Number of open debts.
    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}

/// Whether `a - b` is zero up to rounding of the operands themselves.
fn settles(net: f64, a: f64, b: f64) -> bool {
    net.abs() <= f64::EPSILON * a.max(b)
}

fn check_owed_amounts(splits: &SplitResult) -> Result<(), InvalidSplitError> {
    for (participant, owed) in splits.iter() {
        if !owed.is_finite() || owed < 0.0 {
            return Err(InvalidSplitError::rejected(format!(
                "owed amount for {participant} must be finite and non-negative (got {owed})"
            )));
        }
    }
    Ok(())
}
