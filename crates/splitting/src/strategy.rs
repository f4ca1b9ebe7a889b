//! Split computation contract.

use std::collections::HashMap;

use serde::Serialize;

use splitledger_core::{ParticipantId, ValueObject};

use crate::error::InvalidSplitError;

/// Per-participant owed amounts derived from one expense.
///
/// Keeps insertion order, which is the order the ledger nets pairs in. The
/// payer never appears as a debtor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SplitResult {
    shares: Vec<(ParticipantId, f64)>,
    /// Position of each participant in `shares`.
    #[serde(skip)]
    index: HashMap<ParticipantId, usize>,
}

impl ValueObject for SplitResult {}

impl SplitResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shares: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add `amount` to what `participant` owes, creating the entry if needed.
    pub fn add(&mut self, participant: ParticipantId, amount: f64) {
        match self.index.get(&participant) {
            Some(&pos) => self.shares[pos].1 += amount,
            None => {
                self.index.insert(participant.clone(), self.shares.len());
                self.shares.push((participant, amount));
            }
        }
    }

    pub fn get(&self, participant: &ParticipantId) -> Option<f64> {
        self.index.get(participant).map(|&pos| self.shares[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, f64)> + '_ {
        self.shares.iter().map(|(p, owed)| (p, *owed))
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Sum of all owed amounts.
    pub fn total(&self) -> f64 {
        self.shares.iter().map(|(_, owed)| owed).sum()
    }
}

impl FromIterator<(ParticipantId, f64)> for SplitResult {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, f64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut result = Self::with_capacity(iter.size_hint().0);
        for (participant, amount) in iter {
            result.add(participant, amount);
        }
        result
    }
}

impl IntoIterator for SplitResult {
    type Item = (ParticipantId, f64);
    type IntoIter = std::vec::IntoIter<(ParticipantId, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}

/// Policy mapping (payer, amount, participants) to owed amounts.
///
/// Implementations must be pure: the same inputs always give the same
/// result and nothing outside the return value changes.
///
/// Any closure with the matching signature is a strategy:
///
/// ```ignore
/// let fixed = |_payer: &ParticipantId,
///              _amount: f64,
///              _users: &[ParticipantId]|
///  -> Result<SplitResult, InvalidSplitError> {
///     Ok(SplitResult::from_iter([(bob.clone(), 42.0)]))
/// };
/// ```
pub trait SplitStrategy: Send + Sync {
    fn split(
        &self,
        payer: &ParticipantId,
        amount: f64,
        participants: &[ParticipantId],
    ) -> Result<SplitResult, InvalidSplitError>;

    /// Short label used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> SplitStrategy for F
where
    F: Fn(&ParticipantId, f64, &[ParticipantId]) -> Result<SplitResult, InvalidSplitError>
        + Send
        + Sync,
{
    fn split(
        &self,
        payer: &ParticipantId,
        amount: f64,
        participants: &[ParticipantId],
    ) -> Result<SplitResult, InvalidSplitError> {
        self(payer, amount, participants)
    }
}

/// Checks shared by every built-in strategy: a positive, finite amount and at
/// least one participant.
pub fn validate_inputs(amount: f64, participants: &[ParticipantId]) -> Result<(), InvalidSplitError> {
    if participants.is_empty() {
        return Err(InvalidSplitError::NoParticipants);
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(InvalidSplitError::NonPositiveAmount { amount });
    }
    Ok(())
}
