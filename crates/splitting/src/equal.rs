use splitledger_core::ParticipantId;

use crate::error::InvalidSplitError;
use crate::strategy::{SplitResult, SplitStrategy, validate_inputs};

/// Equal split: each participant other than the payer owes
/// `amount / participants.len()` to the payer.
///
/// The divisor counts the payer, but the payer's own share is never charged
/// to anyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualSplit;

impl SplitStrategy for EqualSplit {
    fn split(
        &self,
        payer: &ParticipantId,
        amount: f64,
        participants: &[ParticipantId],
    ) -> Result<SplitResult, InvalidSplitError> {
        validate_inputs(amount, participants)?;

        let share = amount / participants.len() as f64;
        Ok(participants
            .iter()
            .filter(|p| *p != payer)
            .map(|p| (p.clone(), share))
            .collect())
    }

    fn name(&self) -> &str {
        "equal"
    }
}
