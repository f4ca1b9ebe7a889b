//! Expense value and its validating builder.

use std::collections::HashSet;
use std::sync::Arc;

use splitledger_core::{DomainError, DomainResult, ParticipantId};
use splitledger_splitting::{EqualSplit, InvalidSplitError, SplitResult, SplitStrategy};

/// One payment event: who paid, how much, and who shares it.
///
/// Immutable once built. The split strategy is shared, so cloning an expense
/// is cheap.
#[derive(Clone)]
pub struct Expense {
    payer: ParticipantId,
    amount: f64,
    participants: Vec<ParticipantId>,
    strategy: Arc<dyn SplitStrategy>,
}

impl Expense {
    pub fn builder() -> ExpenseBuilder {
        ExpenseBuilder::new()
    }

    /// Expense shared equally among `participants`.
    pub fn equal(
        payer: ParticipantId,
        amount: f64,
        participants: impl IntoIterator<Item = ParticipantId>,
    ) -> DomainResult<Self> {
        ExpenseBuilder::new()
            .payer(payer)
            .amount(amount)
            .participants(participants)
            .strategy(EqualSplit)
            .build()
    }

    pub fn payer(&self) -> &ParticipantId {
        &self.payer
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Run the expense's split strategy.
    pub fn splits(&self) -> Result<SplitResult, InvalidSplitError> {
        self.strategy
            .split(&self.payer, self.amount, &self.participants)
    }
}

impl core::fmt::Debug for Expense {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Expense")
            .field("payer", &self.payer)
            .field("amount", &self.amount)
            .field("participants", &self.participants)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Fluent constructor for [`Expense`].
///
/// Setters may be called in any order; `build` checks that every required
/// field is present.
#[derive(Default)]
pub struct ExpenseBuilder {
    payer: Option<ParticipantId>,
    amount: Option<f64>,
    participants: Vec<ParticipantId>,
    strategy: Option<Arc<dyn SplitStrategy>>,
}

impl ExpenseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payer(mut self, payer: ParticipantId) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Replace the participant set. Duplicates collapse to their first
    /// occurrence.
    pub fn participants(mut self, participants: impl IntoIterator<Item = ParticipantId>) -> Self {
        let mut seen = HashSet::new();
        self.participants = participants
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        self
    }

    pub fn strategy(self, strategy: impl SplitStrategy + 'static) -> Self {
        self.shared_strategy(Arc::new(strategy))
    }

    pub fn shared_strategy(mut self, strategy: Arc<dyn SplitStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> DomainResult<Expense> {
        let payer = self
            .payer
            .ok_or_else(|| DomainError::validation("payer is required"))?;

        let amount = self
            .amount
            .ok_or_else(|| DomainError::validation("amount is required"))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::validation("amount must be positive and finite"));
        }

        if self.participants.is_empty() {
            return Err(DomainError::validation("at least one participant is required"));
        }

        let strategy = self
            .strategy
            .ok_or_else(|| DomainError::validation("split strategy is required"))?;

        Ok(Expense {
            payer,
            amount,
            participants: self.participants,
            strategy,
        })
    }
}
