//! Shared-expense ledger: who owes whom, netted per pair.
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod expense;
pub mod ledger;

pub use expense::{Expense, ExpenseBuilder};
pub use ledger::{Balance, BalanceLedger, Direction, UserBalance};
