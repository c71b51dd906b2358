//! Core calculator module
//!
//! The state machine, its operand representation, number text codec and
//! display formatting. Nothing in here knows about buttons or the DOM.

pub mod display;
mod entry;
pub mod history;
pub mod number;
mod operations;
mod state;

pub use display::{format_for_display, DisplaySnapshot};
pub use entry::Entry;
pub use operations::Operation;
pub use state::{Calculator, PendingOperation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an input was not applied
///
/// Keypad operations never surface these to the user; they are returned by
/// the `try_*` operations and logged by the plain ones.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An operand does not start with a number
    #[error("Unparseable operand: {0:?}")]
    UnparseableOperand(String),
    /// `=` was pressed with no operation pending
    #[error("No pending operation")]
    NoPendingOperation,
    /// An operator symbol outside `+ - * ÷`
    #[error("Unknown operation: {0:?}")]
    UnknownOperation(String),
    /// A memory update would leave the accumulator non-finite
    #[error("Memory would become non-finite: {0}")]
    NonFiniteMemory(f64),
    /// A button label or key with no keypad action
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
