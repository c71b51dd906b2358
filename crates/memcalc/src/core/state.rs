//! Calculator state machine
//!
//! Holds the operand being entered, at most one pending operation with its
//! captured left operand, and a memory accumulator. Operations chain left
//! to right: choosing a second operator first collapses the pending one,
//! so `2 + 3 * 4` evaluates as `(2 + 3) * 4`.
//!
//! Inputs that cannot be applied are ignored. The `try_*` operations report
//! why; the plain operations log the reason at `debug` and move on.

use super::display::{format_for_display, DisplaySnapshot};
use super::entry::Entry;
use super::history::{History, HistoryEntry};
use super::number::to_binary_string;
use super::operations::Operation;
use super::{CalcError, CalcResult};
use crate::config::CalculatorConfig;
use tracing::{debug, trace};

/// An operation waiting for its right operand
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    /// The chosen operation
    pub operation: Operation,
    /// Left operand captured when the operation was chosen
    pub operand: Entry,
}

/// Keypad calculator state
#[derive(Debug, Clone)]
pub struct Calculator {
    current: Entry,
    pending: Option<PendingOperation>,
    memory: f64,
    history: History,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            current: Entry::empty(),
            pending: None,
            memory: 0.0,
            history: History::with_capacity(config.history_capacity),
            config,
        }
    }

    // ===== State accessors =====

    /// The operand being entered, or the last result
    #[must_use]
    pub fn current_operand(&self) -> &Entry {
        &self.current
    }

    /// The captured left operand, when an operation is pending
    #[must_use]
    pub fn previous_operand(&self) -> Option<&Entry> {
        self.pending.as_ref().map(|p| &p.operand)
    }

    /// The pending operation, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    /// The pending operation together with its left operand
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// The memory accumulator
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// The computation tape
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ===== Entry =====

    /// Resets operands, pending operation and memory.
    ///
    /// The computation tape is kept; see [`Calculator::clear_history`].
    pub fn clear(&mut self) {
        self.current = Entry::empty();
        self.pending = None;
        self.memory = 0.0;
        trace!("cleared");
    }

    /// Empties the computation tape
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Removes the last character of the current operand
    pub fn delete(&mut self) {
        self.current.pop();
        trace!(current = %self.current, "deleted last character");
    }

    /// Appends a digit or decimal point token to the current operand.
    ///
    /// A second `.` is ignored. Other tokens are appended as given.
    pub fn append_number(&mut self, token: &str) {
        if token == "." && self.current.as_text().contains('.') {
            debug!(current = %self.current, "ignored second decimal point");
            return;
        }
        self.current.push_str(token);
        trace!(token, current = %self.current, "appended");
    }

    // ===== Operations =====

    /// Chooses the operation to apply to the current operand and the next
    /// one entered.
    ///
    /// Ignored while the current operand is empty. A pending operation is
    /// computed first; if that computation cannot run, the pending pair is
    /// replaced regardless.
    pub fn choose_operation(&mut self, operation: Operation) {
        if self.current.is_empty() {
            debug!(%operation, "ignored operation with empty operand");
            return;
        }
        if self.pending.is_some() {
            self.compute();
        }
        let operand = std::mem::take(&mut self.current);
        trace!(%operation, %operand, "operation pending");
        self.pending = Some(PendingOperation { operation, operand });
    }

    /// Chooses an operation by its button symbol (`+`, `-`, `*` or `÷`)
    pub fn try_choose_operation_symbol(&mut self, symbol: &str) -> CalcResult<()> {
        let operation = symbol.parse::<Operation>()?;
        self.choose_operation(operation);
        Ok(())
    }

    /// Evaluates the pending operation against the current operand
    pub fn try_compute(&mut self) -> CalcResult<f64> {
        let pending = self.pending.as_ref().ok_or(CalcError::NoPendingOperation)?;
        let lhs = parse_operand(&pending.operand)?;
        let rhs = parse_operand(&self.current)?;
        let result = pending.operation.apply(lhs, rhs);

        if self.config.record_history {
            self.history.push(HistoryEntry::new(
                pending.operand.as_text(),
                pending.operation,
                self.current.as_text(),
                result,
            ));
        }
        trace!(lhs, operation = %pending.operation, rhs, result, "computed");

        self.current = Entry::Value(result);
        self.pending = None;
        Ok(result)
    }

    /// Evaluates the pending operation, ignoring inputs that cannot be
    /// computed
    pub fn compute(&mut self) {
        if let Err(err) = self.try_compute() {
            debug!(%err, "compute ignored");
        }
    }

    /// Replaces the current operand with its base-2 text
    pub fn try_convert_to_binary(&mut self) -> CalcResult<()> {
        let value = parse_operand(&self.current)?;
        self.current = Entry::Text(to_binary_string(value));
        trace!(current = %self.current, "converted to binary");
        Ok(())
    }

    /// Replaces the current operand with its base-2 text, ignoring
    /// operands that do not parse
    pub fn convert_to_binary(&mut self) {
        if let Err(err) = self.try_convert_to_binary() {
            debug!(%err, "binary conversion ignored");
        }
    }

    // ===== Memory =====

    /// Adds the current operand to memory and shows the new memory value
    pub fn try_add_to_memory(&mut self) -> CalcResult<f64> {
        let value = parse_operand(&self.current)?;
        self.update_memory(self.memory + value)
    }

    /// M+, ignoring operands that do not parse
    pub fn add_to_memory(&mut self) {
        if let Err(err) = self.try_add_to_memory() {
            debug!(%err, "memory add ignored");
        }
    }

    /// Subtracts the current operand from memory and shows the new memory
    /// value
    pub fn try_subtract_from_memory(&mut self) -> CalcResult<f64> {
        let value = parse_operand(&self.current)?;
        self.update_memory(self.memory - value)
    }

    /// M-, ignoring operands that do not parse
    pub fn subtract_from_memory(&mut self) {
        if let Err(err) = self.try_subtract_from_memory() {
            debug!(%err, "memory subtract ignored");
        }
    }

    fn update_memory(&mut self, memory: f64) -> CalcResult<f64> {
        if !memory.is_finite() {
            return Err(CalcError::NonFiniteMemory(memory));
        }
        self.memory = memory;
        self.current = Entry::Value(memory);
        trace!(memory, "memory updated");
        Ok(memory)
    }

    // ===== Display =====

    /// Projects the state onto the two display lines
    #[must_use]
    pub fn display(&self) -> DisplaySnapshot {
        let previous = self
            .pending
            .as_ref()
            .map(|p| format!("{} {}", format_for_display(&p.operand), p.operation))
            .unwrap_or_default();
        DisplaySnapshot {
            previous,
            current: format_for_display(&self.current),
        }
    }
}

fn parse_operand(entry: &Entry) -> CalcResult<f64> {
    entry
        .parse()
        .ok_or_else(|| CalcError::UnparseableOperand(entry.as_text().into_owned()))
}
