//! Key session runner
//!
//! Every key is validated before the first one is pressed, so a typo never
//! leaves a half-applied calculation behind.

use crate::error::{CliError, CliResult};
use memcalc::config::CalculatorConfig;
use memcalc::core::history::HistoryEntry;
use memcalc::core::{Calculator, DisplaySnapshot};
use memcalc::keypad::KeypadAction;
use serde::Serialize;
use tracing::{debug, info};

/// Parses key arguments: button labels or keyboard aliases
pub fn parse_key_args<S: AsRef<str>>(keys: &[S]) -> CliResult<Vec<KeypadAction>> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            KeypadAction::from_key(key)
                .ok_or_else(|| CliError::invalid_argument(format!("unknown key {key:?}")))
        })
        .collect()
}

/// Splits stdin text into keys
#[must_use]
pub fn split_keys(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Display state after one key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Label of the key pressed
    pub key: String,
    /// Upper display line
    pub previous: String,
    /// Lower display line
    pub current: String,
    /// Memory after the key
    pub memory: f64,
}

/// Final state of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Upper display line
    pub previous: String,
    /// Lower display line
    pub current: String,
    /// Memory accumulator
    pub memory: f64,
    /// Completed computations, oldest first
    pub history: Vec<HistoryEntry>,
    /// The tape as `lhs op rhs = result` lines
    #[serde(skip)]
    pub tape: String,
    /// Per-key states, when recorded
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Runs keys against one calculator
#[derive(Debug)]
pub struct Session {
    calculator: Calculator,
    record_steps: bool,
    steps: Vec<Step>,
}

impl Session {
    /// Creates a session
    #[must_use]
    pub fn new(config: CalculatorConfig, record_steps: bool) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            record_steps,
            steps: Vec::new(),
        }
    }

    /// The calculator being driven
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Presses one key and returns the display state after it
    pub fn press(&mut self, action: KeypadAction) -> Step {
        self.calculator.press(action);
        let DisplaySnapshot { previous, current } = self.calculator.display();
        let step = Step {
            key: action.label(),
            previous,
            current,
            memory: self.calculator.memory(),
        };
        debug!(key = %step.key, current = %step.current, "key pressed");
        if self.record_steps {
            self.steps.push(step.clone());
        }
        step
    }

    /// Presses every key in order, handing each step to `on_step`
    pub fn run(&mut self, actions: &[KeypadAction], mut on_step: impl FnMut(&Step)) {
        for &action in actions {
            let step = self.press(action);
            on_step(&step);
        }
        info!(
            keys = actions.len(),
            computations = self.calculator.history().len(),
            "session finished"
        );
    }

    /// Final state, consuming recorded steps
    #[must_use]
    pub fn report(&mut self) -> SessionReport {
        let DisplaySnapshot { previous, current } = self.calculator.display();
        SessionReport {
            previous,
            current,
            memory: self.calculator.memory(),
            history: self.calculator.history().iter().cloned().collect(),
            tape: self.calculator.history().export_formatted(),
            steps: std::mem::take(&mut self.steps),
        }
    }
}
