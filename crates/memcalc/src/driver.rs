//! Unified Calculator Driver
//!
//! Test logic is written once against [`CalculatorDriver`] and run against
//! every front end: the bare state machine and the mock-DOM page.

use crate::core::Calculator;
use crate::keypad::KeypadAction;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use memcalc::prelude::*;
///
/// fn check<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_keys("6 ÷ 3 =");
///     assert_eq!(driver.current_display(), "2");
/// }
///
/// check(&mut Calculator::new());
/// check(&mut WasmDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Activates the control bound to `action`
    fn press(&mut self, action: KeypadAction);

    /// Text of the lower display line
    fn current_display(&self) -> String;

    /// Text of the upper display line
    fn previous_display(&self) -> String;

    /// The memory accumulator
    fn memory(&self) -> f64;

    /// Presses whitespace-separated button labels.
    ///
    /// # Panics
    ///
    /// Panics on a label with no keypad action; drivers are test tools.
    #[allow(clippy::panic)]
    fn press_keys(&mut self, keys: &str) {
        for key in keys.split_whitespace() {
            let action = key
                .parse::<KeypadAction>()
                .unwrap_or_else(|e| panic!("invalid key in driver script: {e}"));
            self.press(action);
        }
    }

    /// Returns to the cleared state
    fn reset(&mut self) {
        self.press(KeypadAction::AllClear);
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: KeypadAction) {
        Calculator::press(self, action);
    }

    fn current_display(&self) -> String {
        self.display().current
    }

    fn previous_display(&self) -> String {
        self.display().previous
    }

    fn memory(&self) -> f64 {
        Calculator::memory(self)
    }
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations and their display
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("1 2 + 3 0 =");
    assert_eq!(driver.current_display(), "42");
    assert_eq!(driver.previous_display(), "");

    driver.reset();
    driver.press_keys("1 0 - 4 =");
    assert_eq!(driver.current_display(), "6");

    driver.reset();
    driver.press_keys("6 * 7 =");
    assert_eq!(driver.current_display(), "42");

    driver.reset();
    driver.press_keys("7 ÷ 2 =");
    assert_eq!(driver.current_display(), "3.5");
    driver.reset();
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("2 + 3 *");
    assert_eq!(driver.previous_display(), "5 *");
    assert_eq!(driver.current_display(), "");

    driver.press_keys("4 =");
    assert_eq!(driver.current_display(), "20");
    assert_eq!(driver.previous_display(), "");
    driver.reset();
}

/// Verifies decimal entry, delete and thousands grouping
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("1 2 3 4 . . 5");
    assert_eq!(driver.current_display(), "1,234.5");

    driver.press_keys("DEL DEL");
    assert_eq!(driver.current_display(), "1,234");

    driver.press_keys("0 0 0");
    assert_eq!(driver.current_display(), "1,234,000");
    driver.reset();
}

/// Verifies memory accumulation and that all-clear resets it
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("5 M+");
    assert_eq!(driver.memory(), 5.0);
    assert_eq!(driver.current_display(), "5");

    driver.press_keys("M+");
    assert_eq!(driver.memory(), 10.0);
    assert_eq!(driver.current_display(), "10");

    driver.press_keys("M-");
    assert_eq!(driver.memory(), 0.0);

    driver.press_keys("3 M+ AC");
    assert_eq!(driver.memory(), 0.0);
    assert_eq!(driver.current_display(), "");
}

/// Verifies binary conversion
pub fn verify_binary<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("1 0 BIN");
    assert_eq!(driver.current_display(), "1,010");

    driver.reset();
    driver.press_keys("BIN");
    assert_eq!(driver.current_display(), "");
    driver.reset();
}

/// Verifies that invalid sequences leave the state untouched
pub fn verify_ignored_inputs<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("+ =");
    assert_eq!(driver.current_display(), "");
    assert_eq!(driver.previous_display(), "");

    driver.press_keys("9 + =");
    assert_eq!(driver.previous_display(), "9 +");
    assert_eq!(driver.current_display(), "");

    driver.press_keys(". =");
    assert_eq!(driver.previous_display(), "9 +");
    assert_eq!(driver.current_display(), ".");
    driver.reset();
}

/// Runs every specification
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_entry_editing(driver);
    verify_memory(driver);
    verify_binary(driver);
    verify_ignored_inputs(driver);
}
