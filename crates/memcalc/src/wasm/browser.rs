//! Browser WASM bindings for the calculator
//!
//! The page script binds its buttons to these methods and redraws both
//! display lines from `previous_display` / `current_display` after each
//! call.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::Calculator;
use crate::keypad::KeypadAction;
use crate::wasm::keypad::WasmKeypad;

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: WasmKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            calculator: Calculator::new(),
            keypad: WasmKeypad::new(),
        }
    }

    /// Lower display line
    #[wasm_bindgen(getter)]
    pub fn current_display(&self) -> String {
        self.calculator.display().current
    }

    /// Upper display line
    #[wasm_bindgen(getter)]
    pub fn previous_display(&self) -> String {
        self.calculator.display().previous
    }

    /// Memory accumulator
    #[wasm_bindgen(getter)]
    pub fn memory(&self) -> f64 {
        self.calculator.memory()
    }

    /// Reset operands, pending operation and memory
    pub fn clear(&mut self) {
        self.calculator.clear();
    }

    /// Remove the last typed character
    pub fn delete(&mut self) {
        self.calculator.delete();
    }

    /// Append a digit or decimal point
    pub fn append_number(&mut self, token: &str) {
        self.calculator.append_number(token);
    }

    /// Choose an operation by its symbol; unknown symbols are ignored
    pub fn choose_operation(&mut self, symbol: &str) {
        if let Err(e) = self.calculator.try_choose_operation_symbol(symbol) {
            console::warn_1(&e.to_string().into());
        }
    }

    /// Compute the pending operation
    pub fn compute(&mut self) {
        self.calculator.compute();
    }

    /// Convert the current operand to binary
    pub fn convert_to_binary(&mut self) {
        self.calculator.convert_to_binary();
    }

    /// M+
    pub fn add_to_memory(&mut self) {
        self.calculator.add_to_memory();
    }

    /// M-
    pub fn subtract_from_memory(&mut self) {
        self.calculator.subtract_from_memory();
    }

    /// Handle a keypad button click by element ID; returns false for ids
    /// that are not keypad buttons
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        match self.keypad.find_button_by_id(button_id) {
            Some(button) => {
                let action = button.action;
                self.calculator.press(action);
                true
            }
            None => false,
        }
    }

    /// Handle a keyboard key press; returns false for unmapped keys
    pub fn handle_key(&mut self, key: &str) -> bool {
        match KeypadAction::from_key(key) {
            Some(action) => {
                self.calculator.press(action);
                true
            }
            None => false,
        }
    }

    /// Computation tape as JSON
    pub fn history_json(&self) -> String {
        self.calculator
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"memcalc initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_calculator_new() {
        let calc = BrowserCalculator::new();
        assert!(calc.current_display().is_empty());
        assert!(calc.previous_display().is_empty());
        assert_eq!(calc.memory(), 0.0);
    }

    #[test]
    fn test_operations_by_name() {
        let mut calc = BrowserCalculator::new();
        calc.append_number("6");
        calc.choose_operation("÷");
        assert_eq!(calc.previous_display(), "6 ÷");
        calc.append_number("3");
        calc.compute();
        assert_eq!(calc.current_display(), "2");
    }

    #[test]
    fn test_handle_button() {
        let mut calc = BrowserCalculator::new();
        assert!(calc.handle_button("btn-5"));
        assert!(calc.handle_button("btn-m-plus"));
        assert!(!calc.handle_button("btn-sqrt"));
        assert_eq!(calc.memory(), 5.0);
    }

    #[test]
    fn test_handle_key() {
        let mut calc = BrowserCalculator::new();
        for key in ["7", "*", "6", "Enter"] {
            assert!(calc.handle_key(key));
        }
        assert_eq!(calc.current_display(), "42");
        assert!(!calc.handle_key("F1"));
    }

    #[test]
    fn test_convert_and_delete() {
        let mut calc = BrowserCalculator::new();
        calc.append_number("5");
        calc.convert_to_binary();
        assert_eq!(calc.current_display(), "101");
        calc.delete();
        assert_eq!(calc.current_display(), "10");
    }

    #[test]
    fn test_history_json() {
        let mut calc = BrowserCalculator::new();
        assert_eq!(calc.history_json(), "[]");
        calc.handle_key("1");
        calc.handle_key("+");
        calc.handle_key("1");
        calc.handle_key("=");
        assert!(calc.history_json().contains("\"result\":2.0"));
    }
}
