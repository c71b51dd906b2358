//! Mock-DOM Driver
//!
//! Runs the page event loop without a browser: a click is recorded on the
//! mock DOM, resolved to a keypad action through the element's attributes,
//! applied to the calculator, and the display lines are written back.

use super::dom::{DomEvent, MockDom};
use super::keypad::{MockDomKeypadExt, WasmKeypad, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
use crate::config::CalculatorConfig;
use crate::core::Calculator;
use crate::driver::CalculatorDriver;
use crate::keypad::KeypadAction;
use tracing::debug;

/// Calculator wired to a mock DOM page
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator,
    keypad: WasmKeypad,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver on the standard page
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_calculator(Calculator::with_config(config))
    }

    /// Creates a driver around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        let keypad = WasmKeypad::new();
        let dom = keypad.create_page();
        let mut driver = Self {
            calculator,
            keypad,
            dom,
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates clicking the element with `element_id`.
    ///
    /// Returns the action performed, or `None` when the element is not a
    /// keypad control (the click is still recorded).
    pub fn click(&mut self, element_id: &str) -> Option<KeypadAction> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let action = self.dom.control_action(element_id)?;
        self.apply(action);
        Some(action)
    }

    /// Simulates a keyboard key press
    pub fn press_key(&mut self, key: &str) -> Option<KeypadAction> {
        self.dom.dispatch_event(DomEvent::key_press(key));
        let action = KeypadAction::from_key(key)?;
        self.apply(action);
        Some(action)
    }

    fn apply(&mut self, action: KeypadAction) {
        self.calculator.press(action);
        self.sync_dom();
    }

    /// Writes the display projection into the two display elements
    fn sync_dom(&mut self) {
        let display = self.calculator.display();
        self.dom.set_element_text(PREVIOUS_OPERAND_ID, &display.previous);
        self.dom.set_element_text(CURRENT_OPERAND_ID, &display.current);
    }

    /// Gets the upper display element's text
    #[must_use]
    pub fn previous_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(PREVIOUS_OPERAND_ID)
    }

    /// Gets the lower display element's text
    #[must_use]
    pub fn current_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(CURRENT_OPERAND_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: KeypadAction) {
        match self.keypad.find_button_by_action(action) {
            Some(button) => {
                let id = button.id.clone();
                self.click(&id);
            }
            None => {
                debug!(%action, "no button for action, applying directly");
                self.apply(action);
            }
        }
    }

    fn current_display(&self) -> String {
        self.current_element_text().unwrap_or_default().to_string()
    }

    fn previous_display(&self) -> String {
        self.previous_element_text().unwrap_or_default().to_string()
    }

    fn memory(&self) -> f64 {
        self.calculator.memory()
    }

    /// Clicks AC and starts a fresh event log
    fn reset(&mut self) {
        self.press(KeypadAction::AllClear);
        self.dom.clear_event_history();
    }
}
