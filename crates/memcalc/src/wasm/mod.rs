//! Web Frontend for the Calculator
//!
//! The mock DOM, keypad layout and driver are always built so the page
//! wiring is testable natively; the `wasm-bindgen` binding needs the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{
    data_attribute, resolve_control, KeypadButtonDef, MockDomKeypadExt, WasmKeypad,
    CURRENT_OPERAND_ID, DATA_ALL_CLEAR, DATA_CONVERT_BINARY, DATA_CURRENT_OPERAND, DATA_DELETE,
    DATA_EQUALS, DATA_M_MINUS, DATA_M_PLUS, DATA_NUMBER, DATA_OPERATION, DATA_PREVIOUS_OPERAND,
    PREVIOUS_OPERAND_ID,
};
