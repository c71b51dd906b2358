//! memcalc - keypad calculator with memory and binary display
//!
//! A small state machine behind a two-line calculator display: operands
//! are typed digit by digit, operators chain strictly left to right, M+ and
//! M- accumulate into a memory register, and BIN rewrites the current value
//! in base 2.
//!
//! Front ends translate each button into one [`keypad::KeypadAction`] and
//! redraw from [`core::Calculator::display`] afterwards. A mock DOM driver
//! exercises the same wiring in tests; the `wasm` feature adds the
//! `wasm-bindgen` browser binding.
//!
//! # Example
//!
//! ```rust
//! use memcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_all(parse_keys("2 + 3 * 4 =").unwrap());
//! assert_eq!(calc.display().current, "20");
//!
//! calc.press_all(parse_keys("M+ AC 1 2 3 4 . 5").unwrap());
//! assert_eq!(calc.display().current, "1,234.5");
//! assert_eq!(calc.memory(), 0.0); // AC also clears memory
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        format_for_display, CalcError, CalcResult, Calculator, DisplaySnapshot, Entry, Operation,
        PendingOperation,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{parse_keys, KeypadAction};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmKeypad};
}
