//! Property-based tests for the calculator state machine
//!
//! Random key sequences must never break the invariants the display and
//! memory rely on.

#![allow(clippy::unwrap_used)]

use memcalc::core::number::to_binary_string;
use memcalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any digit character
fn digit_strategy() -> impl Strategy<Value = char> {
    (0u32..=9u32).prop_map(|d| char::from_digit(d, 10).unwrap_or('0'))
}

/// Generate any operation
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Generate any keypad action
fn keypad_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        4 => digit_strategy().prop_map(KeypadAction::Number),
        1 => Just(KeypadAction::Decimal),
        2 => operation_strategy().prop_map(KeypadAction::Operation),
        1 => Just(KeypadAction::Equals),
        1 => Just(KeypadAction::Delete),
        1 => Just(KeypadAction::AllClear),
        1 => Just(KeypadAction::ConvertBinary),
        1 => Just(KeypadAction::MemoryAdd),
        1 => Just(KeypadAction::MemorySubtract),
    ]
}

/// Generate a run of keys
fn key_sequence_strategy() -> impl Strategy<Value = Vec<KeypadAction>> {
    prop::collection::vec(keypad_action_strategy(), 0..40)
}

/// Digits with no leading zero, short enough to stay an exact integer
fn integer_text_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,14}"
}

// ===== Property tests for KeypadAction =====

proptest! {
    /// Every action parses back from its label
    #[test]
    fn prop_label_round_trip(action in keypad_action_strategy()) {
        let parsed: KeypadAction = action.label().parse().unwrap();
        prop_assert_eq!(parsed, action);
    }

    /// Every action has a non-empty label
    #[test]
    fn prop_action_has_label(action in keypad_action_strategy()) {
        prop_assert!(!action.label().is_empty());
    }
}

// ===== Property tests for Calculator =====

proptest! {
    /// Typed integers are shown with thousands separators
    #[test]
    fn prop_typed_integer_is_grouped(digits in integer_text_strategy()) {
        let mut calc = Calculator::new();
        for ch in digits.chars() {
            calc.press(KeypadAction::Number(ch));
        }
        let shown = calc.display().current;
        prop_assert_eq!(shown.replace(',', ""), digits.clone());

        let groups: Vec<&str> = shown.split(',').collect();
        prop_assert!((1..=3).contains(&groups[0].len()));
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
        prop_assert_eq!(groups.len(), (digits.len() + 2) / 3);
        prop_assert_eq!(calc.display().previous, "");
    }

    /// Deleting every typed character empties the entry
    #[test]
    fn prop_delete_undoes_typing(digits in integer_text_strategy()) {
        let mut calc = Calculator::new();
        for ch in digits.chars() {
            calc.press(KeypadAction::Number(ch));
        }
        for _ in 0..digits.len() {
            calc.press(KeypadAction::Delete);
        }
        prop_assert!(calc.current_operand().is_empty());
    }

    /// Memory never becomes non-finite
    #[test]
    fn prop_memory_stays_finite(keys in key_sequence_strategy()) {
        let mut calc = Calculator::new();
        for action in keys {
            calc.press(action);
            prop_assert!(calc.memory().is_finite());
        }
    }

    /// The upper line is blank exactly when nothing is pending
    #[test]
    fn prop_previous_line_tracks_pending(keys in key_sequence_strategy()) {
        let mut calc = Calculator::new();
        calc.press_all(keys);
        let previous = calc.display().previous;
        match calc.pending() {
            None => prop_assert!(previous.is_empty()),
            Some(pending) => prop_assert!(previous.ends_with(pending.operation.symbol())),
        }
    }

    /// An entry never holds two decimal points
    #[test]
    fn prop_single_decimal_point(keys in key_sequence_strategy()) {
        let mut calc = Calculator::new();
        for action in keys {
            calc.press(action);
            if let Entry::Text(text) = calc.current_operand() {
                prop_assert!(text.matches('.').count() <= 1);
            }
        }
    }

    /// All-clear always returns to the blank state
    #[test]
    fn prop_all_clear_resets(keys in key_sequence_strategy()) {
        let mut calc = Calculator::new();
        calc.press_all(keys);
        calc.press(KeypadAction::AllClear);
        prop_assert_eq!(calc.display(), DisplaySnapshot::default());
        prop_assert_eq!(calc.memory(), 0.0);
        prop_assert!(calc.pending().is_none());
    }

    /// Addition of small integers is exact
    #[test]
    fn prop_addition(a in 0u32..100_000, b in 0u32..100_000) {
        let mut calc = Calculator::new();
        calc.append_number(&a.to_string());
        calc.choose_operation(Operation::Add);
        calc.append_number(&b.to_string());
        calc.compute();
        prop_assert_eq!(calc.current_operand().value(), Some(f64::from(a) + f64::from(b)));
        prop_assert_eq!(calc.history().len(), 1);
    }

    /// Binary conversion of integers matches Rust's own base-2 formatting
    #[test]
    fn prop_binary_of_integer(n in 0u64..(1u64 << 52)) {
        prop_assert_eq!(to_binary_string(n as f64), format!("{n:b}"));
    }

    /// The history never exceeds its configured capacity
    #[test]
    fn prop_history_bounded(capacity in 1usize..5, keys in key_sequence_strategy()) {
        let config = CalculatorConfig::new().with_history_capacity(capacity);
        let mut calc = Calculator::with_config(config);
        calc.press_all(keys);
        prop_assert!(calc.history().len() <= capacity);
    }
}

// ===== Property tests for drivers =====

proptest! {
    /// The mock page shows exactly what the state machine projects
    #[test]
    fn prop_wasm_driver_matches_calculator(keys in key_sequence_strategy()) {
        let mut calc = Calculator::new();
        let mut driver = WasmDriver::new();
        for action in keys {
            CalculatorDriver::press(&mut calc, action);
            driver.press(action);
            prop_assert_eq!(calc.current_display(), driver.current_display());
            prop_assert_eq!(calc.previous_display(), driver.previous_display());
            prop_assert_eq!(CalculatorDriver::memory(&calc), driver.memory());
        }
    }
}
