//! Keypad layout and control binding
//!
//! Buttons are discovered the way the page script finds them: by `data-*`
//! attribute. Number and operation buttons carry no value attribute; their
//! visible text is the token handed to the calculator.

use super::dom::{DomElement, MockDom};
use crate::core::Operation;
use crate::keypad::KeypadAction;
use tracing::debug;

/// Attribute marking digit and decimal-point buttons
pub const DATA_NUMBER: &str = "data-number";
/// Attribute marking operator buttons
pub const DATA_OPERATION: &str = "data-operation";
/// Attribute marking the equals button
pub const DATA_EQUALS: &str = "data-equals";
/// Attribute marking the delete button
pub const DATA_DELETE: &str = "data-delete";
/// Attribute marking the all-clear button
pub const DATA_ALL_CLEAR: &str = "data-all-clear";
/// Attribute marking the binary conversion button
pub const DATA_CONVERT_BINARY: &str = "data-convert-binary";
/// Attribute marking the M+ button
pub const DATA_M_PLUS: &str = "data-m-plus";
/// Attribute marking the M- button
pub const DATA_M_MINUS: &str = "data-m-minus";
/// Attribute marking the upper display line
pub const DATA_PREVIOUS_OPERAND: &str = "data-previous-operand";
/// Attribute marking the lower display line
pub const DATA_CURRENT_OPERAND: &str = "data-current-operand";

/// Element id of the upper display line
pub const PREVIOUS_OPERAND_ID: &str = "previous-operand";
/// Element id of the lower display line
pub const CURRENT_OPERAND_ID: &str = "current-operand";

/// Returns the `data-*` attribute a button for `action` carries
#[must_use]
pub const fn data_attribute(action: KeypadAction) -> &'static str {
    match action {
        KeypadAction::Number(_) | KeypadAction::Decimal => DATA_NUMBER,
        KeypadAction::Operation(_) => DATA_OPERATION,
        KeypadAction::Equals => DATA_EQUALS,
        KeypadAction::Delete => DATA_DELETE,
        KeypadAction::AllClear => DATA_ALL_CLEAR,
        KeypadAction::ConvertBinary => DATA_CONVERT_BINARY,
        KeypadAction::MemoryAdd => DATA_M_PLUS,
        KeypadAction::MemorySubtract => DATA_M_MINUS,
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Columns spanned
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a new single-column button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Number(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operation(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::AllClear => "btn-all-clear".to_string(),
            KeypadAction::ConvertBinary => "btn-convert-binary".to_string(),
            KeypadAction::MemoryAdd => "btn-m-plus".to_string(),
            KeypadAction::MemorySubtract => "btn-m-minus".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            span: 1,
        }
    }

    /// Makes the button span `span` columns
    #[must_use]
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Builds the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let element = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_attr(data_attribute(self.action), "");
        if self.span > 1 {
            element.with_class(&format!("span-{}", span_word(self.span)))
        } else {
            element
        }
    }
}

/// Returns a name for an operator (for element IDs)
fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

fn span_word(span: usize) -> &'static str {
    match span {
        2 => "two",
        3 => "three",
        _ => "many",
    }
}

/// Keypad layout definition
///
/// ```text
/// [   AC    ] [DEL] [ ÷ ]
/// [ 1 ] [ 2 ] [ 3 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ . ] [ 0 ] [    =    ]
/// [BIN] [M+ ] [M- ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use crate::keypad::KeypadAction::{
            AllClear, ConvertBinary, Decimal, Delete, Equals, MemoryAdd, MemorySubtract, Number,
        };
        let op = KeypadAction::Operation;

        let buttons = vec![
            KeypadButtonDef::new(AllClear, 0, 0).spanning(2),
            KeypadButtonDef::new(Delete, 0, 2),
            KeypadButtonDef::new(op(Operation::Divide), 0, 3),
            KeypadButtonDef::new(Number('1'), 1, 0),
            KeypadButtonDef::new(Number('2'), 1, 1),
            KeypadButtonDef::new(Number('3'), 1, 2),
            KeypadButtonDef::new(op(Operation::Multiply), 1, 3),
            KeypadButtonDef::new(Number('4'), 2, 0),
            KeypadButtonDef::new(Number('5'), 2, 1),
            KeypadButtonDef::new(Number('6'), 2, 2),
            KeypadButtonDef::new(op(Operation::Add), 2, 3),
            KeypadButtonDef::new(Number('7'), 3, 0),
            KeypadButtonDef::new(Number('8'), 3, 1),
            KeypadButtonDef::new(Number('9'), 3, 2),
            KeypadButtonDef::new(op(Operation::Subtract), 3, 3),
            KeypadButtonDef::new(Decimal, 4, 0),
            KeypadButtonDef::new(Number('0'), 4, 1),
            KeypadButtonDef::new(Equals, 4, 2).spanning(2),
            KeypadButtonDef::new(ConvertBinary, 5, 0),
            KeypadButtonDef::new(MemoryAdd, 5, 1),
            KeypadButtonDef::new(MemorySubtract, 5, 2),
        ];

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button bound to an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(KeypadButtonDef::to_element).collect()
    }

    /// Builds a page with the two display lines followed by the keypad
    #[must_use]
    pub fn create_page(&self) -> MockDom {
        let mut dom = MockDom::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(PREVIOUS_OPERAND_ID)
                .with_class("previous-operand")
                .with_attr(DATA_PREVIOUS_OPERAND, ""),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(CURRENT_OPERAND_ID)
                .with_class("current-operand")
                .with_attr(DATA_CURRENT_OPERAND, ""),
        );
        dom.add_keypad(self);
        dom
    }
}

/// Resolves a control element to the action its click performs.
///
/// Number and operation buttons are resolved from their text, every other
/// control from its marker attribute alone.
#[must_use]
pub fn resolve_control(element: &DomElement) -> Option<KeypadAction> {
    let text = element.text_content.trim();
    let action = if element.has_attr(DATA_NUMBER) {
        match text {
            "." => Some(KeypadAction::Decimal),
            _ => text
                .parse::<KeypadAction>()
                .ok()
                .filter(|a| matches!(a, KeypadAction::Number(_))),
        }
    } else if element.has_attr(DATA_OPERATION) {
        text.parse::<Operation>().ok().map(KeypadAction::Operation)
    } else if element.has_attr(DATA_EQUALS) {
        Some(KeypadAction::Equals)
    } else if element.has_attr(DATA_DELETE) {
        Some(KeypadAction::Delete)
    } else if element.has_attr(DATA_ALL_CLEAR) {
        Some(KeypadAction::AllClear)
    } else if element.has_attr(DATA_CONVERT_BINARY) {
        Some(KeypadAction::ConvertBinary)
    } else if element.has_attr(DATA_M_PLUS) {
        Some(KeypadAction::MemoryAdd)
    } else if element.has_attr(DATA_M_MINUS) {
        Some(KeypadAction::MemorySubtract)
    } else {
        None
    };

    if action.is_none() {
        debug!(id = %element.id, text, "element is not a keypad control");
    }
    action
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Registers every keypad button
    fn add_keypad(&mut self, keypad: &WasmKeypad);

    /// Resolves the action bound to the element with `id`
    fn control_action(&self, id: &str) -> Option<KeypadAction>;
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        for element in keypad.create_dom_elements() {
            self.register_element(element);
        }
    }

    fn control_action(&self, id: &str) -> Option<KeypadAction> {
        self.get_element(id).and_then(resolve_control)
    }
}
