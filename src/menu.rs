// menu.rs

use crate::operations::Operation;
use itertools::Itertools;

pub const SEPARATOR: &str =
    "===========================================================================";
pub const MENU_TITLE: &str = "Please choose one of the following operations:";
pub const SELECTION_PROMPT: &str = "Please type your choice number and press enter: ";

/// What a menu entry does once selected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Calculate(Operation),
    ShowHistory,
    Exit,
}

impl Action {
    /// Numeric operands the action consumes. History and exit take none.
    pub fn arity(self) -> usize {
        match self {
            Action::Calculate(op) => op.arity(),
            Action::ShowHistory | Action::Exit => 0,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub code: &'static str,
    pub label: &'static str,
    pub action: Action,
}

impl OperationDescriptor {
    pub fn arity(&self) -> usize {
        self.action.arity()
    }
}

/// Menu order. Exit is listed last but selected with "0".
pub static REGISTRY: [OperationDescriptor; 9] = [
    OperationDescriptor {
        code: "1",
        label: "Add",
        action: Action::Calculate(Operation::Add),
    },
    OperationDescriptor {
        code: "2",
        label: "Difference",
        action: Action::Calculate(Operation::Subtract),
    },
    OperationDescriptor {
        code: "3",
        label: "Multiply",
        action: Action::Calculate(Operation::Multiply),
    },
    OperationDescriptor {
        code: "4",
        label: "Divide",
        action: Action::Calculate(Operation::Divide),
    },
    OperationDescriptor {
        code: "5",
        label: "Power",
        action: Action::Calculate(Operation::Power),
    },
    OperationDescriptor {
        code: "6",
        label: "Square root",
        action: Action::Calculate(Operation::SquareRoot),
    },
    OperationDescriptor {
        code: "7",
        label: "Cube root",
        action: Action::Calculate(Operation::CubeRoot),
    },
    OperationDescriptor {
        code: "8",
        label: "Show operation history",
        action: Action::ShowHistory,
    },
    OperationDescriptor {
        code: "0",
        label: "Exit",
        action: Action::Exit,
    },
];

pub fn lookup(code: &str) -> Option<&'static OperationDescriptor> {
    REGISTRY.iter().find(|d| d.code == code)
}

/// The menu block printed before every selection, starting with a blank line.
pub fn render_menu() -> String {
    let entries = REGISTRY
        .iter()
        .map(|d| format!("{}. {}", d.code, d.label))
        .join("\n");
    format!("\n{}\n{}\n{}", SEPARATOR, MENU_TITLE, entries)
}
