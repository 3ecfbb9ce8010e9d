//! Calculator buttons as data

use crate::operator::Operator;

/// Every input the calculator accepts, one per button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(char),
    Point,
    Negate,
    Backspace,
    Operator(Operator),
    Equals,
    Square,
    SquareRoot,
    Reciprocal,
    ClearAll,
    ClearEntry,
}

impl Input {
    pub fn label(self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Point => ".".to_string(),
            Input::Negate => "±".to_string(),
            Input::Backspace => "⌫".to_string(),
            Input::Operator(op) => op.symbol().to_string(),
            Input::Equals => "=".to_string(),
            Input::Square => "x²".to_string(),
            Input::SquareRoot => "√x".to_string(),
            Input::Reciprocal => "1/x".to_string(),
            Input::ClearAll => "C".to_string(),
            Input::ClearEntry => "CE".to_string(),
        }
    }

    /// Whether the button stays usable while an error sentinel is shown.
    /// Only inputs that reset the entry survive.
    pub fn enabled_during_error(self) -> bool {
        matches!(
            self,
            Input::Digit(_) | Input::Backspace | Input::ClearAll | Input::ClearEntry
        )
    }
}
