//! Binary operators

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Mod => '%',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to `(lhs, rhs)`.
    ///
    /// `Div` and `Mod` fail on a zero divisor: `Undefined` when the dividend
    /// is zero too, `DivisionByZero` otherwise. `Mod` is floored, so the
    /// result takes the sign of the divisor (`-7 % 3 == 2`).
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                check_divisor(lhs, rhs)?;
                Ok(lhs / rhs)
            }
            Operator::Mod => {
                check_divisor(lhs, rhs)?;
                let r = lhs % rhs;
                if r != 0.0 && (r < 0.0) != (rhs < 0.0) {
                    Ok(r + rhs)
                } else {
                    Ok(r)
                }
            }
        }
    }
}

fn check_divisor(lhs: f64, rhs: f64) -> Result<(), CalcError> {
    if rhs != 0.0 {
        Ok(())
    } else if lhs == 0.0 {
        Err(CalcError::Undefined)
    } else {
        Err(CalcError::DivisionByZero)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
