//! Entry state machine
//!
//! The evaluator owns the two display buffers of the calculator: the entry
//! (the operand being typed, or the last result) and the temp expression
//! (a pending `operand operator` pair, or the last full expression followed
//! by `=`). The UI shell feeds it one [`Input`] at a time and re-renders
//! [`Evaluator::entry_text`] and [`Evaluator::temp_text`] afterwards.
//!
//! Division by zero and friends put the evaluator into an error state: the
//! entry line shows a sentinel message and every input except digits,
//! backspace and the two clears is ignored until the error is cleared.

use tracing::{debug, warn};

use crate::config::DEFAULT_ENTRY_MAX_LEN;
use crate::error::{CalcError, ErrorKind};
use crate::input::Input;
use crate::number::{normalize_literal, parse_entry, remove_zeros};
use crate::operator::Operator;

/// The running expression shown above the entry.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Temp {
    #[default]
    Empty,
    /// `operand op`, waiting for the right-hand side.
    Pending { operand: String, op: Operator },
    /// The last evaluated expression, `lhs op rhs =`.
    Settled { lhs: String, op: Operator, rhs: String },
}

impl Temp {
    pub fn is_empty(&self) -> bool {
        matches!(self, Temp::Empty)
    }

    /// True when the temp ends in `=`.
    pub fn is_settled(&self) -> bool {
        matches!(self, Temp::Settled { .. })
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        match self {
            Temp::Pending { op, .. } => Some(*op),
            _ => None,
        }
    }
}

impl std::fmt::Display for Temp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Temp::Empty => Ok(()),
            Temp::Pending { operand, op } => write!(f, "{} {} ", operand, op),
            Temp::Settled { lhs, op, rhs } => write!(f, "{} {} {} =", lhs, op, rhs),
        }
    }
}

/// What an operator press did to the chain.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainStep {
    /// A new chain started from the entry.
    Started,
    /// The pending operator was swapped, operand kept.
    Retargeted,
    /// The same operator was pressed again: the pending expression was
    /// evaluated and the chain re-armed with the result.
    Evaluated(String),
    /// Nothing happened.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Evaluator {
    entry: String,
    temp: Temp,
    error: Option<ErrorKind>,
    /// The entry shows a running total from a repeated operator; the next
    /// digit starts the next operand.
    awaiting_operand: bool,
    entry_max_len: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_MAX_LEN)
    }
}

impl Evaluator {
    pub fn new(entry_max_len: usize) -> Self {
        Self {
            entry: "0".to_string(),
            temp: Temp::Empty,
            error: None,
            awaiting_operand: false,
            entry_max_len: entry_max_len.max(1),
        }
    }

    // --- projection ---

    /// The raw entry literal, ignoring any error sentinel.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Text for the entry line.
    pub fn entry_text(&self) -> &str {
        match self.error {
            Some(kind) => kind.message(),
            None => &self.entry,
        }
    }

    pub fn temp(&self) -> &Temp {
        &self.temp
    }

    /// Text for the temp line.
    pub fn temp_text(&self) -> String {
        self.temp.to_string()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn is_error_active(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_enabled(&self, input: Input) -> bool {
        self.error.is_none() || input.enabled_during_error()
    }

    pub fn entry_max_len(&self) -> usize {
        self.entry_max_len
    }

    // --- dispatch ---

    pub fn press(&mut self, input: Input) -> Result<(), CalcError> {
        debug!(?input, "press");
        match input {
            Input::Digit(d) => self.add_digit(d),
            Input::Point => {
                self.add_point();
                Ok(())
            }
            Input::Negate => {
                self.negate();
                Ok(())
            }
            Input::Backspace => {
                self.backspace();
                Ok(())
            }
            Input::Operator(op) => self.math_operation(op).map(|_| ()),
            Input::Equals => self.calculate().map(|_| ()),
            Input::Square => self.square_entry(),
            Input::SquareRoot => self.sqrt_entry(),
            Input::Reciprocal => self.reciprocal_entry(),
            Input::ClearAll => {
                self.clear_all();
                Ok(())
            }
            Input::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
        }
    }

    // --- entry editing ---

    pub fn add_digit(&mut self, digit: char) -> Result<(), CalcError> {
        if !digit.is_ascii_digit() {
            return Err(CalcError::NotADigit(digit));
        }
        self.remove_error();
        self.clear_settled_temp();

        if self.awaiting_operand {
            self.entry = digit.to_string();
            self.awaiting_operand = false;
            return Ok(());
        }
        match self.entry.as_str() {
            "0" => self.entry = digit.to_string(),
            _ if self.entry.contains('e') => self.entry = digit.to_string(),
            "-0" => self.entry = format!("-{}", digit),
            _ => self.push_entry_char(digit),
        }
        Ok(())
    }

    pub fn add_point(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.clear_settled_temp();

        if self.awaiting_operand || self.entry.contains('e') {
            self.entry = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.entry.contains('.') {
            self.push_entry_char('.');
        }
    }

    /// Toggle the sign of the entry. Zero stays unsigned.
    pub fn negate(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.clear_settled_temp();

        if self.entry_is_zero() {
            return;
        }
        match self.entry.strip_prefix('-') {
            Some(rest) => self.entry = rest.to_string(),
            None => self.entry.insert(0, '-'),
        }
    }

    pub fn backspace(&mut self) {
        self.remove_error();
        self.clear_settled_temp();
        self.awaiting_operand = false;

        // scientific results are not editable digit by digit
        let len = self.entry.chars().count();
        if len <= 1 || (len == 2 && self.entry.starts_with('-')) || self.entry.contains('e') {
            self.entry = "0".to_string();
        } else {
            self.entry.pop();
        }
    }

    // --- chaining ---

    /// Start a chain from the entry. Only takes effect when the temp is
    /// empty or settled; returns whether it did.
    pub fn add_temp(&mut self, op: Operator) -> Result<bool, CalcError> {
        if self.error.is_some() || self.temp.pending_operator().is_some() {
            return Ok(false);
        }
        let operand = normalize_literal(&self.entry)?;
        self.temp = Temp::Pending { operand, op };
        self.entry = "0".to_string();
        self.awaiting_operand = false;
        Ok(true)
    }

    pub fn math_operation(&mut self, op: Operator) -> Result<ChainStep, CalcError> {
        if self.error.is_some() {
            return Ok(ChainStep::Ignored);
        }

        let step = match self.temp.pending_operator() {
            None => {
                if self.add_temp(op)? {
                    ChainStep::Started
                } else {
                    ChainStep::Ignored
                }
            }
            Some(pending) if pending != op => {
                if let Temp::Pending { op: current, .. } = &mut self.temp {
                    *current = op;
                }
                ChainStep::Retargeted
            }
            Some(_) => match self.calculate()? {
                Some(result) => {
                    self.temp = Temp::Pending {
                        operand: result.clone(),
                        op,
                    };
                    self.awaiting_operand = true;
                    ChainStep::Evaluated(result)
                }
                None => ChainStep::Ignored,
            },
        };
        debug!(?step, temp = %self.temp, entry = %self.entry, "operator");
        Ok(step)
    }

    /// Evaluate the pending expression. Returns the rendered result, or
    /// `None` when nothing is pending.
    pub fn calculate(&mut self) -> Result<Option<String>, CalcError> {
        if self.error.is_some() {
            return Ok(None);
        }
        let (operand, op) = match &self.temp {
            Temp::Pending { operand, op } => (operand.clone(), *op),
            _ => return Ok(None),
        };

        let lhs = parse_entry(&operand)?;
        let rhs = parse_entry(&self.entry)?;
        let value = match op.apply(lhs, rhs) {
            Ok(value) if value.is_finite() => value,
            Ok(_) => return Err(self.fail(CalcError::Overflow)),
            Err(err) => return Err(self.fail(err)),
        };

        let result = remove_zeros(value);
        self.temp = Temp::Settled {
            lhs: operand,
            op,
            rhs: remove_zeros(rhs),
        };
        self.entry = result.clone();
        debug!(temp = %self.temp, result = %result, "calculated");
        Ok(Some(result))
    }

    // --- unary operations ---

    pub fn square_entry(&mut self) -> Result<(), CalcError> {
        self.apply_unary(|x| Ok(x * x))
    }

    pub fn sqrt_entry(&mut self) -> Result<(), CalcError> {
        self.apply_unary(|x| {
            if x < 0.0 {
                Err(CalcError::InvalidInput(remove_zeros(x)))
            } else {
                Ok(x.sqrt())
            }
        })
    }

    pub fn reciprocal_entry(&mut self) -> Result<(), CalcError> {
        self.apply_unary(|x| Operator::Div.apply(1.0, x))
    }

    fn apply_unary(
        &mut self,
        f: impl FnOnce(f64) -> Result<f64, CalcError>,
    ) -> Result<(), CalcError> {
        if self.error.is_some() {
            return Ok(());
        }
        let value = parse_entry(&self.entry)?;
        if value == 0.0 {
            return Ok(());
        }
        match f(value) {
            Ok(result) if result.is_finite() => {
                self.entry = remove_zeros(result);
                Ok(())
            }
            Ok(_) => Err(self.fail(CalcError::Overflow)),
            Err(err) => Err(self.fail(err)),
        }
    }

    // --- clearing ---

    pub fn clear_all(&mut self) {
        self.error = None;
        self.entry = "0".to_string();
        self.temp = Temp::Empty;
        self.awaiting_operand = false;
    }

    /// Reset the entry. A settled temp goes too; a pending one is kept.
    pub fn clear_entry(&mut self) {
        self.remove_error();
        self.clear_settled_temp();
        self.entry = "0".to_string();
        self.awaiting_operand = false;
    }

    // --- internals ---

    fn fail(&mut self, err: CalcError) -> CalcError {
        if let Some(kind) = err.kind() {
            warn!(error = %kind, temp = %self.temp, entry = %self.entry, "entering error state");
            self.error = Some(kind);
            self.awaiting_operand = false;
        }
        err
    }

    fn remove_error(&mut self) {
        if self.error.take().is_some() {
            debug!("error cleared");
            self.entry = "0".to_string();
            self.awaiting_operand = false;
        }
    }

    fn clear_settled_temp(&mut self) {
        if self.temp.is_settled() {
            self.temp = Temp::Empty;
        }
    }

    fn entry_is_zero(&self) -> bool {
        parse_entry(&self.entry).map_or(true, |v| v == 0.0)
    }

    /// Negative entries get one extra character for the sign.
    fn push_entry_char(&mut self, c: char) {
        let limit = self.entry_max_len + usize::from(self.entry.starts_with('-'));
        if self.entry.chars().count() < limit {
            self.entry.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(calc: &mut Evaluator, digits: &str) {
        for d in digits.chars() {
            if d == '.' {
                calc.add_point();
            } else {
                calc.add_digit(d).unwrap();
            }
        }
    }

    #[test]
    fn test_defaults() {
        let calc = Evaluator::default();
        assert_eq!(calc.entry_text(), "0");
        assert_eq!(calc.temp_text(), "");
        assert!(!calc.is_error_active());
    }

    #[test]
    fn test_digit_entry_replaces_zero() {
        let mut calc = Evaluator::default();
        calc.add_digit('0').unwrap();
        assert_eq!(calc.entry(), "0");
        type_digits(&mut calc, "120");
        assert_eq!(calc.entry(), "120");
        assert_eq!(calc.add_digit('x'), Err(CalcError::NotADigit('x')));
        assert_eq!(calc.entry(), "120");
    }

    #[test]
    fn test_single_point() {
        let mut calc = Evaluator::default();
        calc.add_point();
        type_digits(&mut calc, "5.2.");
        assert_eq!(calc.entry(), "0.52");
    }

    #[test]
    fn test_entry_length_bound() {
        let mut calc = Evaluator::new(4);
        type_digits(&mut calc, "123456");
        assert_eq!(calc.entry(), "1234");
        calc.negate();
        assert_eq!(calc.entry(), "-1234");

        let mut calc = Evaluator::new(4);
        type_digits(&mut calc, "12");
        calc.negate();
        type_digits(&mut calc, "3456");
        assert_eq!(calc.entry(), "-1234");
    }

    #[test]
    fn test_negate_toggles() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "42");
        calc.negate();
        assert_eq!(calc.entry(), "-42");
        calc.negate();
        assert_eq!(calc.entry(), "42");
    }

    #[test]
    fn test_negate_skips_zero() {
        let mut calc = Evaluator::default();
        calc.negate();
        assert_eq!(calc.entry(), "0");
        calc.add_point();
        calc.negate();
        assert_eq!(calc.entry(), "0.");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.entry(), "12");
        calc.backspace();
        calc.backspace();
        assert_eq!(calc.entry(), "0");
        calc.backspace();
        assert_eq!(calc.entry(), "0");

        type_digits(&mut calc, "7");
        calc.negate();
        calc.backspace();
        assert_eq!(calc.entry(), "0");
    }

    #[test]
    fn test_backspace_on_scientific_result() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "1");
        calc.math_operation(Operator::Div).unwrap();
        type_digits(&mut calc, "100000");
        calc.calculate().unwrap();
        assert_eq!(calc.entry(), "1e-05");
        calc.backspace();
        assert_eq!(calc.entry(), "0");
    }

    #[test]
    fn test_sum() {
        let mut calc = Evaluator::default();
        calc.add_digit('2').unwrap();
        assert_eq!(calc.math_operation(Operator::Add), Ok(ChainStep::Started));
        assert_eq!(calc.temp_text(), "2 + ");
        assert_eq!(calc.entry(), "0");
        calc.add_digit('2').unwrap();
        assert_eq!(calc.calculate(), Ok(Some("4".to_string())));
        assert_eq!(calc.entry_text(), "4");
        assert_eq!(calc.temp_text(), "2 + 2 =");
    }

    #[test]
    fn test_whole_division_drops_fraction() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "6");
        calc.math_operation(Operator::Div).unwrap();
        type_digits(&mut calc, "3");
        assert_eq!(calc.calculate(), Ok(Some("2".to_string())));

        calc.clear_all();
        type_digits(&mut calc, "1");
        calc.math_operation(Operator::Div).unwrap();
        type_digits(&mut calc, "3");
        assert_eq!(calc.calculate(), Ok(Some("0.3333333333333333".to_string())));
    }

    #[test]
    fn test_repeated_operator_evaluates_and_rearms() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "5");
        calc.math_operation(Operator::Add).unwrap();
        type_digits(&mut calc, "3");
        assert_eq!(
            calc.math_operation(Operator::Add),
            Ok(ChainStep::Evaluated("8".to_string()))
        );
        assert_eq!(calc.entry_text(), "8");
        assert_eq!(calc.temp_text(), "8 + ");

        // next operand starts fresh
        type_digits(&mut calc, "2");
        assert_eq!(calc.entry(), "2");
        assert_eq!(calc.calculate(), Ok(Some("10".to_string())));
        assert_eq!(calc.temp_text(), "8 + 2 =");
    }

    #[test]
    fn test_retarget_keeps_operand() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "9");
        calc.math_operation(Operator::Add).unwrap();
        assert_eq!(calc.math_operation(Operator::Mul), Ok(ChainStep::Retargeted));
        assert_eq!(calc.temp_text(), "9 * ");
        type_digits(&mut calc, "2");
        assert_eq!(calc.calculate(), Ok(Some("18".to_string())));
    }

    #[test]
    fn test_operator_after_result_starts_new_chain() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "4");
        calc.math_operation(Operator::Sub).unwrap();
        type_digits(&mut calc, "6");
        calc.calculate().unwrap();
        assert_eq!(calc.entry(), "-2");

        assert_eq!(calc.math_operation(Operator::Mul), Ok(ChainStep::Started));
        assert_eq!(calc.temp_text(), "-2 * ");
        assert_eq!(calc.entry(), "0");
    }

    #[test]
    fn test_calculate_without_pending_is_noop() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "7");
        assert_eq!(calc.calculate(), Ok(None));
        assert_eq!(calc.entry(), "7");

        calc.math_operation(Operator::Add).unwrap();
        type_digits(&mut calc, "1");
        calc.calculate().unwrap();
        // settled: pressing equals again does nothing
        assert_eq!(calc.calculate(), Ok(None));
        assert_eq!(calc.temp_text(), "7 + 1 =");
        assert_eq!(calc.entry(), "8");
    }

    #[test]
    fn test_digit_after_result_appends() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "2");
        calc.math_operation(Operator::Add).unwrap();
        type_digits(&mut calc, "2");
        calc.calculate().unwrap();
        type_digits(&mut calc, "5");
        assert_eq!(calc.entry(), "45");
        assert!(calc.temp().is_empty());
    }

    #[test]
    fn test_point_after_result_appends() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "3");
        calc.math_operation(Operator::Mul).unwrap();
        type_digits(&mut calc, "3");
        calc.calculate().unwrap();
        type_digits(&mut calc, ".5");
        assert_eq!(calc.entry(), "9.5");
    }

    #[test]
    fn test_digit_after_scientific_result_starts_over() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "1");
        calc.math_operation(Operator::Div).unwrap();
        type_digits(&mut calc, "100000");
        calc.calculate().unwrap();
        assert_eq!(calc.entry(), "1e-05");
        type_digits(&mut calc, "7");
        assert_eq!(calc.entry(), "7");

        calc.clear_all();
        type_digits(&mut calc, "1");
        calc.math_operation(Operator::Div).unwrap();
        type_digits(&mut calc, "100000");
        calc.calculate().unwrap();
        calc.add_point();
        assert_eq!(calc.entry(), "0.");
    }

    #[test]
    fn test_negative_zero_results_show_zero() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "6");
        calc.negate();
        calc.math_operation(Operator::Mod).unwrap();
        type_digits(&mut calc, "3");
        assert_eq!(calc.calculate(), Ok(Some("0".to_string())));
        assert_eq!(calc.entry_text(), "0");
        calc.negate();
        assert_eq!(calc.entry(), "0");

        calc.clear_all();
        calc.math_operation(Operator::Mul).unwrap();
        type_digits(&mut calc, "5");
        calc.negate();
        assert_eq!(calc.calculate(), Ok(Some("0".to_string())));
        assert_eq!(calc.temp_text(), "0 * -5 =");
    }

    #[test]
    fn test_temp_operand_is_normalized() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "5.");
        calc.math_operation(Operator::Mod).unwrap();
        assert_eq!(calc.temp_text(), "5 % ");
        type_digits(&mut calc, "2.50");
        calc.calculate().unwrap();
        assert_eq!(calc.temp_text(), "5 % 2.5 =");
        assert_eq!(calc.entry(), "0");
    }

    #[test]
    fn test_division_by_zero() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "10");
        calc.math_operation(Operator::Div).unwrap();
        assert_eq!(calc.calculate(), Err(CalcError::DivisionByZero));
        assert_eq!(calc.error(), Some(ErrorKind::DivisionByZero));
        assert_eq!(calc.entry_text(), "Division by zero");
        assert_eq!(calc.temp_text(), "10 / ");
    }

    #[test]
    fn test_zero_over_zero_is_undefined() {
        let mut calc = Evaluator::default();
        calc.math_operation(Operator::Div).unwrap();
        assert_eq!(calc.calculate(), Err(CalcError::Undefined));
        assert_eq!(calc.entry_text(), "Result is undefined");
    }

    #[test]
    fn test_zero_mod_zero_is_undefined() {
        let mut calc = Evaluator::default();
        calc.math_operation(Operator::Mod).unwrap();
        assert_eq!(calc.calculate(), Err(CalcError::Undefined));
        assert_eq!(calc.error(), Some(ErrorKind::Undefined));
        assert_eq!(calc.entry_text(), "Result is undefined");
    }

    #[test]
    fn test_backspace_clears_error() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "7");
        calc.math_operation(Operator::Div).unwrap();
        let _ = calc.calculate();
        assert!(calc.is_error_active());
        assert!(calc.is_enabled(Input::Backspace));

        calc.backspace();
        assert!(!calc.is_error_active());
        assert_eq!(calc.entry_text(), "0");
        assert_eq!(calc.temp_text(), "7 / ");
        assert!(calc.is_enabled(Input::Equals));
    }

    #[test]
    fn test_error_locks_inputs_until_cleared() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "3");
        calc.math_operation(Operator::Mod).unwrap();
        let _ = calc.calculate();
        assert!(calc.is_error_active());
        assert!(!calc.is_enabled(Input::Operator(Operator::Add)));
        assert!(!calc.is_enabled(Input::Square));
        assert!(calc.is_enabled(Input::Digit('1')));

        let before = calc.clone();
        assert_eq!(calc.math_operation(Operator::Add), Ok(ChainStep::Ignored));
        calc.add_point();
        calc.negate();
        assert_eq!(calc.square_entry(), Ok(()));
        assert_eq!(calc.calculate(), Ok(None));
        assert_eq!(calc.entry_text(), before.entry_text());
        assert_eq!(calc.temp(), before.temp());

        calc.add_digit('4').unwrap();
        assert!(!calc.is_error_active());
        assert_eq!(calc.entry(), "4");
        assert!(calc.is_enabled(Input::Operator(Operator::Add)));
        assert_eq!(calc.temp_text(), "3 % ");
    }

    #[test]
    fn test_repeated_operator_into_zero_divisor() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "8");
        calc.math_operation(Operator::Div).unwrap();
        assert_eq!(
            calc.math_operation(Operator::Div),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(calc.temp_text(), "8 / ");
        assert!(calc.is_error_active());
    }

    #[test]
    fn test_unary_operations() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "12");
        calc.square_entry().unwrap();
        assert_eq!(calc.entry(), "144");
        calc.sqrt_entry().unwrap();
        assert_eq!(calc.entry(), "12");
        calc.reciprocal_entry().unwrap();
        assert_eq!(calc.entry(), "0.08333333333333333");

        calc.clear_entry();
        type_digits(&mut calc, "4");
        calc.reciprocal_entry().unwrap();
        assert_eq!(calc.entry(), "0.25");
        type_digits(&mut calc, "9");
        assert_eq!(calc.entry(), "0.259");
    }

    #[test]
    fn test_digit_after_unary_appends() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "9");
        calc.square_entry().unwrap();
        type_digits(&mut calc, "1");
        assert_eq!(calc.entry(), "811");
    }

    #[test]
    fn test_unary_skips_zero() {
        let mut calc = Evaluator::default();
        assert_eq!(calc.reciprocal_entry(), Ok(()));
        assert_eq!(calc.entry(), "0");
        assert!(!calc.is_error_active());
    }

    #[test]
    fn test_sqrt_of_negative() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "9");
        calc.negate();
        assert!(matches!(calc.sqrt_entry(), Err(CalcError::InvalidInput(_))));
        assert_eq!(calc.entry_text(), "Invalid input");
        calc.clear_entry();
        assert_eq!(calc.entry_text(), "0");
    }

    #[test]
    fn test_overflow() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "1");
        for _ in 0..9 {
            calc.square_entry().unwrap();
        }
        assert_eq!(calc.entry(), "1");

        calc.clear_all();
        type_digits(&mut calc, "9999999999999999");
        let mut result = Ok(());
        for _ in 0..10 {
            result = calc.square_entry();
            if result.is_err() {
                break;
            }
        }
        assert_eq!(result, Err(CalcError::Overflow));
        assert_eq!(calc.error(), Some(ErrorKind::Overflow));
    }

    #[test]
    fn test_clear_entry_keeps_pending_temp() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "5");
        calc.math_operation(Operator::Sub).unwrap();
        type_digits(&mut calc, "99");
        calc.clear_entry();
        assert_eq!(calc.entry(), "0");
        assert_eq!(calc.temp_text(), "5 - ");

        type_digits(&mut calc, "1");
        calc.calculate().unwrap();
        calc.clear_entry();
        assert!(calc.temp().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut calc = Evaluator::default();
        type_digits(&mut calc, "5");
        calc.math_operation(Operator::Div).unwrap();
        let _ = calc.calculate();
        calc.clear_all();
        assert_eq!(calc.entry_text(), "0");
        assert!(calc.temp().is_empty());
        assert!(!calc.is_error_active());
    }

    #[test]
    fn test_press_dispatch() {
        let mut calc = Evaluator::default();
        for input in [
            Input::Digit('1'),
            Input::Digit('5'),
            Input::Operator(Operator::Mul),
            Input::Digit('3'),
            Input::Equals,
        ] {
            calc.press(input).unwrap();
        }
        assert_eq!(calc.entry_text(), "45");
        assert_eq!(calc.temp_text(), "15 * 3 =");

        calc.press(Input::Negate).unwrap();
        assert_eq!(calc.entry_text(), "-45");
        assert!(calc.temp().is_empty());
    }
}
