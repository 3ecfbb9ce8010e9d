//! Number rendering and entry parsing
//!
//! Results are shown with the shortest decimal digits that round-trip back
//! to the same f64. Whole numbers lose their fractional part (`4/2` shows
//! `2`, never `2.0`). Very large or very small magnitudes switch to
//! scientific notation with a signed two-digit exponent (`1e+16`, `1.5e-05`).

use crate::error::CalcError;

/// Decimal exponents rendered positionally; anything outside goes scientific.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Render `n` for display, dropping a trailing `.0`.
pub fn remove_zeros(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // covers -0.0 as well: zero is never shown signed
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-3.3333333333333335e-1"
    let sci = format!("{:e}", n);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !POSITIONAL_EXPONENTS.contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{}{}{}", sign, digits, zeros)
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Canonicalise a typed literal the way it is written into the temp line:
/// `"5."` becomes `"5"`, `"0.50"` becomes `"0.5"`.
pub fn normalize_literal(text: &str) -> Result<String, CalcError> {
    parse_entry(text).map(remove_zeros)
}

/// Parse an entry literal. Dangling points (`"5."`) are accepted.
pub fn parse_entry(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim_matches('.');
    trimmed.parse::<f64>().map_err(|source| CalcError::Parse {
        text: text.to_string(),
        source,
    })
}
