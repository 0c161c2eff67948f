//! Amount parsing and formatting
//!
//! Amounts are plain `f64` values so the data file holds ordinary JSON numbers
//! (`12.5`, `-3`). User text is parsed strictly: anything that is not a finite
//! decimal number is rejected instead of being stored as NaN.

use std::fmt;

/// Parse an amount from user input
///
/// Accepts formats: "10.50", "-10.50", "+10.50", "$10.50", "-$10.50", "10", "1e3"
///
/// Surrounding whitespace is ignored. The sign and `$` must be followed
/// directly by the number.
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (negative, rest) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    // Remove currency symbol if present
    let rest = rest.strip_prefix('$').unwrap_or(rest);

    // f64::from_str would happily take "inf" and "NaN"
    if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let value: f64 = rest
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::NotFinite(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount cannot be empty"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            Self::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_amount("10.50").unwrap(), 10.5);
        assert_eq!(parse_amount("$10.50").unwrap(), 10.5);
        assert_eq!(parse_amount("-10.50").unwrap(), -10.5);
        assert_eq!(parse_amount("-$3").unwrap(), -3.0);
        assert_eq!(parse_amount("  12 ").unwrap(), 12.0);
        assert_eq!(parse_amount(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(parse_amount("+5").unwrap(), 5.0);
        assert_eq!(parse_amount("+$5").unwrap(), 5.0);
        assert_eq!(parse_amount("-5").unwrap(), -5.0);

        // The sign and symbol must touch the number
        assert!(parse_amount("- 5").is_err());
        assert!(parse_amount("-$ 5").is_err());
        assert!(parse_amount("+ 5").is_err());
        assert!(parse_amount("$ 5").is_err());
        assert!(parse_amount("--5").is_err());
        assert!(parse_amount("+-5").is_err());
        assert!(parse_amount("-").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_amount(""), Err(AmountParseError::Empty));
        assert!(matches!(
            parse_amount("twelve"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_amount("12abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("-infinity").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            parse_amount("1e400"),
            Err(AmountParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_amount(10.5, "$"), "$10.50");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(-3.0, "€"), "-€3.00");
    }
}
