//! Parsing of comma-separated byte tables.
//!
//! Values are separated by commas or line breaks. Surrounding whitespace is ignored and
//! empty fields (trailing commas, blank lines) are skipped. Tokens that are not integers
//! in `0..=255` are reported and left out of the result.

use crate::error::CrleError;
use log::warn;
use std::num::IntErrorKind;

const NOT_INTEGER: &str = "not integer";
const OUT_OF_RANGE: &str = "integer is out of range";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedValues {
    pub values: Vec<u8>,
    /// Tokens that were skipped, in input order.
    pub rejected: Vec<String>,
}

/// Parse a single field. Accepts decimal (`42`) and `0x`-prefixed hexadecimal (`0x2A`).
pub fn parse_value(token: &str) -> Result<u8, CrleError> {
    let token = token.trim();
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(digits) => i64::from_str_radix(digits, 16),
        None => token.parse::<i64>(),
    };

    let reason = match parsed {
        Ok(value) => match u8::try_from(value) {
            Ok(byte) => return Ok(byte),
            Err(_) => OUT_OF_RANGE,
        },
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OUT_OF_RANGE,
            _ => NOT_INTEGER,
        },
    };

    Err(CrleError::InvalidValue { token: token.to_string(), reason })
}

pub fn parse_values(text: &str) -> ParsedValues {
    let mut parsed = ParsedValues::default();

    for token in text.split(|c: char| c == ',' || c == '\n').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        match parse_value(token) {
            Ok(byte) => parsed.values.push(byte),
            Err(e) => {
                warn!("{}", e);
                parsed.rejected.push(token.to_string());
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_forms() {
        assert_eq!(parse_value("0").unwrap(), 0);
        assert_eq!(parse_value(" 255 ").unwrap(), 255);
        assert_eq!(parse_value("0xFE").unwrap(), 0xFE);
        assert_eq!(parse_value("0x0a").unwrap(), 10);
    }

    #[test]
    fn test_parse_value_errors() {
        match parse_value("abc") {
            Err(CrleError::InvalidValue { token, reason }) => {
                assert_eq!(token, "abc");
                assert_eq!(reason, NOT_INTEGER);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match parse_value("256") {
            Err(CrleError::InvalidValue { reason, .. }) => assert_eq!(reason, OUT_OF_RANGE),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_value("-1").is_err());
        assert!(parse_value("99999999999999999999999").is_err());
        assert!(parse_value("0x100").is_err());
    }

    #[test]
    fn test_parse_values_multiline() {
        let parsed = parse_values("1, 2,3\r\n4,5,\n\n6 , 7\n");
        assert_eq!(parsed.values, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_values_skips_bad_tokens() {
        let parsed = parse_values("10,x,300,20");
        assert_eq!(parsed.values, vec![10, 20]);
        assert_eq!(parsed.rejected, vec!["x".to_string(), "300".to_string()]);
    }

    #[test]
    fn test_parse_values_empty() {
        assert_eq!(parse_values("").values, Vec::<u8>::new());
        assert_eq!(parse_values(" \n ").values, Vec::<u8>::new());
    }
}
