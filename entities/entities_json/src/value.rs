//! JSON Value Types
//!
//! `JsonValue` is a plain sum type; nesting is bounded only by the value
//! being described. `JsonNumber` keeps the three textual parts of a JSON
//! number apart so that each can be enumerated independently.

use entities_natural::{DomainError, Integer, Result};

/// A JSON number as written: `mantissa[.fraction][e exponent]`
///
/// The fraction, when present, is a non-empty run of ASCII digits with no
/// trailing zero, so every value has exactly one spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsonNumber {
    mantissa: Integer,
    fraction: Option<String>,
    exponent: Option<Integer>,
}

impl JsonNumber {
    /// A plain integer with no fraction or exponent
    pub fn integer(mantissa: Integer) -> Self {
        Self {
            mantissa,
            fraction: None,
            exponent: None,
        }
    }

    /// Build a number from its parts, validating the fraction digits
    pub fn new(
        mantissa: Integer,
        fraction: Option<String>,
        exponent: Option<Integer>,
    ) -> Result<Self> {
        if let Some(digits) = &fraction {
            validate_fraction(digits)?;
        }
        Ok(Self {
            mantissa,
            fraction,
            exponent,
        })
    }

    pub fn mantissa(&self) -> &Integer {
        &self.mantissa
    }

    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    pub fn exponent(&self) -> Option<&Integer> {
        self.exponent.as_ref()
    }
}

/// Check that `digits` is a canonical fraction: ASCII digits, at least
/// one, and not ending in `0`
pub fn validate_fraction(digits: &str) -> Result<()> {
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.ends_with('0');
    if canonical {
        Ok(())
    } else {
        Err(DomainError::InvalidFraction(digits.to_string()))
    }
}

/// Recursive JSON-like value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(JsonNumber),
    String(String),
    Array(Vec<JsonValue>),
    /// Members in order; keys may repeat
    Object(Vec<(String, JsonValue)>),
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(JsonNumber::integer(Integer::from(value)))
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(value: JsonNumber) -> Self {
        JsonValue::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_validation() {
        assert!(validate_fraction("5").is_ok());
        assert!(validate_fraction("0001").is_ok());
        assert!(validate_fraction("25").is_ok());
        assert_eq!(
            validate_fraction(""),
            Err(DomainError::InvalidFraction(String::new()))
        );
        assert!(validate_fraction("50").is_err());
        assert!(validate_fraction("0").is_err());
        assert!(validate_fraction("1a").is_err());
        assert!(validate_fraction("-1").is_err());
    }

    #[test]
    fn test_number_construction() {
        let number = JsonNumber::new(Integer::from(-3), Some("14".to_string()), None).unwrap();
        assert_eq!(number.mantissa(), &Integer::from(-3));
        assert_eq!(number.fraction(), Some("14"));
        assert_eq!(number.exponent(), None);
        assert!(JsonNumber::new(Integer::from(1), Some("10".to_string()), None).is_err());
    }
}
