//! JSON Codec Module
//!
//! Bijection between the natural numbers and JSON values.
//!
//! ## Layout
//!
//! | n          | value                                   |
//! |------------|-----------------------------------------|
//! | 0, 1, 2    | `null`, `false`, `true`                 |
//! | 3 + 2o     | object whose member list encodes to o   |
//! | 4 + 4a     | array whose item list encodes to a      |
//! | 6 + 8s     | string whose scalar word encodes to s   |
//! | 10 + 8r    | number whose parts encode to r          |
//!
//! An object member is the pair (key string, value). A number's residue
//! r mod 4 selects plain, fraction, exponent, or fraction and exponent, and
//! r div 4 holds the mantissa, the pair (mantissa, fraction), the pair
//! (mantissa, exponent) or the triple. Mantissa and exponent are zigzag
//! integers. Fraction index k is the decimal digits of k + 1 written
//! backwards, which covers every digit string not ending in `0`.
//!
//! Decoding recurses once per level of nesting in the decoded value.

use tracing::trace;

use entities_json::{JsonNumber, JsonValue};
use entities_natural::{Nat, Result};

use crate::bijection::Bijection;
use crate::config::BijectionConfig;
use crate::integer_codec::IntegerCodec;
use crate::list_codec::ListCodec;
use crate::pair_codec::PairCodec;
use crate::tuple_codec::TupleCodec;
use crate::word_codec::ScalarStringCodec;

const NULL: u64 = 0;
const FALSE: u64 = 1;
const TRUE: u64 = 2;
const FIRST_COMPOUND: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumberShape {
    Plain = 0,
    Fraction = 1,
    Exponent = 2,
    FractionExponent = 3,
}

impl NumberShape {
    fn of(number: &JsonNumber) -> Self {
        match (number.fraction().is_some(), number.exponent().is_some()) {
            (false, false) => NumberShape::Plain,
            (true, false) => NumberShape::Fraction,
            (false, true) => NumberShape::Exponent,
            (true, true) => NumberShape::FractionExponent,
        }
    }

    fn from_residue(residue: u64) -> Self {
        match residue & 3 {
            0 => NumberShape::Plain,
            1 => NumberShape::Fraction,
            2 => NumberShape::Exponent,
            _ => NumberShape::FractionExponent,
        }
    }
}

/// Fraction digits for index k: decimal(k + 1), reversed
pub fn fraction_digits(index: &Nat) -> String {
    index.increment().to_string().chars().rev().collect()
}

/// Index of a canonical fraction digit string
pub fn fraction_index(digits: &str) -> Result<Nat> {
    entities_json::validate_fraction(digits)?;
    let forward: String = digits.chars().rev().collect();
    forward.parse::<Nat>()?.checked_decrement()
}

/// JSON codec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonCodec {
    lists: ListCodec,
    strings: ScalarStringCodec,
    number_parts: TupleCodec,
}

impl JsonCodec {
    /// Create a codec whose arrays and objects use `lists`
    pub fn new(lists: ListCodec) -> Result<Self> {
        Ok(Self {
            lists,
            strings: ScalarStringCodec::new(),
            number_parts: TupleCodec::new(3)?,
        })
    }

    pub fn from_config(config: &BijectionConfig) -> Result<Self> {
        Self::new(ListCodec::from_config(config)?)
    }

    /// Encode a value
    ///
    /// Fails only when a list length guard is set and an array or object is
    /// longer than it.
    pub fn encode(&self, value: &JsonValue) -> Result<Nat> {
        let n = match value {
            JsonValue::Null => Nat::from_u64(NULL),
            JsonValue::Bool(false) => Nat::from_u64(FALSE),
            JsonValue::Bool(true) => Nat::from_u64(TRUE),
            JsonValue::Object(members) => {
                let members = members
                    .iter()
                    .map(|(key, value)| -> Result<Nat> {
                        Ok(PairCodec::encode(&self.strings.encode(key), &self.encode(value)?))
                    })
                    .collect::<Result<Vec<Nat>>>()?;
                Self::branch(&self.lists.encode(&members)?, 1, 0)
            }
            JsonValue::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| self.encode(item))
                    .collect::<Result<Vec<Nat>>>()?;
                Self::branch(&self.lists.encode(&items)?, 2, 0b01)
            }
            JsonValue::String(text) => Self::branch(&self.strings.encode(text), 3, 0b011),
            JsonValue::Number(number) => Self::branch(&self.encode_number(number)?, 3, 0b111),
        };
        Ok(n)
    }

    /// 3 + (payload << tag_bits | tag)
    fn branch(payload: &Nat, tag_bits: u64, tag: u64) -> Nat {
        payload
            .shl(tag_bits)
            .plus(&Nat::from_u64(tag + FIRST_COMPOUND))
    }

    fn encode_number(&self, number: &JsonNumber) -> Result<Nat> {
        let shape = NumberShape::of(number);
        let mantissa = IntegerCodec::encode(number.mantissa());
        let fraction = number.fraction().map(fraction_index).transpose()?;
        let exponent = number.exponent().map(IntegerCodec::encode);

        let parts = match (fraction, exponent) {
            (None, None) => mantissa,
            (Some(fraction), None) => PairCodec::encode(&mantissa, &fraction),
            (None, Some(exponent)) => PairCodec::encode(&mantissa, &exponent),
            (Some(fraction), Some(exponent)) => {
                self.number_parts.from_tuple(&[mantissa, fraction, exponent])?
            }
        };
        Ok(parts.shl(2).plus(&Nat::from_u64(shape as u64)))
    }

    /// Decode a value
    ///
    /// Total under the default configuration. Fails only when a list length
    /// guard is set and an array or object would be longer than it.
    pub fn decode(&self, n: &Nat) -> Result<JsonValue> {
        let Ok(m) = n.checked_minus(&Nat::from_u64(FIRST_COMPOUND)) else {
            return Ok(match n.to_u64() {
                Some(NULL) => JsonValue::Null,
                Some(FALSE) => JsonValue::Bool(false),
                _ => JsonValue::Bool(true),
            });
        };

        if m.is_even() {
            let members = self
                .lists
                .decode(&m.shr(1))?
                .iter()
                .map(|member| -> Result<(String, JsonValue)> {
                    let (key, value) = PairCodec::decode(member);
                    Ok((self.strings.decode(&key), self.decode(&value)?))
                })
                .collect::<Result<Vec<(String, JsonValue)>>>()?;
            trace!(members = members.len(), "decoded object");
            return Ok(JsonValue::Object(members));
        }

        let m = m.shr(1);
        if m.is_even() {
            let items = self
                .lists
                .decode(&m.shr(1))?
                .iter()
                .map(|item| self.decode(item))
                .collect::<Result<Vec<JsonValue>>>()?;
            trace!(items = items.len(), "decoded array");
            return Ok(JsonValue::Array(items));
        }

        let m = m.shr(1);
        if m.is_even() {
            return Ok(JsonValue::String(self.strings.decode(&m.shr(1))));
        }

        Ok(JsonValue::Number(self.decode_number(&m.shr(1))?))
    }

    fn decode_number(&self, r: &Nat) -> Result<JsonNumber> {
        let residue = r.bitand(&Nat::from_u64(3)).to_u64().unwrap_or(0);
        let parts = r.shr(2);

        let (mantissa, fraction, exponent) = match NumberShape::from_residue(residue) {
            NumberShape::Plain => (parts, None, None),
            NumberShape::Fraction => {
                let (mantissa, fraction) = PairCodec::decode(&parts);
                (mantissa, Some(fraction), None)
            }
            NumberShape::Exponent => {
                let (mantissa, exponent) = PairCodec::decode(&parts);
                (mantissa, None, Some(exponent))
            }
            NumberShape::FractionExponent => {
                let mut triple = self.number_parts.to_tuple(&parts).into_iter();
                let mantissa = triple.next().unwrap_or_default();
                let fraction = triple.next().unwrap_or_default();
                let exponent = triple.next().unwrap_or_default();
                (mantissa, Some(fraction), Some(exponent))
            }
        };

        JsonNumber::new(
            IntegerCodec::decode(&mantissa),
            fraction.as_ref().map(fraction_digits),
            exponent.as_ref().map(IntegerCodec::decode),
        )
    }

    /// Decode a value and render it as compact JSON text
    pub fn decode_text(&self, n: &Nat) -> Result<String> {
        Ok(self.decode(n)?.to_string())
    }
}

impl Bijection for JsonCodec {
    type Value = JsonValue;

    fn encode(&self, value: &JsonValue) -> Result<Nat> {
        JsonCodec::encode(self, value)
    }

    fn decode(&self, n: &Nat) -> Result<JsonValue> {
        JsonCodec::decode(self, n)
    }
}
