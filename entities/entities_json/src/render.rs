//! JSON Text Rendering
//!
//! Compact canonical form: no whitespace, `,` between items and `:`
//! between key and value. Strings escape the quote, the backslash and
//! every control character below U+0020; the five with short forms use
//! them, the rest use `\u00XX`. A `char` is never a surrogate, so no
//! surrogate escape is ever emitted.

use std::fmt::{self, Write};

use crate::value::{JsonNumber, JsonValue};

/// Write `text` as a quoted JSON string
pub fn write_escaped<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{08}' => out.write_str("\\b")?,
            '\u{0C}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04X}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mantissa())?;
        if let Some(digits) = self.fraction() {
            write!(f, ".{digits}")?;
        }
        if let Some(exponent) = self.exponent() {
            write!(f, "e{exponent}")?;
        }
        Ok(())
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(true) => f.write_str("true"),
            JsonValue::Bool(false) => f.write_str("false"),
            JsonValue::Number(number) => write!(f, "{number}"),
            JsonValue::String(text) => write_escaped(f, text),
            JsonValue::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            JsonValue::Object(members) => {
                f.write_char('{')?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}
