//! Entities Layer: JSON Values
//!
//! Provides the recursive JSON-like value the JSON bijection maps to and
//! from, and its canonical compact text form.
//!
//! - `JsonValue`: null, booleans, numbers, strings, arrays, objects
//! - `JsonNumber`: signed mantissa with optional fraction digits and
//!   optional signed exponent
//!
//! Objects are ordered lists of members; a key may repeat.

pub mod render;
pub mod value;

pub use render::write_escaped;
pub use value::{validate_fraction, JsonNumber, JsonValue};
