//! Infrastructure Layer: Bijection Codecs
//!
//! Provides exact, total bijections between the natural numbers and richer
//! value domains. Every domain value has exactly one natural number and
//! every natural number decodes to exactly one domain value, so counting
//! 0, 1, 2, ... through a decoder lists the whole domain without repeats.
//!
//! ## Overview
//!
//! The `infrastructure_bijection_codecs` crate is the infrastructure layer
//! on top of the [`entities_natural`] arithmetic and the [`entities_json`]
//! value model. All codecs are pure and hold no mutable state; a codec value
//! can be shared freely between threads.
//!
//! ## Codecs
//!
//! - **[`integer_codec`]**: zigzag integers, 0, -1, 1, -2, 2, ...
//! - **[`pair_codec`]**: Cantor pairing of two naturals
//! - **[`tuple_codec`]**: fixed-arity tuples via the combinatorial number
//!   system
//! - **[`list_codec`]**: variable-length lists, length carried alongside a
//!   diluted spread of the combined value
//! - **[`set_codec`]**: finite sets via the gap transform
//! - **[`word_codec`]**: words over finite alphabets in bijective base k,
//!   including strings of Unicode scalar values
//! - **[`rational_codec`]**: non-negative rationals via continued fractions
//! - **[`json_codec`]**: JSON values, recursively composed from the above
//!
//! Each codec implements [`Bijection`], whose `enumerate` lists the domain
//! in bijection order.
//!
//! ## Configuration
//!
//! [`BijectionConfig`] carries the list dilution and an optional list
//! length guard. Both sides of an encoding must use the same configuration.
//! With the guard unset, which is the default, every codec is total.

pub mod bijection;
pub mod config;
pub mod integer_codec;
pub mod json_codec;
pub mod list_codec;
pub mod pair_codec;
pub mod rational_codec;
pub mod set_codec;
pub mod tuple_codec;
pub mod word_codec;

pub use bijection::{Bijection, Enumeration};
pub use config::{BijectionConfig, DEFAULT_DILUTION};
pub use integer_codec::IntegerCodec;
pub use json_codec::JsonCodec;
pub use list_codec::ListCodec;
pub use pair_codec::PairCodec;
pub use rational_codec::{Fraction, RationalCodec};
pub use set_codec::SetCodec;
pub use tuple_codec::TupleCodec;
pub use word_codec::{IndexWordCodec, ScalarStringCodec, WordCodec, SCALAR_COUNT};

// Re-export the value types the codecs speak
pub use entities_json::{JsonNumber, JsonValue};
pub use entities_natural::{DomainError, Integer, Nat, Naturals, Result};
