//! Integer Codec Module
//!
//! Zigzag bijection between the natural numbers and the integers:
//! non-negative z maps to 2z and negative z to -2z - 1, so the naturals
//! enumerate 0, -1, 1, -2, 2, ...

use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::Integer;

use entities_natural::{Nat, Result};

use crate::bijection::Bijection;

/// Integer codec
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerCodec;

impl IntegerCodec {
    /// Encode a signed integer
    pub fn encode(value: &Integer) -> Nat {
        let doubled = Nat::from_natural(value.unsigned_abs()).shl(1);
        if *value >= Integer::from(0) {
            doubled
        } else {
            // -2z - 1 = 2|z| - 1, and |z| >= 1 here
            &doubled - &Nat::ONE
        }
    }

    /// Decode a signed integer
    pub fn decode(n: &Nat) -> Integer {
        let half = n.shr(1).to_integer();
        if n.is_even() {
            half
        } else {
            -half - Integer::from(1)
        }
    }
}

impl Bijection for IntegerCodec {
    type Value = Integer;

    fn encode(&self, value: &Integer) -> Result<Nat> {
        Ok(IntegerCodec::encode(value))
    }

    fn decode(&self, n: &Nat) -> Result<Integer> {
        Ok(IntegerCodec::decode(n))
    }
}
