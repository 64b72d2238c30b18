//! Pair Codec Module
//!
//! Cantor pairing. Pairs are walked diagonal by diagonal: every pair with
//! x + y = d comes before any pair with x + y = d + 1, and within a
//! diagonal y runs from 0 to d.

use entities_natural::{Nat, Result};

use crate::bijection::Bijection;

/// Pair codec
#[derive(Clone, Copy, Debug, Default)]
pub struct PairCodec;

/// Triangular number w(w + 1) / 2
pub fn triangular(w: &Nat) -> Nat {
    w.times(&w.increment()).shr(1)
}

impl PairCodec {
    /// Encode a pair: T(x + y) + y
    pub fn encode(x: &Nat, y: &Nat) -> Nat {
        triangular(&x.plus(y)).plus(y)
    }

    /// Decode a pair
    ///
    /// The diagonal is w = floor((isqrt(8n + 1) - 1) / 2). The integer
    /// square root is exact, so T(w) <= n < T(w + 1) always holds; the
    /// bracket is still checked in every build, and a failure panics.
    pub fn decode(n: &Nat) -> (Nat, Nat) {
        let root = n.shl(3).increment().isqrt();
        let w = (&root - &Nat::ONE).shr(1);
        let base = triangular(&w);
        assert!(
            base <= *n && *n < triangular(&w.increment()),
            "{n} is not on diagonal {w}"
        );
        let y = n - &base;
        let x = &w - &y;
        (x, y)
    }
}

impl Bijection for PairCodec {
    type Value = (Nat, Nat);

    fn encode(&self, value: &(Nat, Nat)) -> Result<Nat> {
        Ok(PairCodec::encode(&value.0, &value.1))
    }

    fn decode(&self, n: &Nat) -> Result<(Nat, Nat)> {
        Ok(PairCodec::decode(n))
    }
}
