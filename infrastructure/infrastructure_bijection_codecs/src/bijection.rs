//! Bijection Trait
//!
//! The seam every codec implements: a total `decode` from the natural
//! numbers onto a value domain and its inverse `encode`. Enumerating the
//! naturals through `decode` lists the whole domain, each value once.

use entities_natural::{Nat, Naturals, Result};

/// An exact, invertible map between the natural numbers and `Value`
pub trait Bijection {
    type Value;

    /// Map a domain value to its natural number
    ///
    /// Fails only for values outside the domain.
    fn encode(&self, value: &Self::Value) -> Result<Nat>;

    /// Map a natural number to its domain value
    ///
    /// Fails only when the decoded value would exceed a configured
    /// resource limit.
    fn decode(&self, n: &Nat) -> Result<Self::Value>;

    /// The domain in bijection order: decode(0), decode(1), ...
    fn enumerate(&self) -> Enumeration<'_, Self>
    where
        Self: Sized,
    {
        Enumeration {
            codec: self,
            naturals: Naturals::new(),
        }
    }
}

/// Lazy, infinite enumeration of a codec's domain
pub struct Enumeration<'a, B> {
    codec: &'a B,
    naturals: Naturals,
}

impl<B: Bijection> Iterator for Enumeration<'_, B> {
    type Item = Result<B::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        self.naturals.next().map(|n| self.codec.decode(&n))
    }
}
