//! Tuple Codec Module
//!
//! Bijection between the natural numbers and k-tuples of naturals for any
//! fixed arity k >= 1, using the combinatorial number system.
//!
//! ## Format
//!
//! A tuple (x1, ..., xk) becomes the strictly increasing sequence
//! m_i = x1 + ... + x_i + (i - 1), and the encoded value is
//! C(m_1, 1) + C(m_2, 2) + ... + C(m_k, k).
//!
//! Decoding recovers each m_i from the top down as the largest m with
//! C(m, i) not above what is left. There is no closed form for that at
//! arbitrary precision, so it is found by doubling an upper bound and then
//! bisecting the bracket. Both loops are iterative: their depth grows with
//! the bit length of the input, never the stack.
//!
//! Arity 1 is the identity and arity 2 is `PairCodec`.

use std::iter;
use std::num::NonZeroUsize;

use tracing::trace;

use entities_natural::{DomainError, Nat, Result};

use crate::bijection::Bijection;
use crate::pair_codec::PairCodec;

/// Binomial coefficient C(n, k), zero when k > n
pub fn binomial(n: &Nat, k: usize) -> Nat {
    let k_nat = Nat::from_usize(k);
    if *n < k_nat {
        return Nat::ZERO;
    }

    // C(n, k) = C(n, n - k); take the shorter product
    let k = match (n - &k_nat).to_usize() {
        Some(complement) if complement < k => complement,
        _ => k,
    };

    let mut result = Nat::ONE;
    for i in 0..k {
        let i = Nat::from_usize(i);
        // Each partial product is C(n, i + 1), so the division is exact
        result = result.times(&(n - &i)) / i.increment();
    }
    result
}

/// The largest m with C(m, k) <= n
pub fn binomial_floor(k: NonZeroUsize, n: &Nat) -> Nat {
    let k = k.get();

    // C(k - 1, k) = 0 <= n always holds; the step doubles away from k - 1
    let mut low = Nat::from_usize(k - 1);
    let mut step = Nat::ONE;
    let mut high = low.plus(&step);

    while binomial(&high, k) <= *n {
        low = high;
        step = step.shl(1);
        high = low.plus(&step);
    }

    trace!(k, bracket_bits = high.significant_bits(), "binomial search bracket");

    // Invariant: C(low, k) <= n < C(high, k)
    while &high - &low > Nat::ONE {
        let mid = low.plus(&high).shr(1);
        if binomial(&mid, k) <= *n {
            low = mid;
        } else {
            high = mid;
        }
    }

    low
}

/// The combinatorial digits m_k > ... > m_1 of n, highest first
fn binomial_digits(n: &Nat, arity: usize) -> Vec<Nat> {
    let mut remaining = n.clone();
    let mut digits = Vec::with_capacity(arity);

    let ranks = iter::successors(NonZeroUsize::new(arity), |k| NonZeroUsize::new(k.get() - 1));
    for k in ranks {
        let m = binomial_floor(k, &remaining);
        remaining = &remaining - &binomial(&m, k.get());
        digits.push(m);
    }

    digits
}

/// Tuple codec for a fixed arity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TupleCodec {
    arity: usize,
}

impl TupleCodec {
    /// Create a codec for tuples of `arity` elements
    ///
    /// Fails with `DomainError::ArityTooSmall` for arity 0.
    pub fn new(arity: usize) -> Result<Self> {
        if arity < 1 {
            return Err(DomainError::ArityTooSmall {
                minimum: 1,
                actual: arity,
            });
        }
        Ok(Self { arity })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Combine a tuple into one natural number
    ///
    /// Fails with `DomainError::ArityMismatch` unless `tuple` has exactly
    /// `arity` elements.
    pub fn from_tuple(&self, tuple: &[Nat]) -> Result<Nat> {
        if tuple.len() != self.arity {
            return Err(DomainError::ArityMismatch {
                expected: self.arity,
                actual: tuple.len(),
            });
        }

        match tuple {
            [x] => Ok(x.clone()),
            [x, y] => Ok(PairCodec::encode(x, y)),
            [first, rest @ ..] => {
                let mut partial = first.clone();
                let mut sum = first.clone();
                for (i, x) in rest.iter().enumerate() {
                    partial = partial.plus(x).increment();
                    sum = sum.plus(&binomial(&partial, i + 2));
                }
                Ok(sum)
            }
            [] => unreachable!("arity is at least 1"),
        }
    }

    /// Split a natural number into a tuple of `arity` elements
    pub fn to_tuple(&self, n: &Nat) -> Vec<Nat> {
        match self.arity {
            1 => vec![n.clone()],
            2 => {
                let (x, y) = PairCodec::decode(n);
                vec![x, y]
            }
            arity => {
                let mut ascending = binomial_digits(n, arity).into_iter().rev();
                let mut tuple = Vec::with_capacity(arity);
                if let Some(first) = ascending.next() {
                    let mut previous = first.clone();
                    tuple.push(first);
                    for m in ascending {
                        tuple.push(&(&m - &previous) - &Nat::ONE);
                        previous = m;
                    }
                }
                tuple
            }
        }
    }
}

impl Bijection for TupleCodec {
    type Value = Vec<Nat>;

    fn encode(&self, value: &Vec<Nat>) -> Result<Nat> {
        self.from_tuple(value)
    }

    fn decode(&self, n: &Nat) -> Result<Vec<Nat>> {
        Ok(self.to_tuple(n))
    }
}
