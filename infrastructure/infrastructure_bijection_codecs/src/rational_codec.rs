//! Rational Codec Module
//!
//! Bijection between the natural numbers and the non-negative rationals,
//! through continued fractions.
//!
//! Format:
//! - p/q is expanded with Euclid's algorithm into terms [a0; a1, ..., an].
//!   An expansion with an even number of terms has its last term an >= 2
//!   rewritten as (an - 1, 1), so every rational has exactly one expansion
//!   of odd length.
//! - Term i becomes a run of ai bits, ones for even i and zeros for odd i.
//!   Runs are written from the least significant bit up and packed
//!   little-endian into the bytes of the encoded number.
//! - The last run is always a non-empty run of ones, which is the top set
//!   bit of the number. Only a0 may be an empty run; 0 encodes 0/1.

use std::fmt;

use tracing::{debug, trace};

use entities_natural::{DomainError, Nat, Result};

use crate::bijection::Bijection;

/// A non-negative fraction p/q with q > 0, not necessarily reduced
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: Nat,
    denominator: Nat,
}

impl Fraction {
    /// Create a fraction
    ///
    /// Fails with `DomainError::ZeroDenominator` if `denominator` is zero.
    pub fn new(numerator: Nat, denominator: Nat) -> Result<Self> {
        if denominator.is_zero() {
            return Err(DomainError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn integer(value: Nat) -> Self {
        Self {
            numerator: value,
            denominator: Nat::ONE,
        }
    }

    pub fn numerator(&self) -> &Nat {
        &self.numerator
    }

    pub fn denominator(&self) -> &Nat {
        &self.denominator
    }

    /// The same value in lowest terms; zero reduces to 0/1
    pub fn reduced(&self) -> Self {
        let divisor = self.numerator.gcd(&self.denominator);
        Self {
            numerator: &self.numerator / &divisor,
            denominator: &self.denominator / &divisor,
        }
    }

    /// Continued fraction terms [a0; a1, ..., an] from Euclid's algorithm
    ///
    /// When n >= 1 the last term is at least 2.
    pub fn continued_fraction(&self) -> Vec<Nat> {
        let mut terms = Vec::new();
        let mut p = self.numerator.clone();
        let mut q = self.denominator.clone();
        while !q.is_zero() {
            let quotient = &p / &q;
            let remainder = &p % &q;
            terms.push(quotient);
            p = q;
            q = remainder;
        }
        terms
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Little-endian bit stream packed into bytes
#[derive(Debug, Default)]
struct BitWriter {
    bytes: Vec<u8>,
    current: u8,
    used: u32,
}

impl BitWriter {
    fn push_run(&mut self, bit: bool, count: u64) {
        for _ in 0..count {
            if bit {
                self.current |= 1 << self.used;
            }
            self.used += 1;
            if self.used == 8 {
                self.bytes.push(self.current);
                self.current = 0;
                self.used = 0;
            }
        }
    }

    fn finish(mut self) -> Nat {
        if self.used > 0 {
            self.bytes.push(self.current);
        }
        Nat::from_le_bytes(&self.bytes)
    }
}

/// Convergent recurrence for continued fraction terms
///
/// After terms a0..ai, `numerator / denominator` is the value of
/// [a0; a1, ..., ai].
#[derive(Debug)]
struct Convergents {
    previous_numerator: Nat,
    numerator: Nat,
    previous_denominator: Nat,
    denominator: Nat,
}

impl Convergents {
    fn new() -> Self {
        Self {
            previous_numerator: Nat::ZERO,
            numerator: Nat::ONE,
            previous_denominator: Nat::ONE,
            denominator: Nat::ZERO,
        }
    }

    fn push(&mut self, term: u64) {
        let term = Nat::from_u64(term);
        let numerator = self.numerator.times(&term).plus(&self.previous_numerator);
        let denominator = self.denominator.times(&term).plus(&self.previous_denominator);
        self.previous_numerator = std::mem::replace(&mut self.numerator, numerator);
        self.previous_denominator = std::mem::replace(&mut self.denominator, denominator);
    }

    fn finish(self) -> Fraction {
        Fraction {
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }
}

/// Rational codec
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalCodec;

impl RationalCodec {
    /// Encode a fraction
    ///
    /// Non-reduced fractions encode as their reduced form. Fails with
    /// `DomainError::RunTooLong` when a continued fraction term does not
    /// fit in 64 bits.
    pub fn encode(value: &Fraction) -> Result<Nat> {
        let mut terms = value.continued_fraction();
        if terms.len() % 2 == 0 {
            if let Some(last) = terms.pop() {
                terms.push(last.checked_decrement()?);
                terms.push(Nat::ONE);
            }
        }

        let mut writer = BitWriter::default();
        for (i, term) in terms.iter().enumerate() {
            let run = term.to_u64().ok_or_else(|| {
                debug!(term = %term, "continued fraction term too long to write");
                DomainError::RunTooLong(term.to_string())
            })?;
            writer.push_run(i % 2 == 0, run);
        }

        trace!(terms = terms.len(), fraction = %value, "encoded rational");
        Ok(writer.finish())
    }

    /// Encode p/q
    pub fn encode_parts(numerator: &Nat, denominator: &Nat) -> Result<Nat> {
        Self::encode(&Fraction::new(numerator.clone(), denominator.clone())?)
    }

    /// Decode a fraction, always in lowest terms
    pub fn decode(n: &Nat) -> Fraction {
        let bytes = n.to_le_bytes();
        let mut convergents = Convergents::new();
        let mut ones = true;
        let mut run = 0u64;

        for position in 0..n.significant_bits() {
            let byte = bytes.get((position / 8) as usize).copied().unwrap_or(0);
            let bit = (byte >> (position % 8)) & 1 == 1;
            if bit != ones {
                convergents.push(run);
                ones = bit;
                run = 0;
            }
            run += 1;
        }
        // The top run is ones; for zero it is the empty run a0 = 0
        convergents.push(run);

        convergents.finish()
    }
}

impl Bijection for RationalCodec {
    type Value = Fraction;

    fn encode(&self, value: &Fraction) -> Result<Nat> {
        RationalCodec::encode(value)
    }

    fn decode(&self, n: &Nat) -> Result<Fraction> {
        Ok(RationalCodec::decode(n))
    }
}
