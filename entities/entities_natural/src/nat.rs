//! Natural Number Operations
//!
//! Provides arbitrary precision non-negative integer operations.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. `Nat` wraps a `malachite::Natural`, so a negative value can
//! never be represented: construction from a signed value is checked, and
//! subtraction is offered both as a checked operation and as the `-`
//! operator with the same panic-on-underflow contract as `u64`.

use std::fmt;
use std::num::NonZeroU64;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr, Sub};
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{IsPowerOf2, Parity};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};

use crate::error::{DomainError, Result};
use crate::naturals::Naturals;

/// Natural number representation using malachite's Natural
///
/// Immutable from the caller's point of view: every operation returns a
/// new value. Ordering is by magnitude.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nat {
    value: Natural,
}

impl Nat {
    pub const ZERO: Nat = Nat {
        value: Natural::ZERO,
    };

    pub const ONE: Nat = Nat {
        value: Natural::ONE,
    };

    /// Create a natural number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Natural::from(value),
        }
    }

    /// Create a natural number from usize
    pub fn from_usize(value: usize) -> Self {
        Self::from_u64(value as u64)
    }

    /// Create a natural number from i64
    ///
    /// Fails with `DomainError::Negative` for values below zero.
    pub fn try_from_i64(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(DomainError::Negative(value.to_string()));
        }
        Ok(Self::from_u64(value.unsigned_abs()))
    }

    /// Create a natural number from a signed big integer
    ///
    /// Fails with `DomainError::Negative` for values below zero.
    pub fn try_from_integer(value: &Integer) -> Result<Self> {
        Natural::try_from(value.clone())
            .map(Self::from_natural)
            .map_err(|_| DomainError::Negative(value.to_string()))
    }

    /// Create from Natural (for advanced use)
    pub fn from_natural(value: Natural) -> Self {
        Self { value }
    }

    /// Get the internal Natural value (for advanced use)
    pub fn as_natural(&self) -> &Natural {
        &self.value
    }

    pub fn into_natural(self) -> Natural {
        self.value
    }

    /// Convert to a signed big integer
    pub fn to_integer(&self) -> Integer {
        Integer::from(&self.value)
    }

    /// Convert to u64
    ///
    /// Returns None if the value is too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to usize
    ///
    /// Returns None if the value is too large
    pub fn to_usize(&self) -> Option<usize> {
        self.to_u64().and_then(|value| usize::try_from(value).ok())
    }

    pub fn is_zero(&self) -> bool {
        self.value == Natural::ZERO
    }

    pub fn is_even(&self) -> bool {
        (&self.value).even()
    }

    /// Add two natural numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two natural numbers: x - y
    ///
    /// Fails with `DomainError::Underflow` if y > x
    pub fn checked_minus(&self, other: &Self) -> Result<Self> {
        if self.value < other.value {
            return Err(DomainError::Underflow {
                minuend: self.to_string(),
                subtrahend: other.to_string(),
            });
        }
        Ok(Self {
            value: &self.value - &other.value,
        })
    }

    /// Multiply two natural numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Truncating division with remainder: (x / y, x % y)
    ///
    /// Fails with `DomainError::DivisionByZero` if y is zero
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok((
            Self {
                value: &self.value / &divisor.value,
            },
            Self {
                value: &self.value % &divisor.value,
            },
        ))
    }

    /// Division with remainder by a non-zero machine word
    pub fn div_rem_small(&self, divisor: NonZeroU64) -> (Self, u64) {
        let divisor = Natural::from(divisor.get());
        let remainder = &self.value % &divisor;
        // Remainder is always < divisor, so it fits in u64
        let remainder = u64::try_from(&remainder).unwrap_or(0);
        (
            Self {
                value: &self.value / &divisor,
            },
            remainder,
        )
    }

    /// x + 1
    pub fn increment(&self) -> Self {
        Self {
            value: &self.value + Natural::ONE,
        }
    }

    /// x - 1, failing at zero
    pub fn checked_decrement(&self) -> Result<Self> {
        self.checked_minus(&Self::ONE)
    }

    /// Left shift: x << bits
    pub fn shl(&self, bits: u64) -> Self {
        Self {
            value: &self.value << bits,
        }
    }

    /// Right shift: x >> bits
    pub fn shr(&self, bits: u64) -> Self {
        Self {
            value: &self.value >> bits,
        }
    }

    /// Bitwise AND: x & y
    pub fn bitand(&self, other: &Self) -> Self {
        Self {
            value: &self.value & &other.value,
        }
    }

    /// Bitwise OR: x | y
    pub fn bitor(&self, other: &Self) -> Self {
        Self {
            value: &self.value | &other.value,
        }
    }

    /// Bitwise XOR: x ^ y
    pub fn bitxor(&self, other: &Self) -> Self {
        Self {
            value: &self.value ^ &other.value,
        }
    }

    /// Bitwise NOT restricted to the low `width` bits
    ///
    /// A natural number has infinitely many leading zeros, so an
    /// unrestricted complement would be negative. Bits at or above `width`
    /// are discarded.
    pub fn not_within(&self, width: u64) -> Self {
        let mask = (Natural::ONE << width) - Natural::ONE;
        Self {
            value: (&self.value & &mask) ^ mask,
        }
    }

    /// Number of bits needed to write the value; zero for zero
    pub fn significant_bits(&self) -> u64 {
        (&self.value).significant_bits()
    }

    /// Floor of the base-2 logarithm
    pub fn log2(&self) -> Result<u64> {
        if self.is_zero() {
            return Err(DomainError::LogarithmOfZero);
        }
        Ok(self.significant_bits() - 1)
    }

    pub fn is_power_of_two(&self) -> bool {
        self.value.is_power_of_2()
    }

    /// Integer square root: the largest r with r * r <= x
    ///
    /// Brackets the root with the smallest power of four above x, then
    /// settles one binary digit of the root per step. Exact for any size.
    pub fn isqrt(&self) -> Self {
        if self.value <= Natural::ONE {
            return self.clone();
        }

        let mut remainder = self.value.clone();
        let mut root = Natural::ZERO;
        let mut bit = Natural::ONE;

        while bit <= remainder {
            bit <<= 2u64;
        }

        while bit > Natural::ONE {
            bit >>= 2u64;
            let trial = &root + &bit;
            root >>= 1u64;
            if remainder >= trial {
                remainder -= &trial;
                root += &bit;
            }
        }

        Self { value: root }
    }

    /// Greatest common divisor, with gcd(0, 0) = 0
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.value.clone();
        let mut b = other.value.clone();
        while b != Natural::ZERO {
            let r = &a % &b;
            a = b;
            b = r;
        }
        Self { value: a }
    }

    /// Minimal little-endian byte representation
    ///
    /// Zero is the empty sequence; otherwise the last byte is non-zero.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .value
            .to_limbs_asc()
            .iter()
            .flat_map(|limb| limb.to_le_bytes())
            .collect();
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }

    /// Rebuild a natural number from little-endian bytes
    ///
    /// Trailing zero bytes are insignificant.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let limbs: Vec<u64> = bytes
            .chunks(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .collect();
        Self {
            value: Natural::from_owned_limbs_asc(limbs),
        }
    }

    /// Lazy enumeration 0, 1, 2, ...
    pub fn all() -> Naturals {
        Naturals::new()
    }
}

impl Default for Nat {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for Nat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Natural::from_str(s)
            .map(Self::from_natural)
            .map_err(|_| DomainError::NotANumber(s.to_string()))
    }
}

impl From<u64> for Nat {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for Nat {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<usize> for Nat {
    fn from(value: usize) -> Self {
        Self::from_usize(value)
    }
}

impl From<Natural> for Nat {
    fn from(value: Natural) -> Self {
        Self::from_natural(value)
    }
}

impl TryFrom<i64> for Nat {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from_i64(value)
    }
}

impl TryFrom<&Integer> for Nat {
    type Error = DomainError;

    fn try_from(value: &Integer) -> Result<Self> {
        Self::try_from_integer(value)
    }
}

impl From<Nat> for Integer {
    fn from(value: Nat) -> Self {
        Integer::from(value.value)
    }
}

macro_rules! impl_ref_operator {
    ($trait:ident, $method:ident) => {
        impl<'a, 'b> $trait<&'b Nat> for &'a Nat {
            type Output = Nat;

            fn $method(self, rhs: &'b Nat) -> Nat {
                Nat {
                    value: (&self.value).$method(&rhs.value),
                }
            }
        }
    };
}

macro_rules! impl_owned_operator {
    ($trait:ident, $method:ident) => {
        impl_ref_operator!($trait, $method);

        impl<'b> $trait<&'b Nat> for Nat {
            type Output = Nat;

            fn $method(self, rhs: &'b Nat) -> Nat {
                Nat {
                    value: self.value.$method(&rhs.value),
                }
            }
        }

        impl $trait<Nat> for Nat {
            type Output = Nat;

            fn $method(self, rhs: Nat) -> Nat {
                Nat {
                    value: self.value.$method(rhs.value),
                }
            }
        }
    };
}

impl_owned_operator!(Add, add);
impl_owned_operator!(Mul, mul);
// These panic like their u64 counterparts: on underflow and on a zero divisor.
impl_owned_operator!(Sub, sub);
impl_owned_operator!(Div, div);
impl_owned_operator!(Rem, rem);
// Borrowed only, so `x.bitand(&y)` keeps resolving to the inherent method.
impl_ref_operator!(BitAnd, bitand);
impl_ref_operator!(BitOr, bitor);
impl_ref_operator!(BitXor, bitxor);

impl Shl<u64> for &Nat {
    type Output = Nat;

    fn shl(self, bits: u64) -> Nat {
        Nat {
            value: &self.value << bits,
        }
    }
}

impl Shr<u64> for &Nat {
    type Output = Nat;

    fn shr(self, bits: u64) -> Nat {
        Nat {
            value: &self.value >> bits,
        }
    }
}
