//! Word Codec Module
//!
//! Bijective base-k numeration: a word over an alphabet of k >= 2 symbols
//! is read as a numeral with digits 1..=k, so every finite word, the empty
//! one included, has exactly one natural number.
//!
//! - `IndexWordCodec` works on symbol indices 0..k.
//! - `WordCodec<T>` works on words over an explicit alphabet.
//! - `ScalarStringCodec` works on `&str` over all Unicode scalar values.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroU64;

use entities_natural::{DomainError, Nat, Result};

use crate::bijection::Bijection;

/// Word codec over symbol indices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexWordCodec {
    base: NonZeroU64,
}

impl IndexWordCodec {
    /// Create a codec for an alphabet of `alphabet_size` symbols
    ///
    /// Fails with `DomainError::AlphabetTooSmall` below two symbols.
    pub fn new(alphabet_size: usize) -> Result<Self> {
        let base = u64::try_from(alphabet_size)
            .ok()
            .filter(|&size| size >= 2)
            .and_then(NonZeroU64::new)
            .ok_or(DomainError::AlphabetTooSmall(alphabet_size))?;
        Ok(Self { base })
    }

    pub fn alphabet_size(&self) -> u64 {
        self.base.get()
    }

    /// Encode a word of symbol indices
    ///
    /// Fails with `DomainError::SymbolNotInAlphabet` at the first index
    /// that is not below the alphabet size.
    pub fn encode(&self, indices: &[usize]) -> Result<Nat> {
        self.encode_digits(indices.iter().map(|&index| u64::try_from(index).unwrap_or(u64::MAX)))
    }

    /// Encode a word given as `u64` symbol indices
    pub fn encode_digits(&self, indices: impl IntoIterator<Item = u64>) -> Result<Nat> {
        let base = Nat::from_u64(self.base.get());
        let mut n = Nat::ZERO;
        for (position, index) in indices.into_iter().enumerate() {
            if index >= self.base.get() {
                return Err(DomainError::SymbolNotInAlphabet { position });
            }
            // Digit index + 1, in 1..=k
            n = n.times(&base).plus(&Nat::from_u64(index + 1));
        }
        Ok(n)
    }

    /// Decode to `u64` symbol indices, first symbol first
    pub fn decode_digits(&self, n: &Nat) -> Vec<u64> {
        let mut digits = Vec::new();
        let mut n = n.clone();
        while let Ok(predecessor) = n.checked_decrement() {
            // n = q * k + (index + 1) with index in 0..k
            let (quotient, index) = predecessor.div_rem_small(self.base);
            digits.push(index);
            n = quotient;
        }
        digits.reverse();
        digits
    }

    /// Decode to symbol indices
    pub fn decode(&self, n: &Nat) -> Vec<usize> {
        // Every digit is below an alphabet size that itself came from a usize
        self.decode_digits(n)
            .into_iter()
            .map(|digit| usize::try_from(digit).unwrap_or(usize::MAX))
            .collect()
    }
}

impl Bijection for IndexWordCodec {
    type Value = Vec<usize>;

    fn encode(&self, value: &Vec<usize>) -> Result<Nat> {
        IndexWordCodec::encode(self, value)
    }

    fn decode(&self, n: &Nat) -> Result<Vec<usize>> {
        Ok(IndexWordCodec::decode(self, n))
    }
}

/// Word codec over an explicit alphabet
///
/// The alphabet order fixes the digit values: the first symbol is digit 1.
#[derive(Clone, Debug)]
pub struct WordCodec<T> {
    symbols: Vec<T>,
    positions: HashMap<T, usize>,
    digits: IndexWordCodec,
}

impl<T: Clone + Eq + Hash> WordCodec<T> {
    /// Create a codec for `alphabet`
    ///
    /// Fails with `DomainError::AlphabetTooSmall` below two symbols and
    /// with `DomainError::DuplicateSymbol` if a symbol repeats.
    pub fn new(alphabet: impl IntoIterator<Item = T>) -> Result<Self> {
        let symbols: Vec<T> = alphabet.into_iter().collect();
        let digits = IndexWordCodec::new(symbols.len())?;

        let mut positions = HashMap::with_capacity(symbols.len());
        for (index, symbol) in symbols.iter().enumerate() {
            if positions.insert(symbol.clone(), index).is_some() {
                return Err(DomainError::DuplicateSymbol(index));
            }
        }

        Ok(Self {
            symbols,
            positions,
            digits,
        })
    }

    pub fn alphabet(&self) -> &[T] {
        &self.symbols
    }

    /// Encode a word
    ///
    /// Fails with `DomainError::SymbolNotInAlphabet` at the first symbol
    /// missing from the alphabet.
    pub fn encode(&self, word: &[T]) -> Result<Nat> {
        let indices = word
            .iter()
            .enumerate()
            .map(|(position, symbol)| {
                self.positions
                    .get(symbol)
                    .copied()
                    .ok_or(DomainError::SymbolNotInAlphabet { position })
            })
            .collect::<Result<Vec<usize>>>()?;
        self.digits.encode(&indices)
    }

    /// Decode a word
    pub fn decode(&self, n: &Nat) -> Vec<T> {
        self.digits
            .decode(n)
            .into_iter()
            .filter_map(|index| self.symbols.get(index).cloned())
            .collect()
    }
}

impl WordCodec<char> {
    /// Codec over the characters of `alphabet`, in order
    pub fn from_chars(alphabet: &str) -> Result<Self> {
        Self::new(alphabet.chars())
    }

    pub fn encode_str(&self, word: &str) -> Result<Nat> {
        self.encode(&word.chars().collect::<Vec<char>>())
    }

    pub fn decode_string(&self, n: &Nat) -> String {
        self.decode(n).into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> Bijection for WordCodec<T> {
    type Value = Vec<T>;

    fn encode(&self, value: &Vec<T>) -> Result<Nat> {
        WordCodec::encode(self, value)
    }

    fn decode(&self, n: &Nat) -> Result<Vec<T>> {
        Ok(WordCodec::decode(self, n))
    }
}

/// Number of Unicode scalar values: every code point except surrogates
pub const SCALAR_COUNT: u64 = 0x11_0000 - 0x800;

const SCALAR_BASE: NonZeroU64 = match NonZeroU64::new(SCALAR_COUNT) {
    Some(base) => base,
    None => panic!("there are Unicode scalar values"),
};

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_COUNT: u32 = 0x800;

fn scalar_index(c: char) -> u64 {
    let code = c as u32;
    let index = if code < SURROGATE_START {
        code
    } else {
        code - SURROGATE_COUNT
    };
    u64::from(index)
}

fn scalar_from_index(index: u64) -> Option<char> {
    let index = u32::try_from(index).ok()?;
    let code = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_COUNT
    };
    char::from_u32(code)
}

/// Word codec over the Unicode scalar values in code point order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarStringCodec {
    digits: IndexWordCodec,
}

impl Default for ScalarStringCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarStringCodec {
    pub const fn new() -> Self {
        Self {
            digits: IndexWordCodec { base: SCALAR_BASE },
        }
    }

    /// Encode a string
    pub fn encode(&self, text: &str) -> Nat {
        let base = Nat::from_u64(SCALAR_COUNT);
        text.chars().fold(Nat::ZERO, |n, c| {
            n.times(&base).plus(&Nat::from_u64(scalar_index(c) + 1))
        })
    }

    /// Encode a sequence of raw code points
    ///
    /// Fails with `DomainError::NotAScalarValue` for surrogates and values
    /// above U+10FFFF.
    pub fn encode_code_points(&self, code_points: &[u32]) -> Result<Nat> {
        let text = code_points
            .iter()
            .map(|&code| char::from_u32(code).ok_or(DomainError::NotAScalarValue(code)))
            .collect::<Result<String>>()?;
        Ok(self.encode(&text))
    }

    /// Decode a string
    pub fn decode(&self, n: &Nat) -> String {
        self.digits
            .decode_digits(n)
            .into_iter()
            .filter_map(scalar_from_index)
            .collect()
    }
}

impl Bijection for ScalarStringCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Result<Nat> {
        Ok(ScalarStringCodec::encode(self, value))
    }

    fn decode(&self, n: &Nat) -> Result<String> {
        Ok(ScalarStringCodec::decode(self, n))
    }
}
