//! List Codec Module
//!
//! Bijection between the natural numbers and finite lists of naturals of
//! any length, with 0 reserved for the empty list.
//!
//! ## Format
//!
//! A non-empty list of length L is first combined into one value v by the
//! arity-L tuple codec. v is then spread over a `dilution`-tuple, the
//! length L - 1 is appended as one more coordinate, and the resulting
//! (dilution + 1)-tuple is combined again. The encoded value is that plus
//! one.
//!
//! The dilution is not recoverable from the encoded value: a number
//! produced with one dilution only decodes to the same list under the same
//! dilution.

use tracing::{debug, trace};

use entities_natural::{DomainError, Nat, Result};

use crate::bijection::Bijection;
use crate::config::BijectionConfig;
use crate::tuple_codec::TupleCodec;

/// List codec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListCodec {
    max_len: Option<usize>,
    spread: TupleCodec,
    spread_with_length: TupleCodec,
}

impl ListCodec {
    /// Create a list codec with the given dilution and no length limit
    ///
    /// Fails with `DomainError::DilutionTooSmall` for dilution 0.
    pub fn new(dilution: usize) -> Result<Self> {
        Self::from_config(&BijectionConfig::default().with_dilution(dilution))
    }

    pub fn from_config(config: &BijectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_len: config.max_list_len,
            spread: TupleCodec::new(config.dilution)?,
            spread_with_length: TupleCodec::new(config.dilution + 1)?,
        })
    }

    pub fn dilution(&self) -> usize {
        self.spread.arity()
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Encode a list
    ///
    /// With a length limit set, longer lists are rejected, since they could
    /// not be decoded again.
    pub fn encode(&self, items: &[Nat]) -> Result<Nat> {
        let length = items.len();
        if length == 0 {
            return Ok(Nat::ZERO);
        }
        self.check_length(length)?;

        let combined = TupleCodec::new(length)?.from_tuple(items)?;
        let mut spread = self.spread.to_tuple(&combined);
        spread.push(Nat::from_usize(length - 1));
        let n = self.spread_with_length.from_tuple(&spread)?;

        trace!(length, dilution = self.dilution(), bits = n.significant_bits(), "encoded list");
        Ok(n.increment())
    }

    /// Decode a list
    ///
    /// Total unless a length limit is set, in which case a decoded length
    /// above it fails with `DomainError::LengthLimitExceeded`. A length
    /// that does not fit in `usize` cannot be materialized and fails the
    /// same way.
    pub fn decode(&self, n: &Nat) -> Result<Vec<Nat>> {
        let Ok(n) = n.checked_decrement() else {
            return Ok(Vec::new());
        };

        let mut spread = self.spread_with_length.to_tuple(&n);
        let length = spread.pop().unwrap_or_default().increment();
        let length = match length.to_usize() {
            Some(length) => {
                self.check_length(length)?;
                length
            }
            None => {
                let limit = self.max_len.unwrap_or(usize::MAX);
                debug!(limit, "rejected decoded list length");
                return Err(DomainError::LengthLimitExceeded {
                    length: length.to_string(),
                    limit,
                });
            }
        };

        let combined = self.spread.from_tuple(&spread)?;
        trace!(length, dilution = self.dilution(), "decoded list");
        Ok(TupleCodec::new(length)?.to_tuple(&combined))
    }

    fn check_length(&self, length: usize) -> Result<()> {
        match self.max_len {
            Some(limit) if length > limit => {
                debug!(length, limit, "rejected list length");
                Err(DomainError::LengthLimitExceeded {
                    length: length.to_string(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Bijection for ListCodec {
    type Value = Vec<Nat>;

    fn encode(&self, value: &Vec<Nat>) -> Result<Nat> {
        ListCodec::encode(self, value)
    }

    fn decode(&self, n: &Nat) -> Result<Vec<Nat>> {
        ListCodec::decode(self, n)
    }
}
