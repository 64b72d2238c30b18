//! Set Codec Module
//!
//! Bijection between the natural numbers and finite sets of naturals.
//! A set is sorted ascending and gap transformed, first gap = smallest
//! element and every later gap = element - previous - 1, which turns it
//! into an arbitrary list of the same length for `ListCodec`.

use std::collections::BTreeSet;

use entities_natural::{Nat, Result};

use crate::bijection::Bijection;
use crate::config::BijectionConfig;
use crate::list_codec::ListCodec;

/// Gaps of a set, taken in ascending order
pub fn to_gaps(set: &BTreeSet<Nat>) -> Vec<Nat> {
    let mut previous: Option<&Nat> = None;
    set.iter()
        .map(|element| {
            let gap = match previous {
                None => element.clone(),
                Some(previous) => &(element - previous) - &Nat::ONE,
            };
            previous = Some(element);
            gap
        })
        .collect()
}

/// Inverse of `to_gaps`: running sums with one added between elements
pub fn from_gaps(gaps: &[Nat]) -> BTreeSet<Nat> {
    let mut set = BTreeSet::new();
    let mut next = Nat::ZERO;
    for gap in gaps {
        let element = next.plus(gap);
        next = element.increment();
        set.insert(element);
    }
    set
}

/// Set codec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetCodec {
    list: ListCodec,
}

impl SetCodec {
    pub fn new(list: ListCodec) -> Self {
        Self { list }
    }

    pub fn from_config(config: &BijectionConfig) -> Result<Self> {
        Ok(Self::new(ListCodec::from_config(config)?))
    }

    /// Encode a set
    pub fn encode(&self, set: &BTreeSet<Nat>) -> Result<Nat> {
        self.list.encode(&to_gaps(set))
    }

    /// Encode the set of the given elements
    ///
    /// Order and repetition in `elements` do not affect the result.
    pub fn encode_unordered(&self, elements: &[Nat]) -> Result<Nat> {
        let set: BTreeSet<Nat> = elements.iter().cloned().collect();
        self.encode(&set)
    }

    /// Decode a set
    ///
    /// Total unless a list length guard is set and the decoded size is above
    /// it.
    pub fn decode(&self, n: &Nat) -> Result<BTreeSet<Nat>> {
        Ok(from_gaps(&self.list.decode(n)?))
    }
}

impl Bijection for SetCodec {
    type Value = BTreeSet<Nat>;

    fn encode(&self, value: &BTreeSet<Nat>) -> Result<Nat> {
        SetCodec::encode(self, value)
    }

    fn decode(&self, n: &Nat) -> Result<BTreeSet<Nat>> {
        SetCodec::decode(self, n)
    }
}
