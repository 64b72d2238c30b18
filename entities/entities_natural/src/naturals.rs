//! Natural Number Enumeration
//!
//! `Naturals` yields 0, 1, 2, ... without end. It holds nothing but the next
//! value, so a fresh iterator always restarts from zero and dropping it is
//! the only way to stop.

use crate::nat::Nat;

/// Lazy, infinite, increasing enumeration of the natural numbers
#[derive(Clone, Debug, Default)]
pub struct Naturals {
    next: Nat,
}

impl Naturals {
    pub fn new() -> Self {
        Self { next: Nat::ZERO }
    }
}

impl Iterator for Naturals {
    type Item = Nat;

    fn next(&mut self) -> Option<Nat> {
        let following = self.next.increment();
        Some(std::mem::replace(&mut self.next, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Naturals {}
