//! Entities Layer: Natural Numbers
//!
//! Provides the value type every bijection is built on:
//! - `Nat`: arbitrary precision non-negative integers
//! - `Naturals`: the lazy enumeration 0, 1, 2, ...
//! - `DomainError`: the error shared by all layers

pub mod error;
pub mod nat;
pub mod naturals;

pub use error::{DomainError, Result};
pub use nat::Nat;
pub use naturals::Naturals;

// Signed values produced by the integer bijection
pub use malachite::Integer;
