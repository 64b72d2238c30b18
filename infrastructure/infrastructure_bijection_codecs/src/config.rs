//! Codec Configuration
//!
//! Parameters both sides of a bijection must agree on. None of them can be
//! recovered from an encoded number, so a value encoded under one
//! configuration only decodes correctly under the same one.

use entities_natural::{DomainError, Result};

/// Dilution used when none is given
pub const DEFAULT_DILUTION: usize = 10;

/// Shared configuration for list-shaped codecs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BijectionConfig {
    /// Arity of the intermediate tuple a list's combined value is spread
    /// over before its length is appended
    pub dilution: usize,
    /// Optional guard on list lengths. When set, longer lists fail with
    /// `LengthLimitExceeded` on both encode and decode, and the codecs are
    /// no longer total. Unset by default.
    pub max_list_len: Option<usize>,
}

impl BijectionConfig {
    pub fn with_dilution(mut self, dilution: usize) -> Self {
        self.dilution = dilution;
        self
    }

    pub fn with_max_list_len(mut self, max_list_len: usize) -> Self {
        self.max_list_len = Some(max_list_len);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.dilution < 1 {
            return Err(DomainError::DilutionTooSmall(self.dilution));
        }
        Ok(())
    }
}

impl Default for BijectionConfig {
    fn default() -> Self {
        Self {
            dilution: DEFAULT_DILUTION,
            max_list_len: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BijectionConfig::default();
        assert_eq!(config.dilution, 10);
        assert_eq!(config.max_list_len, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BijectionConfig::default().with_dilution(3).with_max_list_len(100);
        assert_eq!(config.dilution, 3);
        assert_eq!(config.max_list_len, Some(100));
    }

    #[test]
    fn test_zero_dilution_rejected() {
        let config = BijectionConfig::default().with_dilution(0);
        assert_eq!(config.validate(), Err(DomainError::DilutionTooSmall(0)));
    }
}
