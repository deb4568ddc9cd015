//! Platform error types
//!
//! This module defines error types for platform operations. The settings
//! accessors never fail; these only cover binding and test-support
//! operations on a backup region.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// A byte image does not match the backup region size
    RegionSize {
        /// Required size in bytes
        expected: usize,
        /// Size provided
        actual: usize,
    },
    /// Word index outside the backup region
    InvalidWordIndex(usize),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::RegionSize { expected, actual } => write!(
                f,
                "backup region image must be {} bytes, got {}",
                expected, actual
            ),
            PlatformError::InvalidWordIndex(index) => {
                write!(f, "word index {} outside backup region", index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlatformError::RegionSize {
            expected: 256,
            actual: 12,
        };
        assert_eq!(
            format!("{}", err),
            "backup region image must be 256 bytes, got 12"
        );
        assert_eq!(
            format!("{}", PlatformError::InvalidWordIndex(64)),
            "word index 64 outside backup region"
        );
    }
}
