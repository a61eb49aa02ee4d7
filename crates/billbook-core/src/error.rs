//! # Error Types
//!
//! Domain error types for billbook-core.
//!
//! ## Why So Few Variants?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Anomaly Handling Policy                                │
//! │                                                                         │
//! │  Unparsable numeric input   → coerced to 0        (coerce module)      │
//! │  Navigation out of bounds   → no-op               (form navigator)     │
//! │  Removing the sole row      → reset to one blank  (form navigator)     │
//! │  Negative amount to words   → CoreError ◄── the ONE surfaced error     │
//! │                                                                         │
//! │  Everything else degrades to a defined default: nothing in the core    │
//! │  is fatal, and nothing panics outside of tests.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The words formatter is the exception because a negative bill amount has
//! no agreed sign convention; inventing one silently would print a wrong
//! legal document.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The amount-to-words formatter received a negative amount.
    ///
    /// ## When This Occurs
    /// - Net total driven negative by a discount over 100% or oversized
    ///   flat charges, then handed to the print flow
    #[error("Cannot format negative amount in words: {amount}")]
    NegativeAmount { amount: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeAmount { amount: -12.5 };
        assert_eq!(
            err.to_string(),
            "Cannot format negative amount in words: -12.5"
        );
    }
}
