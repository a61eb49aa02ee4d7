//! # Numeric Coercion
//!
//! The single coercion policy for operator input.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Coercion                                     │
//! │                                                                         │
//! │  Operator types into a numeric cell: "12.5", "", "abc", "1e3", "-4"    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount() ← THIS MODULE                                           │
//! │       │                                                                 │
//! │       ├── parses as finite f64? → that value                            │
//! │       │                                                                 │
//! │       └── anything else → 0.0 (silently, never an error)               │
//! │                                                                         │
//! │  Entry speed beats strictness here: a cashier mid-invoice must never   │
//! │  be blocked by a dialog over a stray keystroke.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billbook_core::coerce::parse_amount;
//!
//! assert_eq!(parse_amount("12.5"), 12.5);
//! assert_eq!(parse_amount("garbage"), 0.0);
//! ```

/// Coerces raw operator input to a numeric amount.
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - Anything that parses as a finite `f64` is taken verbatim
/// - Empty, unparsable, NaN or infinite input becomes `0.0`
///
/// This is total by design: anomalous input degrades to a defined default
/// rather than surfacing an error to the caller.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("0"), 0.0);
        assert_eq!(parse_amount("-4"), -4.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("  7.25  "), 7.25);
    }

    #[test]
    fn test_parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12.5.3"), 0.0);
        assert_eq!(parse_amount("Rs 100"), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-inf"), 0.0);
    }
}
