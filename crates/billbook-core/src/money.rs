//! # Money Presentation Helpers
//!
//! The single home for rounding decisions.
//!
//! ## Why f64, not integer paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUNDING IS A PRESENTATION CONCERN                                     │
//! │                                                                         │
//! │  Per-line values feed the invoice totals UNROUNDED. If each line were   │
//! │  snapped to whole paise first, the error would compound across rows:    │
//! │                                                                         │
//! │    3 lines × Rs 10.004  → rounded per line: 10.00 × 3 = 30.00   ❌     │
//! │                         → summed unrounded: 30.012  → 30.01    ✅      │
//! │                                                                         │
//! │  So the calculation pipeline carries f64 end to end and this module    │
//! │  rounds exactly twice, both at the display boundary:                    │
//! │    • every displayed cell/total  → 2 decimal places                     │
//! │    • the one printed bill amount → nearest whole rupee                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing outside this module may round.

// =============================================================================
// Display Rounding
// =============================================================================

/// Rounds an amount to two decimal places (whole paise) for display.
///
/// ## Example
/// ```rust
/// use billbook_core::money::round_paise;
///
/// assert_eq!(round_paise(1.006), 1.01);
/// assert_eq!(round_paise(12.3), 12.3);
/// ```
#[inline]
pub fn round_paise(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Rounds the final bill amount to the nearest whole rupee.
///
/// Applied exactly once, to the invoice net total at the print boundary.
/// Intermediate per-line and total sums stay unrounded; see the module doc.
///
/// ## Example
/// ```rust
/// use billbook_core::money::round_bill_amount;
///
/// assert_eq!(round_bill_amount(189.49), 189);
/// assert_eq!(round_bill_amount(189.5), 190);
/// ```
#[inline]
pub fn round_bill_amount(amount: f64) -> i64 {
    amount.round() as i64
}

/// Formats an amount with two decimal places, e.g. `"1234.50"`.
///
/// Debug/demo convenience. Locale-aware formatting (digit grouping,
/// currency symbol) belongs to the rendering collaborator.
pub fn format_paise(amount: f64) -> String {
    format!("{:.2}", round_paise(amount))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_paise() {
        assert_eq!(round_paise(189.004), 189.0);
        assert_eq!(round_paise(1.006), 1.01);
        assert_eq!(round_paise(0.0), 0.0);
    }

    #[test]
    fn test_round_bill_amount_half_up() {
        assert_eq!(round_bill_amount(189.0), 189);
        assert_eq!(round_bill_amount(189.49), 189);
        assert_eq!(round_bill_amount(189.5), 190);
        assert_eq!(round_bill_amount(0.4), 0);
    }

    #[test]
    fn test_unrounded_sum_beats_per_line_rounding() {
        // The scenario from the module doc: rounding per line loses paise
        let lines = [10.004_f64; 3];
        let per_line_rounded: f64 = lines.iter().map(|v| round_paise(*v)).sum();
        let summed_then_rounded = round_paise(lines.iter().sum());
        assert_eq!(per_line_rounded, 30.0);
        assert_eq!(summed_then_rounded, 30.01);
    }

    #[test]
    fn test_format_paise() {
        assert_eq!(format_paise(1234.5), "1234.50");
        assert_eq!(format_paise(0.0), "0.00");
    }
}
