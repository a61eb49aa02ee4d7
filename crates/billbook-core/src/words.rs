//! # Amount In Words
//!
//! Converts a non-negative amount into an English phrase with South-Asian
//! magnitude grouping, for the printed "bill amount in words" line.
//!
//! ## Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │           South-Asian Grouping (not Western thousands)                  │
//! │                                                                         │
//! │   Crore      = 10,000,000   (10^7)                                      │
//! │   Lakh       =    100,000   (10^5)                                      │
//! │   Thousand   =      1,000   (10^3)                                      │
//! │   Hundred    =        100                                               │
//! │                                                                         │
//! │   1,23,45,678  →  One Crore  Twenty Three Lakh  Forty Five Thousand    │
//! │                   Six Hundred Seventy Eight                             │
//! │                                                                         │
//! │   Fractional paise (rounded to 2 places) append as "and N/100":        │
//! │   189.50  →  One Hundred Eighty Nine and 50/100                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Negative amounts have no sign convention upstream, so they return a typed
//! error instead of guessing one.

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Word Tables
// =============================================================================

/// Irregular words for 0-19. Index 0 is empty: zero is special-cased.
const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

/// Tens multiples. Indices 0 and 1 are unused (covered by `ONES`).
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Fixed phrase for a zero amount.
const ZERO_PHRASE: &str = "Zero";

// =============================================================================
// Sub-Rules
// =============================================================================

/// Renders 1-99 via the irregular and tens tables. Empty string for 0.
fn under_hundred(n: i64) -> String {
    debug_assert!((0..100).contains(&n));
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

/// Renders 1-999 as `[X Hundred] [YZ]`. Empty string for 0.
fn under_thousand(n: i64) -> String {
    debug_assert!((0..1000).contains(&n));
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => under_hundred(r),
        (h, 0) => format!("{} Hundred", ONES[h as usize]),
        (h, r) => format!("{} Hundred {}", ONES[h as usize], under_hundred(r)),
    }
}

/// Renders a positive rupee count via descending magnitude groups.
///
/// The crore count is itself rendered through this same decomposition, so
/// counts past 999 crore keep working: 1000 crore is "One Thousand Crore"
/// and 10^14 rupees is "One Crore Crore". Lakh and thousand counts are
/// bounded at 99 by construction.
fn integer_words(n: i64) -> String {
    debug_assert!(n > 0);
    let mut groups: Vec<String> = Vec::new();
    let mut rest = n;

    let crore = rest / 10_000_000;
    rest %= 10_000_000;
    if crore > 0 {
        groups.push(format!("{} Crore", integer_words(crore)));
    }

    let lakh = rest / 100_000;
    rest %= 100_000;
    if lakh > 0 {
        groups.push(format!("{} Lakh", under_hundred(lakh)));
    }

    let thousand = rest / 1_000;
    rest %= 1_000;
    if thousand > 0 {
        groups.push(format!("{} Thousand", under_hundred(thousand)));
    }

    if rest > 0 {
        groups.push(under_thousand(rest));
    }

    groups.join(" ")
}

// =============================================================================
// Amount Formatter
// =============================================================================

/// Converts a non-negative amount into words.
///
/// ## Algorithm
/// The amount is first rounded to two places. The integer part is divided
/// successively by each magnitude boundary — crore, then lakh of the
/// remainder, then thousand, then hundred, then the final two digits — and
/// one word group is emitted per nonzero magnitude, in descending order.
/// The crore count goes through the same decomposition again, so any rupee
/// total an `f64` can carry renders without truncation. Nonzero paise
/// append `and N/100`. A zero amount yields the fixed phrase `"Zero"`.
///
/// ## Errors
/// [`CoreError::NegativeAmount`] for any negative input.
///
/// ## Example
/// ```rust
/// use billbook_core::words::amount_in_words;
///
/// assert_eq!(amount_in_words(1500.0).unwrap(), "One Thousand Five Hundred");
/// assert_eq!(
///     amount_in_words(12_34_567.0).unwrap(),
///     "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
/// );
/// assert_eq!(amount_in_words(189.5).unwrap(), "One Hundred Eighty Nine and 50/100");
/// ```
pub fn amount_in_words(amount: f64) -> CoreResult<String> {
    if amount < 0.0 {
        return Err(CoreError::NegativeAmount { amount });
    }

    // Round once, to whole paise, then split into rupees and paise
    let total_paise = (amount * 100.0).round() as i64;
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    if rupees == 0 && paise == 0 {
        return Ok(ZERO_PHRASE.to_string());
    }

    let mut phrase = if rupees == 0 {
        // Integer part is zero but paise are not, e.g. 0.75
        ZERO_PHRASE.to_string()
    } else {
        integer_words(rupees)
    };

    if paise > 0 {
        phrase = format!("{} and {}/100", phrase, paise);
    }

    Ok(phrase)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_fixed_phrase() {
        assert_eq!(amount_in_words(0.0).unwrap(), "Zero");
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(amount_in_words(1.0).unwrap(), "One");
        assert_eq!(amount_in_words(14.0).unwrap(), "Fourteen");
        assert_eq!(amount_in_words(19.0).unwrap(), "Nineteen");
    }

    #[test]
    fn test_tens_and_composites() {
        assert_eq!(amount_in_words(20.0).unwrap(), "Twenty");
        assert_eq!(amount_in_words(42.0).unwrap(), "Forty Two");
        assert_eq!(amount_in_words(99.0).unwrap(), "Ninety Nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(amount_in_words(100.0).unwrap(), "One Hundred");
        assert_eq!(amount_in_words(189.0).unwrap(), "One Hundred Eighty Nine");
    }

    #[test]
    fn test_thousand_grouping() {
        let phrase = amount_in_words(1500.0).unwrap();
        assert!(phrase.contains("One Thousand Five Hundred"));
        assert_eq!(amount_in_words(99_999.0).unwrap(), "Ninety Nine Thousand Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_lakh_grouping() {
        let phrase = amount_in_words(100_000.0).unwrap();
        assert!(phrase.contains("One Lakh"));
        assert_eq!(
            amount_in_words(12_34_567.0).unwrap(),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
    }

    #[test]
    fn test_crore_grouping() {
        let phrase = amount_in_words(10_000_000.0).unwrap();
        assert!(phrase.contains("One Crore"));
        assert_eq!(
            amount_in_words(1_23_45_678.0).unwrap(),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight"
        );
    }

    #[test]
    fn test_crore_counts_past_the_hundreds() {
        // 1000 crore: the crore count itself needs a thousand group
        assert_eq!(
            amount_in_words(10_000_000_000.0).unwrap(),
            "One Thousand Crore"
        );
        assert_eq!(
            amount_in_words(25_750_000_000.0).unwrap(),
            "Two Thousand Five Hundred Seventy Five Crore"
        );
        // A crore of crore recurses one level deeper
        assert_eq!(
            amount_in_words(100_000_000_000_000.0).unwrap(),
            "One Crore Crore"
        );
    }

    #[test]
    fn test_paise_suffix() {
        assert_eq!(amount_in_words(189.5).unwrap(), "One Hundred Eighty Nine and 50/100");
        assert_eq!(amount_in_words(0.75).unwrap(), "Zero and 75/100");
    }

    #[test]
    fn test_paise_rounding_to_two_places() {
        // 10.999 rounds to 11.00, not "Ten and 100/100"
        assert_eq!(amount_in_words(10.999).unwrap(), "Eleven");
    }

    #[test]
    fn test_negative_is_typed_error() {
        let err = amount_in_words(-1.0).unwrap_err();
        assert!(matches!(err, CoreError::NegativeAmount { .. }));
    }
}
