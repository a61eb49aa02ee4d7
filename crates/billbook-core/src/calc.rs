//! # Line Calculation & Totals
//!
//! The per-line financial calculation and the invoice-level aggregation.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One-Way Data Flow                                   │
//! │                                                                         │
//! │   LineItem ──► compute_line() ──► ComputedLineItem ──┐                  │
//! │   LineItem ──► compute_line() ──► ComputedLineItem ──┼─► sum_totals()  │
//! │   LineItem ──► compute_line() ──► ComputedLineItem ──┘        │         │
//! │                                                               ▼         │
//! │                                                       InvoiceTotals    │
//! │                                                                         │
//! │  Both functions are pure and total: same input, same output, no        │
//! │  failure path. Rounding never happens here (see crate::money).         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{ComputedLineItem, InvoiceTotals, LineItem};

// =============================================================================
// Line Item Calculator
// =============================================================================

/// Computes the derived monetary fields for one invoice row.
///
/// ## Formulas
/// ```text
/// gross        = quantity × unit_price
/// discount_amt = gross × discount% / 100
/// taxable      = gross − discount_amt
/// gst_amt      = taxable × gst% / 100
/// net          = taxable + gst_amt + additional_gst + advance_tax
/// ```
///
/// ## Example
/// ```rust
/// use billbook_core::calc::compute_line;
/// use billbook_core::types::{LineItem, RowId};
///
/// let mut item = LineItem::blank(RowId::new(1));
/// item.quantity = 2.0;
/// item.unit_price = 100.0;
/// item.discount_percent = 10.0;
/// item.gst_percent = 5.0;
///
/// let computed = compute_line(&item);
/// assert_eq!(computed.gross_amount, 200.0);
/// assert_eq!(computed.discount_amount, 20.0);
/// assert_eq!(computed.gst_amount, 9.0);   // 5% of taxable 180
/// assert_eq!(computed.net_amount, 189.0);
/// ```
pub fn compute_line(item: &LineItem) -> ComputedLineItem {
    let gross_amount = item.quantity * item.unit_price;
    let discount_amount = gross_amount * item.discount_percent / 100.0;
    let taxable = gross_amount - discount_amount;
    let gst_amount = taxable * item.gst_percent / 100.0;
    let net_amount = taxable + gst_amount + item.additional_gst + item.advance_tax;

    ComputedLineItem {
        item: item.clone(),
        gross_amount,
        discount_amount,
        gst_amount,
        net_amount,
    }
}

// =============================================================================
// Totals Aggregator
// =============================================================================

/// Reduces computed line items into invoice-level totals.
///
/// Order-independent: item order affects display only, never the sums.
/// An empty slice yields `InvoiceTotals::default()` (all zeros).
pub fn sum_totals(items: &[ComputedLineItem]) -> InvoiceTotals {
    items.iter().fold(InvoiceTotals::default(), |mut acc, line| {
        acc.gross_amount += line.gross_amount;
        acc.discount_amount += line.discount_amount;
        acc.gst_amount += line.gst_amount;
        acc.additional_gst += line.item.additional_gst;
        acc.advance_tax += line.item.advance_tax;
        acc.net_amount += line.net_amount;
        acc
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
