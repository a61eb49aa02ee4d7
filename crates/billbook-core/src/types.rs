//! # Domain Types
//!
//! Core domain types for invoice entry.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌──────────────────┐     │
//! │  │    LineItem     │   │ ComputedLineItem │   │  InvoiceTotals   │     │
//! │  │  ─────────────  │   │  ──────────────  │   │  ──────────────  │     │
//! │  │  id (RowId)     │──►│  item            │──►│  gross_amount    │     │
//! │  │  code, batch..  │   │  gross_amount    │   │  gst_amount      │     │
//! │  │  quantity       │   │  discount_amount │   │  net_amount      │     │
//! │  │  unit_price     │   │  gst_amount      │   │  ...             │     │
//! │  │  gst_percent    │   │  net_amount      │   │                  │     │
//! │  └─────────────────┘   └──────────────────┘   └──────────────────┘     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐                            │
//! │  │     Field       │   │  FocusPosition   │                            │
//! │  │  ─────────────  │   │  ──────────────  │                            │
//! │  │  Code           │   │  row (RowId)     │                            │
//! │  │  Quantity       │   │  field (Field)   │                            │
//! │  │  UnitPrice ...  │   │                  │                            │
//! │  └─────────────────┘   └──────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Projection Pattern
//! `ComputedLineItem` is never stored: it is recomputed from its source
//! `LineItem` on every change, so derived fields can never go stale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Row Identity
// =============================================================================

/// Stable identifier for one invoice row.
///
/// ## Why an integer, not a UUID?
/// Rows live only for the session and are addressed by the focus navigator
/// thousands of times per entry session. Ids are assigned monotonically by
/// the form (1, 2, 3, ...) and never reused, so `(RowId, Field)` is a cheap,
/// copyable composite key into the row arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct RowId(u64);

impl RowId {
    /// Creates a row id from its raw value.
    #[inline]
    pub const fn new(id: u64) -> Self {
        RowId(id)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Field / Tab Order
// =============================================================================

/// One entry field of an invoice row.
///
/// The variant order here **is** the tab order: `Field::ORDER` is derived
/// from it and the navigator walks it left to right. It is configuration,
/// not per-row state, and must match the column order of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Product code.
    Code,
    /// Product description.
    Description,
    /// Pack size ("10x10", "30ml", ...). Free text.
    PackSize,
    /// Batch number. Free text.
    BatchNo,
    /// Quantity sold.
    Quantity,
    /// Price per unit.
    UnitPrice,
    /// Discount percentage applied to the gross amount.
    DiscountPercent,
    /// GST percentage applied to the taxable amount.
    GstPercent,
    /// Flat additional GST charge (not percentage-derived).
    AdditionalGst,
    /// Flat advance tax charge (not percentage-derived).
    AdvanceTax,
}

impl Field {
    /// The fixed tab order across a row, left to right.
    pub const ORDER: [Field; 10] = [
        Field::Code,
        Field::Description,
        Field::PackSize,
        Field::BatchNo,
        Field::Quantity,
        Field::UnitPrice,
        Field::DiscountPercent,
        Field::GstPercent,
        Field::AdditionalGst,
        Field::AdvanceTax,
    ];

    /// First field in tab order.
    #[inline]
    pub const fn first() -> Field {
        Field::ORDER[0]
    }

    /// Last field in tab order.
    #[inline]
    pub const fn last() -> Field {
        Field::ORDER[Field::ORDER.len() - 1]
    }

    /// Position of this field within [`Field::ORDER`].
    pub fn index(&self) -> usize {
        Field::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or(0) // Unreachable: every variant is in ORDER
    }

    /// The field after this one in tab order, or `None` at the end of a row.
    pub fn next(&self) -> Option<Field> {
        Field::ORDER.get(self.index() + 1).copied()
    }

    /// The field before this one in tab order, or `None` at the start.
    pub fn prev(&self) -> Option<Field> {
        self.index().checked_sub(1).map(|i| Field::ORDER[i])
    }

    /// Whether operator input for this field goes through numeric coercion.
    ///
    /// Text fields (`Code`..`BatchNo`) are stored verbatim; everything from
    /// `Quantity` onwards is coerced with [`crate::coerce::parse_amount`].
    pub const fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Field::Code | Field::Description | Field::PackSize | Field::BatchNo
        )
    }
}

// =============================================================================
// Focus Position
// =============================================================================

/// The single active grid cell of the keyboard-navigable form.
///
/// ## Invariant
/// A `FocusPosition` held by the form always names a row that currently
/// exists. The navigator re-establishes this synchronously after every
/// add/remove operation; it is never left dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FocusPosition {
    /// Row the cell belongs to.
    pub row: RowId,
    /// Column within the row, drawn from [`Field::ORDER`].
    pub field: Field,
}

impl FocusPosition {
    /// Creates a focus position for `(row, field)`.
    #[inline]
    pub const fn new(row: RowId, field: Field) -> Self {
        FocusPosition { row, field }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One invoice row as entered by the operator.
///
/// ## Numeric Fields
/// All numeric fields are `f64` and deliberately **unrounded**: per the
/// calculation contract, rounding happens only at presentation time, so
/// intermediate values must carry full precision into the totals.
/// Unparsable operator input is coerced to `0.0` before it reaches this
/// struct (see [`crate::coerce`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable row identity, assigned monotonically, never reused.
    pub id: RowId,
    /// Product code.
    pub code: String,
    /// Product description.
    pub description: String,
    /// Pack size, free text.
    pub pack_size: String,
    /// Batch number, free text.
    pub batch_no: String,
    /// Quantity sold. New rows default to 1.
    pub quantity: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// Discount percentage (0-100 expected, not enforced).
    pub discount_percent: f64,
    /// GST percentage (0-100 expected, not enforced).
    pub gst_percent: f64,
    /// Flat additional GST charge.
    pub additional_gst: f64,
    /// Flat advance tax charge.
    pub advance_tax: f64,
}

impl LineItem {
    /// Creates a blank row with the given id.
    ///
    /// Defaults: `quantity = 1` (an operator entering a code almost always
    /// means at least one unit), every other numeric `0`, all text empty.
    pub fn blank(id: RowId) -> Self {
        LineItem {
            id,
            code: String::new(),
            description: String::new(),
            pack_size: String::new(),
            batch_no: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
            discount_percent: 0.0,
            gst_percent: 0.0,
            additional_gst: 0.0,
            advance_tax: 0.0,
        }
    }
}

// =============================================================================
// Computed Line Item
// =============================================================================

/// A [`LineItem`] plus its derived monetary fields.
///
/// Produced by [`crate::calc::compute_line`]; read-only by convention and
/// recomputed on every change to the source row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComputedLineItem {
    /// The source row, embedded so renderers get one self-contained record.
    #[serde(flatten)]
    pub item: LineItem,
    /// quantity × unit price, before discount and tax.
    pub gross_amount: f64,
    /// gross × discount% / 100.
    pub discount_amount: f64,
    /// (gross − discount) × gst% / 100.
    pub gst_amount: f64,
    /// taxable + gst + additional gst + advance tax.
    pub net_amount: f64,
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Invoice-level sums across all computed line items.
///
/// An empty item set yields the `Default` (all zeros), never an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Sum of per-line gross amounts.
    pub gross_amount: f64,
    /// Sum of per-line discount amounts.
    pub discount_amount: f64,
    /// Sum of per-line GST amounts.
    pub gst_amount: f64,
    /// Sum of the raw per-line additional GST charges.
    pub additional_gst: f64,
    /// Sum of the raw per-line advance tax charges.
    pub advance_tax: f64,
    /// Sum of per-line net amounts. The bill amount before print rounding.
    pub net_amount: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
