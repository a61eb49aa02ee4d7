//! # billbook-core: Pure Business Logic for Billbook
//!
//! This crate is the **heart** of Billbook, the keyboard-first invoice entry
//! tool. It contains all financial logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Billbook Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Form Rendering Collaborator                     │   │
//! │  │    Entry grid ──► Totals strip ──► Print view                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / key events                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                billbook-form (session layer)                    │   │
//! │  │    Row arena, focus navigator, invoice header, FormState        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ billbook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   calc    │  │   words   │  │  coerce   │  │   │
//! │  │   │ LineItem  │  │ per-line  │  │ crore/    │  │ text → 0  │  │   │
//! │  │   │ Totals    │  │ + totals  │  │ lakh      │  │ fallback  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO WIDGET HANDLES • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, ComputedLineItem, InvoiceTotals, Field)
//! - [`calc`] - Per-line calculation and invoice totals
//! - [`words`] - Amount-in-words formatter (crore/lakh grouping)
//! - [`money`] - Presentation rounding (the only place that rounds)
//! - [`coerce`] - Numeric input coercion (unparsable → 0)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Rendering, printing and persistence live in collaborators
//! 3. **Unrounded Intermediates**: Amounts are `f64` end to end; rounding is
//!    presentation-only so error never compounds across rows
//! 4. **Defined Defaults**: Anomalous input degrades to a default (0, no-op)
//!    instead of propagating failures
//!
//! ## Example Usage
//!
//! ```rust
//! use billbook_core::calc::{compute_line, sum_totals};
//! use billbook_core::types::{LineItem, RowId};
//! use billbook_core::words::amount_in_words;
//!
//! let mut row = LineItem::blank(RowId::new(1));
//! row.quantity = 2.0;
//! row.unit_price = 100.0;
//! row.discount_percent = 10.0;
//! row.gst_percent = 5.0;
//!
//! let computed = compute_line(&row);
//! let totals = sum_totals(std::slice::from_ref(&computed));
//! assert_eq!(totals.net_amount, 189.0);
//! assert_eq!(amount_in_words(189.0).unwrap(), "One Hundred Eighty Nine");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod coerce;
pub mod error;
pub mod money;
pub mod types;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billbook_core::LineItem` instead of
// `use billbook_core::types::LineItem`

pub use error::{CoreError, CoreResult};
pub use types::{ComputedLineItem, Field, FocusPosition, InvoiceTotals, LineItem, RowId};
