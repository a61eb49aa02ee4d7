//! # Invoice Form & Focus Navigator
//!
//! The owned session state of one invoice entry form: the row arena and the
//! keyboard focus state machine over it.
//!
//! ## Navigation State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Focus Transitions                                    │
//! │                                                                         │
//! │  Key Event          Current (r, f)             New State                │
//! │  ─────────          ──────────────             ─────────                │
//! │                                                                         │
//! │  Advance            f not last in row    ───►  (r, next(f))            │
//! │  Advance            f last, row below    ───►  (row below, first)      │
//! │  Advance            f last, last row     ───►  INSERT ROW,             │
//! │                                                (new row, first)         │
//! │                                                                         │
//! │  Up / Down          neighbour row exists ───►  (neighbour, f)          │
//! │  Up / Down          at boundary          ───►  no-op (clamp)           │
//! │                                                                         │
//! │  Direct focus       row exists           ───►  (r', f') if different   │
//! │                                                                         │
//! │  The Advance-at-last-cell transition is how the grid grows: the        │
//! │  operator never reaches for the mouse or an "add row" button.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The arena is never empty: removal of the sole row resets to one blank
//! - Focus, when set, names a row that exists; re-established synchronously
//!   by every mutating operation before it returns
//! - Row insertion strictly precedes any focus assignment that depends on it
//!   (both happen inside one `&mut self` call, so no observer can see the
//!   intermediate state)

use billbook_core::calc::{compute_line, sum_totals};
use billbook_core::coerce::parse_amount;
use billbook_core::money::round_bill_amount;
use billbook_core::words::amount_in_words;
use billbook_core::{ComputedLineItem, CoreResult, Field, FocusPosition, InvoiceTotals, LineItem, RowId};
use tracing::debug;

use crate::header::InvoiceHeader;

// =============================================================================
// Navigation Keys
// =============================================================================

/// A discrete navigation key event, already decoded by the input collaborator.
///
/// `Advance` is the confirm/tab key; the form does not care which physical
/// key the frontend binds it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move to the next field, next row, or grow the grid at the end.
    Advance,
    /// Move one row up in the same column.
    Up,
    /// Move one row down in the same column.
    Down,
}

// =============================================================================
// Invoice Form
// =============================================================================

/// Mutable session state of one invoice entry form.
///
/// Re-architected from ambient per-widget state into a single owned object:
/// every transition is a method taking `&mut self`, which makes the
/// navigator deterministic and unit-testable without a rendering surface.
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    /// Printed header metadata, edited freely by the collaborator.
    pub header: InvoiceHeader,
    /// Row arena in display order. Never empty.
    rows: Vec<LineItem>,
    /// Next row id to hand out. Monotonic, never reused in a session.
    next_id: u64,
    /// The active grid cell, `None` before first interaction.
    focus: Option<FocusPosition>,
}

impl InvoiceForm {
    /// Creates a form with one blank row and no focus.
    pub fn new() -> Self {
        InvoiceForm {
            header: InvoiceHeader::default(),
            rows: vec![LineItem::blank(RowId::new(1))],
            next_id: 2,
            focus: None,
        }
    }

    // -------------------------------------------------------------------------
    // Row Access
    // -------------------------------------------------------------------------

    /// Rows in display order.
    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    /// Looks up a row by id.
    pub fn row(&self, id: RowId) -> Option<&LineItem> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// The active grid cell, if any.
    pub fn focus(&self) -> Option<FocusPosition> {
        self.focus
    }

    fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    fn first_cell(&self) -> FocusPosition {
        // Arena is never empty, so rows[0] always exists
        FocusPosition::new(self.rows[0].id, Field::first())
    }

    // -------------------------------------------------------------------------
    // Row Lifecycle
    // -------------------------------------------------------------------------

    /// Appends a blank row after the last and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId::new(self.next_id);
        self.next_id += 1;
        self.rows.push(LineItem::blank(id));
        debug!(row = %id, "row inserted");
        id
    }

    /// Removes a row by id. Unknown ids are a no-op.
    ///
    /// ## Focus Repair
    /// - If the removed row was focused, focus moves to the first remaining
    ///   row's first field
    /// - Removing the sole row resets the form to exactly one fresh blank
    ///   row, focused at its first field — the grid is never left empty
    pub fn remove_row(&mut self, id: RowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.rows.remove(index);
        debug!(row = %id, "row removed");

        if self.rows.is_empty() {
            let fresh = self.add_row();
            self.focus = Some(FocusPosition::new(fresh, Field::first()));
        } else if self.focus.map_or(false, |pos| pos.row == id) {
            self.focus = Some(self.first_cell());
        }
    }

    // -------------------------------------------------------------------------
    // Field Mutation
    // -------------------------------------------------------------------------

    /// Sets one field of one row from raw operator input.
    ///
    /// Text fields are stored verbatim; numeric fields go through
    /// [`parse_amount`], so unparsable input becomes `0`. Unknown row ids
    /// are a no-op.
    pub fn set_field(&mut self, id: RowId, field: Field, raw: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let row = &mut self.rows[index];
        match field {
            Field::Code => row.code = raw.to_string(),
            Field::Description => row.description = raw.to_string(),
            Field::PackSize => row.pack_size = raw.to_string(),
            Field::BatchNo => row.batch_no = raw.to_string(),
            Field::Quantity => row.quantity = parse_amount(raw),
            Field::UnitPrice => row.unit_price = parse_amount(raw),
            Field::DiscountPercent => row.discount_percent = parse_amount(raw),
            Field::GstPercent => row.gst_percent = parse_amount(raw),
            Field::AdditionalGst => row.additional_gst = parse_amount(raw),
            Field::AdvanceTax => row.advance_tax = parse_amount(raw),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Handles one navigation key against the current focus.
    ///
    /// Out-of-range transitions clamp to a no-op; from the initial `None`
    /// state any key focuses the first cell of the first row.
    pub fn handle_key(&mut self, key: NavKey) {
        let Some(pos) = self.focus else {
            self.focus = Some(self.first_cell());
            debug!(focus = ?self.focus, "initial focus");
            return;
        };

        // Focused row is guaranteed live by the invariant
        let Some(row_index) = self.index_of(pos.row) else {
            // Defensive repair; not reachable through the public API
            self.focus = Some(self.first_cell());
            return;
        };

        let next = match key {
            NavKey::Advance => match pos.field.next() {
                Some(field) => FocusPosition::new(pos.row, field),
                None => match self.rows.get(row_index + 1) {
                    Some(below) => FocusPosition::new(below.id, Field::first()),
                    None => {
                        // Tab past the last cell of the last row: grow the
                        // grid, then focus. One atomic update - insertion
                        // strictly precedes the focus assignment.
                        let fresh = self.add_row();
                        FocusPosition::new(fresh, Field::first())
                    }
                },
            },
            NavKey::Up => match row_index.checked_sub(1) {
                Some(i) => FocusPosition::new(self.rows[i].id, pos.field),
                None => pos, // Top boundary: clamp
            },
            NavKey::Down => match self.rows.get(row_index + 1) {
                Some(below) => FocusPosition::new(below.id, pos.field),
                None => pos, // Bottom boundary: clamp
            },
        };

        if next != pos {
            debug!(from = ?pos, to = ?next, "focus moved");
            self.focus = Some(next);
        }
    }

    /// Focuses a cell directly (pointer click or external event).
    ///
    /// Unknown rows are a no-op; refocusing the already-active cell is an
    /// idempotent no-op.
    pub fn focus_cell(&mut self, id: RowId, field: Field) {
        if self.index_of(id).is_none() {
            return;
        }
        let pos = FocusPosition::new(id, field);
        if self.focus != Some(pos) {
            debug!(to = ?pos, "direct focus");
            self.focus = Some(pos);
        }
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    /// Computed line items in display order. Recomputed on every call; the
    /// derived fields are a pure projection and are never stored.
    pub fn computed(&self) -> Vec<ComputedLineItem> {
        self.rows.iter().map(compute_line).collect()
    }

    /// Invoice-level totals over all rows.
    pub fn totals(&self) -> InvoiceTotals {
        sum_totals(&self.computed())
    }

    /// The printed bill amount: net total rounded to whole rupees.
    ///
    /// This is the only whole-unit rounding in the system; every
    /// intermediate sum stays unrounded.
    pub fn bill_amount(&self) -> i64 {
        round_bill_amount(self.totals().net_amount)
    }

    /// The printed bill amount in words.
    ///
    /// Errors only when the net total is negative, which has no sign-word
    /// convention; the print collaborator decides what to show then.
    pub fn bill_amount_in_words(&self) -> CoreResult<String> {
        amount_in_words(self.bill_amount() as f64)
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The navigator invariant: focus, when set, names a live row and a
    /// field from the tab order.
    fn assert_focus_valid(form: &InvoiceForm) {
        if let Some(pos) = form.focus() {
            assert!(form.row(pos.row).is_some(), "focus names a dead row");
            assert!(Field::ORDER.contains(&pos.field));
        }
        assert!(!form.rows().is_empty(), "grid must never be empty");
    }

    #[test]
    fn test_new_form_has_one_blank_unfocused_row() {
        let form = InvoiceForm::new();
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.focus(), None);
        assert_eq!(form.rows()[0].quantity, 1.0);
    }

    #[test]
    fn test_row_ids_are_monotonic_and_never_reused() {
        let mut form = InvoiceForm::new();
        let a = form.add_row();
        let b = form.add_row();
        assert!(b > a);

        form.remove_row(a);
        let c = form.add_row();
        assert!(c > b); // a's id is not handed out again
    }

    #[test]
    fn test_first_key_focuses_first_cell() {
        let mut form = InvoiceForm::new();
        form.handle_key(NavKey::Advance);
        let pos = form.focus().unwrap();
        assert_eq!(pos.row, form.rows()[0].id);
        assert_eq!(pos.field, Field::first());
    }

    #[test]
    fn test_advance_walks_fields_then_grows_grid() {
        let mut form = InvoiceForm::new();
        form.handle_key(NavKey::Advance); // -> (row 1, Code)

        // Walk to the last field of the only row
        for _ in 1..Field::ORDER.len() {
            form.handle_key(NavKey::Advance);
        }
        assert_eq!(form.focus().unwrap().field, Field::last());
        assert_eq!(form.rows().len(), 1);

        // One more Advance grows the grid and lands on the new row
        form.handle_key(NavKey::Advance);
        assert_eq!(form.rows().len(), 2);
        let pos = form.focus().unwrap();
        assert_eq!(pos.row, form.rows()[1].id);
        assert_eq!(pos.field, Field::first());
        assert_focus_valid(&form);
    }

    #[test]
    fn test_advance_at_row_end_moves_to_existing_row_below() {
        let mut form = InvoiceForm::new();
        let second = form.add_row();
        let first = form.rows()[0].id;

        form.focus_cell(first, Field::last());
        form.handle_key(NavKey::Advance);
        assert_eq!(form.focus(), Some(FocusPosition::new(second, Field::first())));
        assert_eq!(form.rows().len(), 2); // No growth when a row exists below
    }

    #[test]
    fn test_vertical_moves_clamp_at_boundaries() {
        let mut form = InvoiceForm::new();
        let second = form.add_row();
        let first = form.rows()[0].id;

        form.focus_cell(first, Field::Quantity);
        form.handle_key(NavKey::Up); // Already at top: clamp
        assert_eq!(form.focus(), Some(FocusPosition::new(first, Field::Quantity)));

        form.handle_key(NavKey::Down); // Same column, row below
        assert_eq!(form.focus(), Some(FocusPosition::new(second, Field::Quantity)));

        form.handle_key(NavKey::Down); // At bottom: clamp
        assert_eq!(form.focus(), Some(FocusPosition::new(second, Field::Quantity)));
    }

    #[test]
    fn test_focus_cell_ignores_dead_rows() {
        let mut form = InvoiceForm::new();
        let first = form.rows()[0].id;
        form.focus_cell(RowId::new(999), Field::Code);
        assert_eq!(form.focus(), None);

        form.focus_cell(first, Field::BatchNo);
        assert_eq!(form.focus(), Some(FocusPosition::new(first, Field::BatchNo)));
        // Repeat is an idempotent no-op
        form.focus_cell(first, Field::BatchNo);
        assert_eq!(form.focus(), Some(FocusPosition::new(first, Field::BatchNo)));
    }

    #[test]
    fn test_removing_focused_row_refocuses_first_cell() {
        let mut form = InvoiceForm::new();
        let second = form.add_row();
        let first = form.rows()[0].id;

        form.focus_cell(second, Field::UnitPrice);
        form.remove_row(second);
        assert_eq!(form.focus(), Some(FocusPosition::new(first, Field::first())));
        assert_focus_valid(&form);
    }

    #[test]
    fn test_removing_unfocused_row_keeps_focus() {
        let mut form = InvoiceForm::new();
        let second = form.add_row();
        let first = form.rows()[0].id;

        form.focus_cell(first, Field::Quantity);
        form.remove_row(second);
        assert_eq!(form.focus(), Some(FocusPosition::new(first, Field::Quantity)));
    }

    #[test]
    fn test_removing_sole_row_resets_to_one_blank() {
        let mut form = InvoiceForm::new();
        let only = form.rows()[0].id;
        form.set_field(only, Field::Code, "PAN-500");

        form.remove_row(only);
        assert_eq!(form.rows().len(), 1);
        let fresh = &form.rows()[0];
        assert_ne!(fresh.id, only); // A fresh row, not the old one back
        assert!(fresh.code.is_empty());
        assert_eq!(form.focus(), Some(FocusPosition::new(fresh.id, Field::first())));
    }

    #[test]
    fn test_remove_unknown_row_is_noop() {
        let mut form = InvoiceForm::new();
        form.remove_row(RowId::new(42));
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn test_invariant_survives_mixed_operation_sequences() {
        let mut form = InvoiceForm::new();
        // A hostile interleaving of grow, navigate and remove
        for step in 0..200u64 {
            match step % 7 {
                0 => form.handle_key(NavKey::Advance),
                1 => form.handle_key(NavKey::Down),
                2 => {
                    form.add_row();
                }
                3 => form.handle_key(NavKey::Up),
                4 => form.remove_row(RowId::new(step % 11)),
                5 => form.focus_cell(RowId::new(step % 13), Field::GstPercent),
                _ => {
                    let id = form.rows()[0].id;
                    form.remove_row(id);
                }
            }
            assert_focus_valid(&form);
        }
    }

    #[test]
    fn test_set_field_coerces_numerics_and_keeps_text() {
        let mut form = InvoiceForm::new();
        let id = form.rows()[0].id;

        form.set_field(id, Field::Description, "Panadol Extra");
        form.set_field(id, Field::Quantity, "12");
        form.set_field(id, Field::UnitPrice, "oops");

        let row = form.row(id).unwrap();
        assert_eq!(row.description, "Panadol Extra");
        assert_eq!(row.quantity, 12.0);
        assert_eq!(row.unit_price, 0.0);
    }

    #[test]
    fn test_end_to_end_entry_session() {
        let mut form = InvoiceForm::new();
        let id = form.rows()[0].id;
        form.set_field(id, Field::Quantity, "2");
        form.set_field(id, Field::UnitPrice, "100");
        form.set_field(id, Field::DiscountPercent, "10");
        form.set_field(id, Field::GstPercent, "5");

        let totals = form.totals();
        assert_eq!(totals.gross_amount, 200.0);
        assert_eq!(totals.discount_amount, 20.0);
        assert_eq!(totals.gst_amount, 9.0);
        assert_eq!(totals.net_amount, 189.0);
        assert_eq!(form.bill_amount(), 189);
        assert_eq!(
            form.bill_amount_in_words().unwrap(),
            "One Hundred Eighty Nine"
        );
    }

    #[test]
    fn test_bill_amount_rounds_only_at_the_print_boundary() {
        let mut form = InvoiceForm::new();
        let a = form.rows()[0].id;
        let b = form.add_row();
        // Two lines of 10.30: totals stay exact, bill rounds once
        for id in [a, b] {
            form.set_field(id, Field::Quantity, "1");
            form.set_field(id, Field::UnitPrice, "10.30");
        }
        assert_eq!(form.bill_amount(), 21); // 20.60 -> 21
    }
}
