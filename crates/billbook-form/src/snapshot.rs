//! # Form Snapshot
//!
//! The one DTO handed to the rendering collaborator after every mutation.
//!
//! ## Output Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator event ──► InvoiceForm mutation ──► FormSnapshot::from(&form)  │
//! │                                                                         │
//! │  FormSnapshot                                                           │
//! │  ├── header           printed metadata (pass-through)                   │
//! │  ├── rows             ordered ComputedLineItems (fresh projection)      │
//! │  ├── totals           InvoiceTotals                                     │
//! │  ├── focus            which cell the frontend must give DOM focus       │
//! │  ├── bill_amount      net total rounded to whole rupees (print rule)    │
//! │  └── bill_amount_in_words   crore/lakh phrase, None for negative nets   │
//! │                                                                         │
//! │  All other display formatting (2-dp cells, digit grouping, currency     │
//! │  symbol) is the renderer's job.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use billbook_core::{ComputedLineItem, FocusPosition, InvoiceTotals};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::InvoiceForm;
use crate::header::InvoiceHeader;

/// Complete render state of the form after one operator event.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    /// Printed header metadata.
    pub header: InvoiceHeader,
    /// Computed rows in display order.
    pub rows: Vec<ComputedLineItem>,
    /// Invoice-level totals (unrounded).
    pub totals: InvoiceTotals,
    /// The active cell, `None` before first interaction.
    pub focus: Option<FocusPosition>,
    /// Net total rounded to whole rupees - the printed bill amount.
    pub bill_amount: i64,
    /// Bill amount in words. `None` when the net total is negative, which
    /// has no sign-word convention; the print collaborator decides then.
    pub bill_amount_in_words: Option<String>,
}

impl From<&InvoiceForm> for FormSnapshot {
    fn from(form: &InvoiceForm) -> Self {
        FormSnapshot {
            header: form.header.clone(),
            rows: form.computed(),
            totals: form.totals(),
            focus: form.focus(),
            bill_amount: form.bill_amount(),
            bill_amount_in_words: form.bill_amount_in_words().ok(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use billbook_core::Field;

    #[test]
    fn test_snapshot_reflects_form() {
        let mut form = InvoiceForm::new();
        let id = form.rows()[0].id;
        form.set_field(id, Field::Quantity, "2");
        form.set_field(id, Field::UnitPrice, "100");
        form.set_field(id, Field::DiscountPercent, "10");
        form.set_field(id, Field::GstPercent, "5");
        form.focus_cell(id, Field::GstPercent);

        let snap = FormSnapshot::from(&form);
        assert_eq!(snap.rows.len(), 1);
        assert_eq!(snap.totals.net_amount, 189.0);
        assert_eq!(snap.bill_amount, 189);
        assert_eq!(
            snap.bill_amount_in_words.as_deref(),
            Some("One Hundred Eighty Nine")
        );
        assert_eq!(snap.focus.unwrap().field, Field::GstPercent);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snap = FormSnapshot::from(&InvoiceForm::new());
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json.get("billAmount").is_some());
        assert!(json.get("billAmountInWords").is_some());
        // Flattened line item fields sit beside the derived ones
        let row = &json["rows"][0];
        assert!(row.get("unitPrice").is_some());
        assert!(row.get("grossAmount").is_some());
    }

    #[test]
    fn test_negative_net_yields_no_words() {
        let mut form = InvoiceForm::new();
        let id = form.rows()[0].id;
        form.set_field(id, Field::Quantity, "1");
        form.set_field(id, Field::UnitPrice, "100");
        form.set_field(id, Field::DiscountPercent, "200"); // Net goes negative

        let snap = FormSnapshot::from(&form);
        assert!(snap.bill_amount < 0);
        assert_eq!(snap.bill_amount_in_words, None);
    }
}
