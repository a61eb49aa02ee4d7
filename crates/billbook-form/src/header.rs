//! # Invoice Header
//!
//! Printed-form metadata carried alongside the entry grid. Pass-through
//! data: nothing here is computed, the form just holds it for the snapshot
//! and the print flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Header block of the printed invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceHeader {
    /// Business invoice number, assigned by the operator.
    pub invoice_number: String,

    /// Invoice date.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Customer name as printed.
    pub customer_name: String,

    /// Customer address as printed.
    pub customer_address: String,

    /// Free-text remarks line at the foot of the invoice.
    pub remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_is_blank() {
        let header = InvoiceHeader::default();
        assert!(header.invoice_number.is_empty());
        assert!(header.customer_name.is_empty());
    }
}
