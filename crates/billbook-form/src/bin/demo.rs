//! # Entry Session Demo
//!
//! Replays a keyboard-only invoice entry session and prints the computed
//! grid, totals and the amount-in-words line the way the print flow would.
//!
//! ## Usage
//! ```bash
//! cargo run -p billbook-form --bin billbook-demo
//!
//! # With form transition logging
//! RUST_LOG=billbook_form=debug cargo run -p billbook-form --bin billbook-demo
//! ```
//!
//! Every row below is entered the way an operator would: fill the fields of
//! the last row, then Advance past its last cell to grow the grid.

use billbook_core::money::format_paise;
use billbook_core::Field;
use billbook_form::{FormSnapshot, InvoiceForm, NavKey};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// (code, description, pack, batch, qty, price, disc%, gst%, add gst, adv tax)
const SAMPLE_ROWS: &[(&str, &str, &str, &str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "PAN-500", "Panadol 500mg", "10x10", "B-1021", "2", "100", "10", "5", "0", "0",
    ),
    (
        "AMX-250", "Amoxil 250mg", "2x10", "A-7744", "5", "84.50", "0", "17", "3.5", "0",
    ),
    (
        "ORS-1", "ORS Sachet", "25s", "C-0193", "10", "18", "5", "0", "0", "1.25",
    ),
];

fn main() {
    // Log form transitions when asked to; quiet otherwise
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut form = InvoiceForm::new();
    form.header.invoice_number = "INV-0042".to_string();
    form.header.date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    form.header.customer_name = "City Medical Store".to_string();
    form.header.customer_address = "Shop 12, Saddar Bazar".to_string();

    // Keyboard-only entry: type a cell, Advance to the next; the Advance
    // past the last cell of the last row is what creates each new row.
    for values in SAMPLE_ROWS {
        let row = form.rows().last().unwrap().id;
        let cells = [
            values.0, values.1, values.2, values.3, values.4, values.5, values.6, values.7,
            values.8, values.9,
        ];
        for (field, raw) in Field::ORDER.into_iter().zip(cells) {
            form.focus_cell(row, field);
            form.set_field(row, field, raw);
            form.handle_key(NavKey::Advance);
        }
    }
    // The trailing Advance grew one blank row past the sample data
    let trailing = form.rows().last().unwrap().id;
    form.remove_row(trailing);

    let snap = FormSnapshot::from(&form);
    print_invoice(&snap);
}

fn print_invoice(snap: &FormSnapshot) {
    println!("Invoice {}  dated {}", snap.header.invoice_number, snap.header.date);
    println!("{}, {}\n", snap.header.customer_name, snap.header.customer_address);

    println!(
        "{:<10} {:<18} {:>6} {:>10} {:>10} {:>10} {:>10}",
        "Code", "Description", "Qty", "Gross", "Disc", "GST", "Net"
    );
    for row in &snap.rows {
        println!(
            "{:<10} {:<18} {:>6} {:>10} {:>10} {:>10} {:>10}",
            row.item.code,
            row.item.description,
            row.item.quantity,
            format_paise(row.gross_amount),
            format_paise(row.discount_amount),
            format_paise(row.gst_amount),
            format_paise(row.net_amount),
        );
    }

    println!(
        "\nTotals: gross {}  discount {}  gst {}  net {}",
        format_paise(snap.totals.gross_amount),
        format_paise(snap.totals.discount_amount),
        format_paise(snap.totals.gst_amount),
        format_paise(snap.totals.net_amount),
    );
    println!("Bill amount: Rs {}", snap.bill_amount);
    if let Some(words) = &snap.bill_amount_in_words {
        println!("In words: {}", words);
    }
}
