//! # billbook-form: Form Session Layer for Billbook
//!
//! Owns the mutable per-session state of the keyboard-first invoice entry
//! form and exposes it to the rendering collaborator as typed snapshots.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Operator Event                                  │
//! │                                                                         │
//! │  key press / field edit / pointer click                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InvoiceForm transition (handle_key, set_field, focus_cell,            │
//! │                          add_row, remove_row)                          │
//! │       │         • synchronous, no suspension or background work        │
//! │       │         • row insertion precedes dependent focus assignment    │
//! │       │         • focus invariant re-established before returning      │
//! │       ▼                                                                 │
//! │  FormSnapshot::from(&form) ──► rendering collaborator                  │
//! │       │                                                                 │
//! │       └── bill_amount + words phrase ──► print flow                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`form`] - `InvoiceForm`: row arena + focus navigator state machine
//! - [`header`] - Printed invoice header metadata
//! - [`snapshot`] - `FormSnapshot`, the render/print output contract
//! - [`state`] - `FormState`, the shared `Arc<Mutex<_>>` wrapper

// =============================================================================
// Module Declarations
// =============================================================================

pub mod form;
pub mod header;
pub mod snapshot;
pub mod state;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use form::{InvoiceForm, NavKey};
pub use header::InvoiceHeader;
pub use snapshot::FormSnapshot;
pub use state::FormState;
