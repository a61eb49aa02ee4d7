//! # Form State
//!
//! Shared wrapper around the session's [`InvoiceForm`].
//!
//! ## Thread Safety
//! The form is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple command handlers may access/modify the form
//! 2. Only one handler should modify the form at a time
//! 3. The host shell may dispatch handlers from more than one thread
//!
//! Within one operator event there is exactly one writer, so a plain Mutex
//! (not RwLock) is enough: form operations are quick and most of them
//! mutate state anyway.

use std::sync::{Arc, Mutex};

use crate::form::InvoiceForm;

/// Host-managed form state.
#[derive(Debug, Default)]
pub struct FormState {
    form: Arc<Mutex<InvoiceForm>>,
}

impl FormState {
    /// Creates state holding a fresh form (one blank row, no focus).
    pub fn new() -> Self {
        FormState {
            form: Arc::new(Mutex::new(InvoiceForm::new())),
        }
    }

    /// Executes a function with read access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snap = state.with_form(|form| FormSnapshot::from(form));
    /// ```
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceForm) -> R,
    {
        let form = self.form.lock().expect("Form mutex poisoned");
        f(&form)
    }

    /// Executes a function with write access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_form_mut(|form| form.handle_key(NavKey::Advance));
    /// ```
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceForm) -> R,
    {
        let mut form = self.form.lock().expect("Form mutex poisoned");
        f(&mut form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::NavKey;
    use billbook_core::Field;

    #[test]
    fn test_state_round_trip() {
        let state = FormState::new();
        state.with_form_mut(|form| {
            form.handle_key(NavKey::Advance);
        });
        let focus = state.with_form(|form| form.focus());
        assert_eq!(focus.unwrap().field, Field::first());
    }
}
