//! Form-boundary validation: flat text submissions in, typed payloads out.
//!
//! A submission is an untyped `field -> text` mapping. Each entity defines a
//! payload type whose `parse` runs every field rule (no short-circuit) so a
//! single pass reports every violated field. Coercion failures (a
//! non-numeric amount, an unknown status) are field errors, never faults.
//! Downstream code only ever sees the validated, coerced payload.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::entities::invoices::InvoiceStatus;

pub mod customer;
pub mod invoice;

pub use customer::CustomerPayload;
pub use invoice::InvoicePayload;

/// Raw form submission: a flat mapping of field name to text.
pub type FormPayload = HashMap<String, String>;

/// Field-level validation failures, ordered by field name. A field keeps
/// every message its rules produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Trimmed field text; absent and blank submissions are indistinguishable.
fn raw<'a>(form: &'a FormPayload, field: &str) -> Option<&'a str> {
    form.get(field).map(|s| s.trim()).filter(|s| !s.is_empty())
}

pub(crate) fn non_empty(
    form: &FormPayload,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match raw(form, field) {
        Some(value) => Some(value.to_string()),
        None => {
            errors.push(field, message);
            None
        }
    }
}

pub(crate) fn email(
    form: &FormPayload,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let Some(value) = raw(form, field) else {
        errors.push(field, message);
        return None;
    };
    if lazy_regex::regex_is_match!(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$", value) {
        Some(value.to_string())
    } else {
        errors.push(field, message);
        None
    }
}

/// Reference to another record, supplied by the client as text.
pub(crate) fn record_id(
    form: &FormPayload,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<i64> {
    let Some(value) = raw(form, field) else {
        errors.push(field, message);
        return None;
    };
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push(field, message);
            None
        }
    }
}

/// Positive monetary amount coerced from text.
pub(crate) fn positive_amount(
    form: &FormPayload,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let Some(value) = raw(form, field) else {
        errors.push(field, message);
        return None;
    };
    match value.parse::<f64>() {
        Ok(amount) if amount > 0.0 && amount.is_finite() => Some(amount),
        _ => {
            errors.push(field, message);
            None
        }
    }
}

pub(crate) fn invoice_status(
    form: &FormPayload,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<InvoiceStatus> {
    match raw(form, field) {
        Some("pending") => Some(InvoiceStatus::Pending),
        Some("paid") => Some(InvoiceStatus::Paid),
        _ => {
            errors.push(field, message);
            None
        }
    }
}
