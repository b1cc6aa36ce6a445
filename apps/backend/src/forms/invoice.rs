use crate::entities::invoices::InvoiceStatus;

use super::{FieldErrors, FormPayload};

/// Client-supplied invoice fields, validated and coerced. The identifier and
/// creation date are store-assigned and never read from the submission, for
/// creates and updates alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoicePayload {
    pub customer_id: i64,
    /// Amount scaled to integer minor units.
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

impl InvoicePayload {
    /// Validate a raw submission. Every rule runs, so all violated fields
    /// are reported together.
    pub fn parse(form: &FormPayload) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = super::record_id(form, "customerId", "Please select a customer.", &mut errors);
        let amount = super::positive_amount(
            form,
            "amount",
            "Please enter an amount greater than $0.",
            &mut errors,
        );
        let status =
            super::invoice_status(form, "status", "Please select an invoice status.", &mut errors);

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(Self {
                customer_id,
                amount_cents: to_cents(amount),
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Scale a dollar amount to integer minor units.
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
