//! The shared contract for form mutations.
//!
//! Every create/update/delete action runs the same pipeline: validate the
//! submission, persist one atomic statement, invalidate the cached views the
//! entity appears in, then navigate. The types here fix the protocol: the
//! terminal outcome, the user-facing messages, and the statically known set
//! of views each entity invalidates. The per-entity services in
//! `crate::services` only differ in schema and statement.

use std::fmt;

use actix_web::body::BoxBody;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::forms::FieldErrors;

/// Logical view paths: identifiers for renderable pages whose cached output
/// depends on entity data. Also the navigation targets.
pub mod views {
    pub const DASHBOARD: &str = "/dashboard";
    pub const INVOICES: &str = "/dashboard/invoices";
    pub const INVOICE_CREATE: &str = "/dashboard/invoices/create";
    pub const CUSTOMERS: &str = "/dashboard/customers";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "Create",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Invoice,
    Customer,
}

impl EntityKind {
    /// Every view whose cached rendering embeds this entity type: the
    /// entity's own list, the dashboard aggregates, and (for customers)
    /// the invoice-creation view, which lists customers.
    pub const fn affected_views(self) -> &'static [&'static str] {
        match self {
            EntityKind::Invoice => &[views::INVOICES, views::CUSTOMERS, views::DASHBOARD],
            EntityKind::Customer => &[views::CUSTOMERS, views::DASHBOARD, views::INVOICE_CREATE],
        }
    }

    /// The entity's list view, target of the success navigation.
    pub const fn list_view(self) -> &'static str {
        match self {
            EntityKind::Invoice => views::INVOICES,
            EntityKind::Customer => views::CUSTOMERS,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Invoice => "Invoice",
            EntityKind::Customer => "Customer",
        })
    }
}

/// Terminal outcome of a mutation action.
///
/// A success path never hands data back to the caller: it ends with a
/// navigation directive. Everything else is feedback for the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Field-level validation feedback. Nothing was persisted.
    Errors {
        errors: FieldErrors,
        message: String,
    },
    /// Operation-level feedback without navigation: delete results and
    /// storage failures.
    Message(String),
    /// Redirect the user to a view. Emitted only after persistence succeeded
    /// and every affected view was invalidated.
    Navigate(&'static str),
}

impl ActionOutcome {
    pub fn invalid(op: Operation, entity: EntityKind, errors: FieldErrors) -> Self {
        ActionOutcome::Errors {
            errors,
            message: format!("Missing Fields. Failed to {op} {entity}."),
        }
    }

    /// The generic storage-failure message; the underlying fault stays in
    /// the logs.
    pub fn storage_failure(op: Operation, entity: EntityKind) -> Self {
        ActionOutcome::Message(format!("Database Error: Failed to {op} {entity}."))
    }

    pub fn deleted(entity: EntityKind) -> Self {
        ActionOutcome::Message(format!("Deleted {entity}."))
    }
}

#[derive(Serialize)]
struct ActionBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl Responder for ActionOutcome {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            ActionOutcome::Errors { errors, message } => {
                HttpResponse::UnprocessableEntity().json(ActionBody {
                    message: &message,
                    errors: Some(&errors),
                })
            }
            ActionOutcome::Message(message) => HttpResponse::Ok().json(ActionBody {
                message: &message,
                errors: None,
            }),
            ActionOutcome::Navigate(path) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, path))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{views, ActionOutcome, EntityKind, Operation};
    use crate::forms::FieldErrors;

    #[test]
    fn user_messages_name_the_operation_and_entity() {
        let outcome =
            ActionOutcome::invalid(Operation::Create, EntityKind::Invoice, FieldErrors::new());
        match outcome {
            ActionOutcome::Errors { message, .. } => {
                assert_eq!(message, "Missing Fields. Failed to Create Invoice.");
            }
            other => panic!("expected Errors, got {other:?}"),
        }

        assert_eq!(
            ActionOutcome::storage_failure(Operation::Update, EntityKind::Customer),
            ActionOutcome::Message("Database Error: Failed to Update Customer.".to_string())
        );
        assert_eq!(
            ActionOutcome::deleted(EntityKind::Invoice),
            ActionOutcome::Message("Deleted Invoice.".to_string())
        );
    }

    #[test]
    fn affected_views_are_static_per_entity() {
        assert_eq!(
            EntityKind::Invoice.affected_views(),
            &[views::INVOICES, views::CUSTOMERS, views::DASHBOARD]
        );
        assert_eq!(
            EntityKind::Customer.affected_views(),
            &[views::CUSTOMERS, views::DASHBOARD, views::INVOICE_CREATE]
        );
        assert_eq!(EntityKind::Invoice.list_view(), views::INVOICES);
        assert_eq!(EntityKind::Customer.list_view(), views::CUSTOMERS);
    }
}
