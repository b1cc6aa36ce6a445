//! Invoice mutation actions.
//!
//! Each action is one pass of the form pipeline: validate the submission,
//! apply entity transforms, persist a single atomic statement, invalidate
//! every view that embeds invoices, then navigate. Validation and storage
//! failures terminate early with form feedback instead; no invalidation and
//! no navigation happen on those paths.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::actions::{ActionOutcome, EntityKind, Operation};
use crate::adapters::invoices_sea::{InvoiceCreate, InvoiceUpdate};
use crate::cache::views::ViewCache;
use crate::forms::{FormPayload, InvoicePayload};
use crate::repos::invoices as invoices_repo;

pub async fn create_invoice(
    conn: &impl ConnectionTrait,
    views: &ViewCache,
    form: &FormPayload,
) -> ActionOutcome {
    let payload = match InvoicePayload::parse(form) {
        Ok(payload) => payload,
        Err(errors) => return ActionOutcome::invalid(Operation::Create, EntityKind::Invoice, errors),
    };

    let dto = InvoiceCreate {
        customer_id: payload.customer_id,
        amount_cents: payload.amount_cents,
        status: payload.status,
        date: OffsetDateTime::now_utc().date(),
    };

    match invoices_repo::create(conn, dto).await {
        Ok(invoice) => {
            info!(
                invoice_id = invoice.id,
                customer_id = invoice.customer_id,
                "invoice created"
            );
            views
                .invalidate_views(EntityKind::Invoice.affected_views())
                .await;
            ActionOutcome::Navigate(EntityKind::Invoice.list_view())
        }
        Err(err) => {
            warn!(error = %err, "invoice create failed");
            ActionOutcome::storage_failure(Operation::Create, EntityKind::Invoice)
        }
    }
}

/// The identifier is bound by the caller before invocation; it never comes
/// from the submission.
pub async fn update_invoice(
    conn: &impl ConnectionTrait,
    views: &ViewCache,
    id: i64,
    form: &FormPayload,
) -> ActionOutcome {
    let payload = match InvoicePayload::parse(form) {
        Ok(payload) => payload,
        Err(errors) => return ActionOutcome::invalid(Operation::Update, EntityKind::Invoice, errors),
    };

    let dto = InvoiceUpdate {
        id,
        customer_id: payload.customer_id,
        amount_cents: payload.amount_cents,
        status: payload.status,
    };

    match invoices_repo::update(conn, dto).await {
        Ok(invoice) => {
            info!(invoice_id = invoice.id, "invoice updated");
            views
                .invalidate_views(EntityKind::Invoice.affected_views())
                .await;
            ActionOutcome::Navigate(EntityKind::Invoice.list_view())
        }
        Err(err) => {
            warn!(error = %err, invoice_id = id, "invoice update failed");
            ActionOutcome::storage_failure(Operation::Update, EntityKind::Invoice)
        }
    }
}

/// Delete needs no validation: the identifier is already bound. It reports a
/// message instead of navigating, since deletion happens in place.
pub async fn delete_invoice(
    conn: &impl ConnectionTrait,
    views: &ViewCache,
    id: i64,
) -> ActionOutcome {
    match invoices_repo::delete(conn, id).await {
        Ok(rows_affected) => {
            info!(invoice_id = id, rows_affected, "invoice deleted");
            views
                .invalidate_views(EntityKind::Invoice.affected_views())
                .await;
            ActionOutcome::deleted(EntityKind::Invoice)
        }
        Err(err) => {
            warn!(error = %err, invoice_id = id, "invoice delete failed");
            ActionOutcome::storage_failure(Operation::Delete, EntityKind::Invoice)
        }
    }
}
