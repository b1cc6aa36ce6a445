//! Customer mutation actions.
//!
//! Same pipeline as the invoice actions; customers additionally invalidate
//! the invoice-creation view, which lists them.

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::actions::{ActionOutcome, EntityKind, Operation};
use crate::adapters::customers_sea::{CustomerCreate, CustomerUpdate};
use crate::cache::views::ViewCache;
use crate::forms::{CustomerPayload, FormPayload};
use crate::logging::pii::Redacted;
use crate::repos::customers as customers_repo;

pub async fn create_customer(
    conn: &impl ConnectionTrait,
    views: &ViewCache,
    form: &FormPayload,
) -> ActionOutcome {
    let payload = match CustomerPayload::parse(form) {
        Ok(payload) => payload,
        Err(errors) => {
            return ActionOutcome::invalid(Operation::Create, EntityKind::Customer, errors)
        }
    };

    let dto = CustomerCreate {
        name: payload.name,
        email: payload.email,
        image_url: payload.picture,
    };

    match customers_repo::create(conn, dto).await {
        Ok(customer) => {
            info!(
                customer_id = customer.id,
                email = %Redacted(&customer.email),
                "customer created"
            );
            views
                .invalidate_views(EntityKind::Customer.affected_views())
                .await;
            ActionOutcome::Navigate(EntityKind::Customer.list_view())
        }
        Err(err) => {
            warn!(error = %err, "customer create failed");
            ActionOutcome::storage_failure(Operation::Create, EntityKind::Customer)
        }
    }
}

/// The identifier is bound by the caller before invocation; it never comes
/// from the submission.
pub async fn update_customer(
    conn: &impl ConnectionTrait,
    views: &ViewCache,
    id: i64,
    form: &FormPayload,
) -> ActionOutcome {
    let payload = match CustomerPayload::parse(form) {
        Ok(payload) => payload,
        Err(errors) => {
            return ActionOutcome::invalid(Operation::Update, EntityKind::Customer, errors)
        }
    };

    let dto = CustomerUpdate {
        id,
        name: payload.name,
        email: payload.email,
        image_url: payload.picture,
    };

    match customers_repo::update(conn, dto).await {
        Ok(customer) => {
            info!(customer_id = customer.id, "customer updated");
            views
                .invalidate_views(EntityKind::Customer.affected_views())
                .await;
            ActionOutcome::Navigate(EntityKind::Customer.list_view())
        }
        Err(err) => {
            warn!(error = %err, customer_id = id, "customer update failed");
            ActionOutcome::storage_failure(Operation::Update, EntityKind::Customer)
        }
    }
}

/// Delete needs no validation: the identifier is already bound. It reports a
/// message instead of navigating, since deletion happens in place.
pub async fn delete_customer(
    conn: &impl ConnectionTrait,
    views: &ViewCache,
    id: i64,
) -> ActionOutcome {
    match customers_repo::delete(conn, id).await {
        Ok(rows_affected) => {
            info!(customer_id = id, rows_affected, "customer deleted");
            views
                .invalidate_views(EntityKind::Customer.affected_views())
                .await;
            ActionOutcome::deleted(EntityKind::Customer)
        }
        Err(err) => {
            warn!(error = %err, customer_id = id, "customer delete failed");
            ActionOutcome::storage_failure(Operation::Delete, EntityKind::Customer)
        }
    }
}
