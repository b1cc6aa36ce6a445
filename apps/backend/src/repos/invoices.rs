//! Invoice repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::Date;

use crate::adapters::invoices_sea as invoices_adapter;
use crate::adapters::invoices_sea::{InvoiceCreate, InvoiceUpdate};
use crate::entities::invoices::{self, InvoiceStatus};
use crate::errors::domain::DomainError;

/// Invoice domain model, converted from the database model when loaded
/// through repo functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub id: i64,
    pub customer_id: i64,
    /// Monetary amount in integer minor units.
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    /// Creation date, store-assigned at insert and immutable thereafter.
    pub date: Date,
}

impl From<invoices::Model> for Invoice {
    fn from(model: invoices::Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            amount_cents: model.amount_cents,
            status: model.status,
            date: model.date,
        }
    }
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    dto: InvoiceCreate,
) -> Result<Invoice, DomainError> {
    let invoice = invoices_adapter::insert_invoice(conn, dto).await?;
    Ok(Invoice::from(invoice))
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    dto: InvoiceUpdate,
) -> Result<Invoice, DomainError> {
    let invoice = invoices_adapter::update_invoice(conn, dto).await?;
    Ok(Invoice::from(invoice))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, DomainError> {
    invoices_adapter::delete_invoice(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<Invoice>, DomainError> {
    let invoice = invoices_adapter::find_by_id(conn, id).await?;
    Ok(invoice.map(Invoice::from))
}

/// All invoices, newest first.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Invoice>, DomainError> {
    let invoices = invoices_adapter::list_all(conn).await?;
    Ok(invoices.into_iter().map(Invoice::from).collect())
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DomainError> {
    invoices_adapter::count_all(conn).await
}

/// Sum of invoice amounts (minor units) for one status.
pub async fn amount_total_for_status<C: ConnectionTrait>(
    conn: &C,
    status: InvoiceStatus,
) -> Result<i64, DomainError> {
    invoices_adapter::amount_total_for_status(conn, status).await
}
