//! SeaORM adapter for invoice persistence.

use sea_orm::sea_query::Alias;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::Date;

use crate::entities::invoices::{self, InvoiceStatus};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Fields for inserting a new invoice. The identifier is store-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceCreate {
    pub customer_id: i64,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub date: Date,
}

/// Full replacement of an invoice's mutable fields. `date` is immutable
/// after insert and is deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceUpdate {
    pub id: i64,
    pub customer_id: i64,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

pub async fn insert_invoice<C: ConnectionTrait>(
    conn: &C,
    dto: InvoiceCreate,
) -> Result<invoices::Model, DomainError> {
    let invoice_active = invoices::ActiveModel {
        id: NotSet,
        customer_id: Set(dto.customer_id),
        amount_cents: Set(dto.amount_cents),
        status: Set(dto.status),
        date: Set(dto.date),
    };

    invoice_active.insert(conn).await.map_err(map_db_err)
}

pub async fn update_invoice<C: ConnectionTrait>(
    conn: &C,
    dto: InvoiceUpdate,
) -> Result<invoices::Model, DomainError> {
    let invoice_active = invoices::ActiveModel {
        id: Set(dto.id),
        customer_id: Set(dto.customer_id),
        amount_cents: Set(dto.amount_cents),
        status: Set(dto.status),
        date: NotSet,
    };

    invoice_active.update(conn).await.map_err(map_db_err)
}

/// Delete by id; reports how many rows went away. Zero is not an error.
pub async fn delete_invoice<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, DomainError> {
    let result = invoices::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(map_db_err)?;
    Ok(result.rows_affected)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<invoices::Model>, DomainError> {
    invoices::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)
}

/// All invoices, newest first.
pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<invoices::Model>, DomainError> {
    invoices::Entity::find()
        .order_by_desc(invoices::Column::Date)
        .order_by_desc(invoices::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn count_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DomainError> {
    invoices::Entity::find().count(conn).await.map_err(map_db_err)
}

/// Invoice rollups grouped by customer and status:
/// `(customer_id, status, invoice count, amount sum in minor units)`.
pub async fn totals_by_customer<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<(i64, InvoiceStatus, i64, i64)>, DomainError> {
    invoices::Entity::find()
        .select_only()
        .column(invoices::Column::CustomerId)
        .column(invoices::Column::Status)
        .column_as(invoices::Column::Id.count(), "invoice_count")
        .column_as(
            invoices::Column::AmountCents.sum().cast_as(Alias::new("bigint")),
            "amount_total",
        )
        .group_by(invoices::Column::CustomerId)
        .group_by(invoices::Column::Status)
        .into_tuple::<(i64, InvoiceStatus, i64, i64)>()
        .all(conn)
        .await
        .map_err(map_db_err)
}

/// Sum of invoice amounts (minor units) for one status.
pub async fn amount_total_for_status<C: ConnectionTrait>(
    conn: &C,
    status: InvoiceStatus,
) -> Result<i64, DomainError> {
    let total = invoices::Entity::find()
        .select_only()
        .column_as(
            invoices::Column::AmountCents.sum().cast_as(Alias::new("bigint")),
            "total",
        )
        .filter(invoices::Column::Status.eq(status))
        .into_tuple::<Option<i64>>()
        .one(conn)
        .await
        .map_err(map_db_err)?;

    Ok(total.flatten().unwrap_or(0))
}
