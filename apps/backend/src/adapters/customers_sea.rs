//! SeaORM adapter for customer persistence.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::entities::customers;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Fields for inserting a new customer. The identifier is store-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Full replacement of a customer's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

pub async fn insert_customer<C: ConnectionTrait>(
    conn: &C,
    dto: CustomerCreate,
) -> Result<customers::Model, DomainError> {
    let customer_active = customers::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        email: Set(dto.email),
        image_url: Set(dto.image_url),
    };

    customer_active.insert(conn).await.map_err(map_db_err)
}

pub async fn update_customer<C: ConnectionTrait>(
    conn: &C,
    dto: CustomerUpdate,
) -> Result<customers::Model, DomainError> {
    let customer_active = customers::ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        email: Set(dto.email),
        image_url: Set(dto.image_url),
    };

    customer_active.update(conn).await.map_err(map_db_err)
}

/// Delete by id; reports how many rows went away. Zero is not an error.
pub async fn delete_customer<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, DomainError> {
    let result = customers::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(map_db_err)?;
    Ok(result.rows_affected)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<customers::Model>, DomainError> {
    customers::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)
}

/// All customers, alphabetical.
pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<customers::Model>, DomainError> {
    customers::Entity::find()
        .order_by_asc(customers::Column::Name)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn count_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DomainError> {
    customers::Entity::find().count(conn).await.map_err(map_db_err)
}
