//! SeaORM statement layer. One module per table; all `DbErr` values are
//! translated through `infra::db_errors` before leaving this layer.

pub mod customers_sea;
pub mod invoices_sea;
