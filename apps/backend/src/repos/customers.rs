//! Customer repository functions for the domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::customers_sea as customers_adapter;
use crate::adapters::customers_sea::{CustomerCreate, CustomerUpdate};
use crate::adapters::invoices_sea as invoices_adapter;
use crate::entities::customers;
use crate::entities::invoices::InvoiceStatus;
use crate::errors::domain::DomainError;

/// Customer domain model, converted from the database model when loaded
/// through repo functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            image_url: model.image_url,
        }
    }
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    dto: CustomerCreate,
) -> Result<Customer, DomainError> {
    let customer = customers_adapter::insert_customer(conn, dto).await?;
    Ok(Customer::from(customer))
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    dto: CustomerUpdate,
) -> Result<Customer, DomainError> {
    let customer = customers_adapter::update_customer(conn, dto).await?;
    Ok(Customer::from(customer))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, DomainError> {
    customers_adapter::delete_customer(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<Customer>, DomainError> {
    let customer = customers_adapter::find_by_id(conn, id).await?;
    Ok(customer.map(Customer::from))
}

/// All customers, alphabetical.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Customer>, DomainError> {
    let customers = customers_adapter::list_all(conn).await?;
    Ok(customers.into_iter().map(Customer::from).collect())
}

/// A customer row in the customer list view, carrying its invoice rollups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerWithTotals {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending_cents: i64,
    pub total_paid_cents: i64,
}

/// All customers, alphabetical, each with its invoice count and pending/paid
/// amount totals. Customers without invoices report zeros.
pub async fn list_with_invoice_totals<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<CustomerWithTotals>, DomainError> {
    let customers = customers_adapter::list_all(conn).await?;
    let rollups = invoices_adapter::totals_by_customer(conn).await?;
    Ok(assemble_totals(
        customers.into_iter().map(Customer::from).collect(),
        &rollups,
    ))
}

fn assemble_totals(
    customers: Vec<Customer>,
    rollups: &[(i64, InvoiceStatus, i64, i64)],
) -> Vec<CustomerWithTotals> {
    let mut by_customer: HashMap<i64, (i64, i64, i64)> = HashMap::new();
    for &(customer_id, status, count, amount_cents) in rollups {
        let entry = by_customer.entry(customer_id).or_default();
        entry.0 += count;
        match status {
            InvoiceStatus::Pending => entry.1 += amount_cents,
            InvoiceStatus::Paid => entry.2 += amount_cents,
        }
    }

    customers
        .into_iter()
        .map(|customer| {
            let (total_invoices, total_pending_cents, total_paid_cents) = by_customer
                .get(&customer.id)
                .copied()
                .unwrap_or_default();
            CustomerWithTotals {
                id: customer.id,
                name: customer.name,
                email: customer.email,
                image_url: customer.image_url,
                total_invoices,
                total_pending_cents,
                total_paid_cents,
            }
        })
        .collect()
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DomainError> {
    customers_adapter::count_all(conn).await
}

#[cfg(test)]
mod tests {
    use super::{assemble_totals, Customer};
    use crate::entities::invoices::InvoiceStatus;

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            image_url: format!("/customers/{id}.png"),
        }
    }

    #[test]
    fn rollups_split_by_status_and_keep_customer_order() {
        let rows = vec![
            (1, InvoiceStatus::Pending, 2, 3000),
            (1, InvoiceStatus::Paid, 1, 500),
            (2, InvoiceStatus::Paid, 3, 9900),
        ];
        let merged = assemble_totals(vec![customer(1, "Amy"), customer(2, "Ben")], &rows);

        assert_eq!(merged[0].total_invoices, 3);
        assert_eq!(merged[0].total_pending_cents, 3000);
        assert_eq!(merged[0].total_paid_cents, 500);
        assert_eq!(merged[1].total_invoices, 3);
        assert_eq!(merged[1].total_pending_cents, 0);
        assert_eq!(merged[1].total_paid_cents, 9900);
    }

    #[test]
    fn customers_without_invoices_report_zeros() {
        let merged = assemble_totals(vec![customer(7, "Cal")], &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].total_invoices, 0);
        assert_eq!(merged[0].total_pending_cents, 0);
        assert_eq!(merged[0].total_paid_cents, 0);
    }
}
