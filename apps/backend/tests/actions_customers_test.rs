//! Mutation-pipeline tests for customer actions against a mock database.

use backend::actions::{views, ActionOutcome};
use backend::cache::views::ViewCache;
use backend::entities::customers;
use backend::forms::FormPayload;
use backend::services::customers as customer_actions;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

fn form(entries: &[(&str, &str)]) -> FormPayload {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn valid_customer_form() -> FormPayload {
    form(&[
        ("name", "Amy Burns"),
        ("email", "amy@example.com"),
        ("picture", "/customers/amy-burns.png"),
    ])
}

fn inserted_customer() -> customers::Model {
    customers::Model {
        id: 11,
        name: "Amy Burns".to_string(),
        email: "amy@example.com".to_string(),
        image_url: "/customers/amy-burns.png".to_string(),
    }
}

async fn warm_cache() -> ViewCache {
    let cache = ViewCache::new();
    for path in [
        views::DASHBOARD,
        views::INVOICES,
        views::INVOICE_CREATE,
        views::CUSTOMERS,
    ] {
        cache.insert(path, serde_json::json!({ "warm": path })).await;
    }
    cache
}

#[tokio::test]
async fn create_navigates_and_invalidates_customer_views() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[inserted_customer()]])
        .into_connection();
    let cache = warm_cache().await;

    let outcome = customer_actions::create_customer(&db, &cache, &valid_customer_form()).await;

    assert_eq!(outcome, ActionOutcome::Navigate(views::CUSTOMERS));
    assert!(!cache.contains(views::CUSTOMERS));
    assert!(!cache.contains(views::DASHBOARD));
    // The invoice form lists customers, so its roster goes stale too.
    assert!(!cache.contains(views::INVOICE_CREATE));
    // Invoices themselves were not mutated.
    assert!(cache.contains(views::INVOICES));
}

#[tokio::test]
async fn create_with_a_malformed_email_persists_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let cache = warm_cache().await;

    let outcome = customer_actions::create_customer(
        &db,
        &cache,
        &form(&[
            ("name", "Amy Burns"),
            ("email", "not-an-email"),
            ("picture", "/p.png"),
        ]),
    )
    .await;

    match outcome {
        ActionOutcome::Errors { errors, message } => {
            assert_eq!(message, "Missing Fields. Failed to Create Customer.");
            assert_eq!(errors.messages("email"), ["Please enter customer email."]);
            assert!(errors.messages("name").is_empty());
        }
        other => panic!("expected field errors, got {other:?}"),
    }

    assert!(db.into_transaction_log().is_empty(), "no statement may run");
    assert!(cache.contains(views::CUSTOMERS));
}

#[tokio::test]
async fn duplicate_email_surfaces_as_the_generic_storage_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom(
            "duplicate key value violates unique constraint \"customers_email_key\"".to_string(),
        )])
        .into_connection();
    let cache = warm_cache().await;

    let outcome = customer_actions::create_customer(&db, &cache, &valid_customer_form()).await;

    assert_eq!(
        outcome,
        ActionOutcome::Message("Database Error: Failed to Create Customer.".to_string())
    );
    assert!(cache.contains(views::CUSTOMERS));
}

#[tokio::test]
async fn update_navigates_on_success() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[customers::Model {
            name: "Amy B.".to_string(),
            ..inserted_customer()
        }]])
        .into_connection();
    let cache = warm_cache().await;

    let outcome = customer_actions::update_customer(
        &db,
        &cache,
        11,
        &form(&[
            ("name", "Amy B."),
            ("email", "amy@example.com"),
            ("picture", "/customers/amy-burns.png"),
        ]),
    )
    .await;

    assert_eq!(outcome, ActionOutcome::Navigate(views::CUSTOMERS));
    assert!(!cache.contains(views::INVOICE_CREATE));
}

#[tokio::test]
async fn delete_reports_a_message_and_invalidates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let cache = warm_cache().await;

    let outcome = customer_actions::delete_customer(&db, &cache, 11).await;

    assert_eq!(outcome, ActionOutcome::Message("Deleted Customer.".to_string()));
    assert!(!cache.contains(views::CUSTOMERS));
    assert!(cache.contains(views::INVOICES));
}
