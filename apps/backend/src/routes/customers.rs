//! Customer form actions and the cached customer view.

use actix_web::{web, HttpResponse};

use crate::actions::{views, ActionOutcome};
use crate::error::AppError;
use crate::forms::FormPayload;
use crate::repos::customers as customers_repo;
use crate::services::customers as customer_actions;
use crate::state::app_state::AppState;

/// GET /dashboard/customers
///
/// The customer list view, alphabetical, each row carrying its invoice
/// rollups. Served from the view cache when warm; invoice mutations
/// invalidate it because of those rollups.
async fn list_customers(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if let Some(rendered) = state.views.get(views::CUSTOMERS).await {
        return Ok(HttpResponse::Ok().json(rendered.as_ref()));
    }

    let customers = customers_repo::list_with_invoice_totals(&state.db).await?;
    let rendered = serde_json::json!({ "customers": customers });
    let rendered = state.views.insert(views::CUSTOMERS, rendered).await;
    Ok(HttpResponse::Ok().json(rendered.as_ref()))
}

/// POST /dashboard/customers
async fn create_customer(
    state: web::Data<AppState>,
    form: web::Form<FormPayload>,
) -> ActionOutcome {
    customer_actions::create_customer(&state.db, &state.views, &form.into_inner()).await
}

/// PUT /dashboard/customers/{id}
async fn update_customer(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<FormPayload>,
) -> ActionOutcome {
    customer_actions::update_customer(&state.db, &state.views, path.into_inner(), &form.into_inner())
        .await
}

/// DELETE /dashboard/customers/{id}
async fn delete_customer(state: web::Data<AppState>, path: web::Path<i64>) -> ActionOutcome {
    customer_actions::delete_customer(&state.db, &state.views, path.into_inner()).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers")
            .route(web::get().to(list_customers))
            .route(web::post().to(create_customer)),
    );
    cfg.service(
        web::resource("/customers/{id}")
            .route(web::put().to(update_customer))
            .route(web::delete().to(delete_customer)),
    );
}
