//! Invoice form actions and the cached invoice views.

use actix_web::{web, HttpResponse};

use crate::actions::{views, ActionOutcome};
use crate::error::AppError;
use crate::forms::FormPayload;
use crate::repos::customers as customers_repo;
use crate::repos::invoices as invoices_repo;
use crate::services::invoices as invoice_actions;
use crate::state::app_state::AppState;

/// GET /dashboard/invoices
///
/// The invoice list view, newest first, served from the view cache when warm.
async fn list_invoices(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if let Some(rendered) = state.views.get(views::INVOICES).await {
        return Ok(HttpResponse::Ok().json(rendered.as_ref()));
    }

    let invoices = invoices_repo::list(&state.db).await?;
    let rendered = serde_json::json!({ "invoices": invoices });
    let rendered = state.views.insert(views::INVOICES, rendered).await;
    Ok(HttpResponse::Ok().json(rendered.as_ref()))
}

/// GET /dashboard/invoices/create
///
/// The customer roster backing the invoice form, cached under the
/// invoice-creation view path.
async fn invoice_create_data(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if let Some(rendered) = state.views.get(views::INVOICE_CREATE).await {
        return Ok(HttpResponse::Ok().json(rendered.as_ref()));
    }

    let customers = customers_repo::list(&state.db).await?;
    let rendered = serde_json::json!({ "customers": customers });
    let rendered = state.views.insert(views::INVOICE_CREATE, rendered).await;
    Ok(HttpResponse::Ok().json(rendered.as_ref()))
}

/// POST /dashboard/invoices
async fn create_invoice(state: web::Data<AppState>, form: web::Form<FormPayload>) -> ActionOutcome {
    invoice_actions::create_invoice(&state.db, &state.views, &form.into_inner()).await
}

/// PUT /dashboard/invoices/{id}
async fn update_invoice(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<FormPayload>,
) -> ActionOutcome {
    invoice_actions::update_invoice(&state.db, &state.views, path.into_inner(), &form.into_inner())
        .await
}

/// DELETE /dashboard/invoices/{id}
async fn delete_invoice(state: web::Data<AppState>, path: web::Path<i64>) -> ActionOutcome {
    invoice_actions::delete_invoice(&state.db, &state.views, path.into_inner()).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/invoices")
            .route(web::get().to(list_invoices))
            .route(web::post().to(create_invoice)),
    );
    cfg.service(web::resource("/invoices/create").route(web::get().to(invoice_create_data)));
    cfg.service(
        web::resource("/invoices/{id}")
            .route(web::put().to(update_invoice))
            .route(web::delete().to(delete_invoice)),
    );
}
