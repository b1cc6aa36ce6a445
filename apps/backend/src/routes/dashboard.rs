//! The dashboard summary view.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::actions::views;
use crate::entities::invoices::InvoiceStatus;
use crate::error::AppError;
use crate::repos::customers as customers_repo;
use crate::repos::invoices as invoices_repo;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct DashboardSummary {
    invoice_count: u64,
    customer_count: u64,
    paid_cents: i64,
    pending_cents: i64,
}

/// GET /dashboard
///
/// Aggregate card data, cached under the dashboard view path.
async fn summary(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if let Some(rendered) = state.views.get(views::DASHBOARD).await {
        return Ok(HttpResponse::Ok().json(rendered.as_ref()));
    }

    let summary = DashboardSummary {
        invoice_count: invoices_repo::count(&state.db).await?,
        customer_count: customers_repo::count(&state.db).await?,
        paid_cents: invoices_repo::amount_total_for_status(&state.db, InvoiceStatus::Paid).await?,
        pending_cents: invoices_repo::amount_total_for_status(&state.db, InvoiceStatus::Pending)
            .await?,
    };

    let rendered = serde_json::to_value(&summary)
        .map_err(|e| AppError::internal(format!("failed to render dashboard summary: {e}")))?;
    let rendered = state.views.insert(views::DASHBOARD, rendered).await;
    Ok(HttpResponse::Ok().json(rendered.as_ref()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(summary)));
}
