use actix_web::web;

pub mod auth;
pub mod board;
pub mod customers;
pub mod dashboard;
pub mod invoices;

/// Everything under `/dashboard`. Mounted behind `SessionGuard` in
/// production; tests may mount it bare to exercise endpoint behavior
/// directly.
pub fn dashboard_scope(cfg: &mut web::ServiceConfig) {
    dashboard::configure_routes(cfg);
    invoices::configure_routes(cfg);
    customers::configure_routes(cfg);
    board::configure_routes(cfg);
}

/// Configure application routes for tests and non-HttpServer contexts.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/login").configure(auth::configure_routes));
    cfg.service(web::scope("/dashboard").configure(dashboard_scope));
}
