use actix_cors::Cors;
use actix_web::http::header;

/// CORS for the dashboard frontend.
///
/// With `CORS_ORIGIN` set, only that origin is allowed and credentials are
/// supported; otherwise everything is permitted (local development).
pub fn cors_middleware() -> Cors {
    match std::env::var("CORS_ORIGIN") {
        Ok(origin) => Cors::default()
            .allowed_origin(&origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600),
        Err(_) => Cors::permissive(),
    }
}
