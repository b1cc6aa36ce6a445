use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::provider::ProviderError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Application-level error rendered as `application/problem+json`.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct AppError {
    kind: ErrorKind,
    trace_id: Option<String>,
}

#[derive(Debug, Error)]
enum ErrorKind {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Unauthorized: {detail}")]
    Unauthorized {
        code: &'static str,
        detail: &'static str,
    },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            trace_id: None,
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::new(ErrorKind::Validation { code, detail })
    }

    pub fn bad_request(code: &'static str, detail: String) -> Self {
        Self::new(ErrorKind::BadRequest { code, detail })
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::new(ErrorKind::NotFound { code, detail })
    }

    pub fn unauthorized(code: &'static str, detail: &'static str) -> Self {
        Self::new(ErrorKind::Unauthorized { code, detail })
    }

    pub fn conflict(code: &'static str, detail: String) -> Self {
        Self::new(ErrorKind::Conflict { code, detail })
    }

    pub fn db(detail: String) -> Self {
        Self::new(ErrorKind::Db { detail })
    }

    pub fn db_unavailable(detail: String) -> Self {
        Self::new(ErrorKind::DbUnavailable { detail })
    }

    pub fn internal(detail: String) -> Self {
        Self::new(ErrorKind::Internal { detail })
    }

    pub fn config(detail: String) -> Self {
        Self::new(ErrorKind::Config { detail })
    }

    /// Attach the request id so error responses can be correlated with logs.
    pub fn with_trace_id(mut self, trace_id: Option<String>) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match &self.kind {
            ErrorKind::Validation { code, .. } => code,
            ErrorKind::BadRequest { code, .. } => code,
            ErrorKind::NotFound { code, .. } => code,
            ErrorKind::Unauthorized { code, .. } => code,
            ErrorKind::Conflict { code, .. } => code,
            ErrorKind::Db { .. } => "DB_ERROR",
            ErrorKind::DbUnavailable { .. } => "DB_UNAVAILABLE",
            ErrorKind::Internal { .. } => "INTERNAL",
            ErrorKind::Config { .. } => "CONFIG_ERROR",
        }
    }

    fn detail(&self) -> String {
        match &self.kind {
            ErrorKind::Validation { detail, .. } => detail.clone(),
            ErrorKind::BadRequest { detail, .. } => detail.clone(),
            ErrorKind::NotFound { detail, .. } => detail.clone(),
            ErrorKind::Unauthorized { detail, .. } => (*detail).to_string(),
            ErrorKind::Conflict { detail, .. } => detail.clone(),
            ErrorKind::Db { detail } => detail.clone(),
            ErrorKind::DbUnavailable { detail } => detail.clone(),
            ErrorKind::Internal { detail } => detail.clone(),
            ErrorKind::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match &self.kind {
            ErrorKind::Validation { .. } | ErrorKind::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ErrorKind::Conflict { .. } => StatusCode::CONFLICT,
            ErrorKind::Db { .. }
            | ErrorKind::DbUnavailable { .. }
            | ErrorKind::Internal { .. }
            | ErrorKind::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::invalid("VALIDATION", detail),
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Invoice => "INVOICE_NOT_FOUND",
                    NotFoundKind::Customer => "CUSTOMER_NOT_FOUND",
                    _ => "NOT_FOUND",
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::UniqueEmail => "UNIQUE_EMAIL",
                    _ => "CONFLICT",
                };
                AppError::conflict(code, detail)
            }
            DomainError::Infra(InfraErrorKind::DbUnavailable, detail) => {
                AppError::db_unavailable(detail)
            }
            DomainError::Infra(_, detail) => AppError::db(detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::internal(format!("db error: {e}"))
    }
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        // The fault itself goes to the log; the response stays generic.
        tracing::error!(error = %e, "identity provider fault");
        AppError::internal("identity provider fault".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();

        let problem_details = ProblemDetails {
            type_: format!("https://admin.acme.dev/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: self.trace_id.clone().unwrap_or_default(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use actix_web::http::StatusCode;

    #[test]
    fn status_codes_follow_the_error_tier() {
        assert_eq!(
            AppError::invalid("X", "x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("X", "x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::unauthorized("X", "x").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::db("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn humanize_code_title_cases_each_word() {
        assert_eq!(AppError::humanize_code("DB_UNAVAILABLE"), "Db Unavailable");
        assert_eq!(AppError::humanize_code("INTERNAL"), "Internal");
    }
}
