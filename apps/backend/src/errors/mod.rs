//! Error handling for the admin backend.

pub mod domain;

pub use domain::DomainError;
