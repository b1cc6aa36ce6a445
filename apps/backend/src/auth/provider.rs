//! External identity provider boundary.
//!
//! Credential checking is delegated wholesale. This module fixes only the
//! classification contract: a verification attempt succeeds, fails in a way
//! the provider itself classified, or faults. Faults are not login outcomes
//! and must propagate.

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw login credentials as submitted.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keep the password out of debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity confirmed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifiedUser {
    /// Stable subject identifier.
    pub subject: String,
    pub email: String,
}

/// Failure modes the provider itself distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthFailure {
    /// The credentials were well-formed but wrong.
    CredentialsMismatch,
    /// The provider refused the attempt for some other stated reason.
    Rejected,
    /// The provider answered but could not process the attempt.
    Unavailable,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// A failure the provider classified; safe to map to user feedback.
    #[error("authentication failed: {0:?}")]
    Auth(AuthFailure),
    /// Anything else: transport faults, malformed responses. Not a login
    /// outcome; propagates to the runtime unmodified.
    #[error("identity provider fault: {0}")]
    Fault(Box<dyn StdError + Send + Sync>),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> Result<VerifiedUser, ProviderError>;
}

/// Identity provider reached over HTTP.
///
/// The verifier endpoint receives the credentials as JSON and answers 2xx
/// with the verified identity, 401/403 for a credentials mismatch, or any
/// other status for a classified refusal. A 2xx with an unreadable body is a
/// fault, not a classified failure.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    verify_url: String,
}

impl HttpIdentityProvider {
    pub fn new(verify_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            verify_url,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn verify(&self, credentials: &Credentials) -> Result<VerifiedUser, ProviderError> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| ProviderError::Fault(Box::new(e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<VerifiedUser>()
                .await
                .map_err(|e| ProviderError::Fault(Box::new(e)));
        }

        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(ProviderError::Auth(AuthFailure::CredentialsMismatch))
            }
            s if s.is_client_error() => Err(ProviderError::Auth(AuthFailure::Rejected)),
            _ => Err(ProviderError::Auth(AuthFailure::Unavailable)),
        }
    }
}
