//! Login flow: delegate verification, classify provider failures.

use tracing::warn;

use crate::auth::provider::{AuthFailure, Credentials, IdentityProvider, ProviderError, VerifiedUser};

/// Shown when the provider reports the credentials themselves were wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
/// Shown for any other failure the provider classified.
pub const AUTH_FAILED: &str = "Something went wrong.";

/// Terminal outcome of a login attempt the provider classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials verified; the caller establishes the session and
    /// navigates onward.
    Verified(VerifiedUser),
    /// The attempt was rejected; show the message next to the form.
    Rejected(&'static str),
}

/// Verify credentials against the identity provider.
///
/// Classified provider failures become one of exactly two user-facing
/// messages. An unclassified fault is not a login outcome and propagates
/// unmodified.
pub async fn authenticate(
    provider: &dyn IdentityProvider,
    credentials: &Credentials,
) -> Result<AuthOutcome, ProviderError> {
    match provider.verify(credentials).await {
        Ok(user) => Ok(AuthOutcome::Verified(user)),
        Err(ProviderError::Auth(AuthFailure::CredentialsMismatch)) => {
            Ok(AuthOutcome::Rejected(INVALID_CREDENTIALS))
        }
        Err(ProviderError::Auth(failure)) => {
            warn!(?failure, "login attempt rejected by identity provider");
            Ok(AuthOutcome::Rejected(AUTH_FAILED))
        }
        Err(fault) => Err(fault),
    }
}
