//! Provider-failure classification for the login flow.

use async_trait::async_trait;
use backend::auth::provider::{
    AuthFailure, Credentials, IdentityProvider, ProviderError, VerifiedUser,
};
use backend::services::auth::{authenticate, AuthOutcome, AUTH_FAILED, INVALID_CREDENTIALS};

#[derive(Clone, Copy)]
enum Mode {
    Accept,
    Mismatch,
    Reject,
    Unavailable,
    Fault,
}

struct FakeProvider(Mode);

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn verify(&self, credentials: &Credentials) -> Result<VerifiedUser, ProviderError> {
        match self.0 {
            Mode::Accept => Ok(VerifiedUser {
                subject: "user-1".to_string(),
                email: credentials.email.clone(),
            }),
            Mode::Mismatch => Err(ProviderError::Auth(AuthFailure::CredentialsMismatch)),
            Mode::Reject => Err(ProviderError::Auth(AuthFailure::Rejected)),
            Mode::Unavailable => Err(ProviderError::Auth(AuthFailure::Unavailable)),
            Mode::Fault => Err(ProviderError::Fault("identity provider exploded".into())),
        }
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "amy@example.com".to_string(),
        password: "pw".to_string(),
    }
}

#[tokio::test]
async fn verified_credentials_come_back_as_a_verified_outcome() {
    let outcome = authenticate(&FakeProvider(Mode::Accept), &credentials())
        .await
        .expect("classified outcome");

    assert_eq!(
        outcome,
        AuthOutcome::Verified(VerifiedUser {
            subject: "user-1".to_string(),
            email: "amy@example.com".to_string(),
        })
    );
}

#[tokio::test]
async fn a_credentials_mismatch_yields_exactly_invalid_credentials() {
    let outcome = authenticate(&FakeProvider(Mode::Mismatch), &credentials())
        .await
        .expect("classified outcome");

    assert_eq!(outcome, AuthOutcome::Rejected(INVALID_CREDENTIALS));
    assert_eq!(INVALID_CREDENTIALS, "Invalid credentials.");
}

#[tokio::test]
async fn any_other_classified_failure_yields_something_went_wrong() {
    for mode in [Mode::Reject, Mode::Unavailable] {
        let outcome = authenticate(&FakeProvider(mode), &credentials())
            .await
            .expect("classified outcome");
        assert_eq!(outcome, AuthOutcome::Rejected(AUTH_FAILED));
    }
    assert_eq!(AUTH_FAILED, "Something went wrong.");
}

#[tokio::test]
async fn an_unclassified_fault_propagates_instead_of_becoming_a_message() {
    let result = authenticate(&FakeProvider(Mode::Fault), &credentials()).await;

    match result {
        Err(ProviderError::Fault(fault)) => {
            assert_eq!(fault.to_string(), "identity provider exploded");
        }
        other => panic!("fault must propagate unmodified, got {other:?}"),
    }
}
