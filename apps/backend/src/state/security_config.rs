use jsonwebtoken::Algorithm;

/// Security configuration: session-token secret and signing algorithm.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            jwt_secret: jwt_secret.to_vec(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Fixed secret for tests.
    pub fn for_tests() -> Self {
        Self::new(b"test-session-secret-not-for-production")
    }
}
