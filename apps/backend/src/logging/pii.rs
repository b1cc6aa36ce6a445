//! PII-safe log rendering.
//!
//! Raw database errors and user-supplied values can carry emails or opaque
//! tokens. Everything logged through [`Redacted`] is masked first.

use std::fmt;

use lazy_regex::regex_replace_all;

/// Mask sensitive runs in a string:
/// - emails keep the first character of the local part and the full domain
/// - base64/hex-looking runs of 16+ characters become `[REDACTED_TOKEN]`
pub fn redact(input: &str) -> String {
    let masked = regex_replace_all!(
        r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b",
        input,
        |_, first: &str, domain: &str| format!("{first}***{domain}")
    );
    let masked = regex_replace_all!(r"\b[A-Za-z0-9+/]{16,}={0,2}\b", masked.as_ref(), |_| {
        "[REDACTED_TOKEN]".to_string()
    });
    masked.into_owned()
}

/// Display wrapper that applies [`redact`] at log time.
pub struct Redacted<T>(pub T);

impl<T: fmt::Display> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(&self.0.to_string()))
    }
}
