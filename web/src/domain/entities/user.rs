//! Authenticated user identity
//!
//! Users live in the external identity provider; the service only keeps the
//! subject string the provider hands us.

use serde::{Deserialize, Serialize};

/// Subject identifier of a user, as asserted by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(subject: &str) -> Self {
        Self(subject.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller of a request, injected into request extensions by the
/// login-required middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
}
