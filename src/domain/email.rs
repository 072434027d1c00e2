//! src/domain/email.rs
use serde::Serialize;

/// An address accepted by one of the validation policies.
///
/// Values only come out of a successful parse and cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email {
    local: String,
    domain: String,
}

impl Email {
    pub(crate) fn new(local: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            domain: domain.into(),
        }
    }

    /// Everything before the final `@`.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Everything after the final `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn into_parts(self) -> (String, String) {
        (self.local, self.domain)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}
