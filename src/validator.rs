//! src/validator.rs
use crate::configuration::ValidatorSettings;
use crate::domain::Email;
use crate::validate::{parse_common, parse_rfc5322, parse_simple_with, Error, IdnProfile, Policy};

/// A policy bound to its IDN handling, ready to check addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator {
    policy: Policy,
    idn_profile: IdnProfile,
}

impl EmailValidator {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            idn_profile: IdnProfile::default(),
        }
    }

    /// Only the simple policy converts to ASCII; other policies ignore this.
    pub fn with_idn_profile(mut self, idn_profile: IdnProfile) -> Self {
        self.idn_profile = idn_profile;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn idn_profile(&self) -> IdnProfile {
        self.idn_profile
    }

    #[tracing::instrument(
        name = "Validating email address",
        skip(self),
        fields(policy = %self.policy)
    )]
    pub fn parse(&self, email: &str) -> Result<Email, Error> {
        let result = match self.policy {
            Policy::Rfc5322 => parse_rfc5322(email),
            Policy::Common => parse_common(email),
            Policy::Simple => parse_simple_with(email, self.idn_profile),
        };

        if let Err(e) = &result {
            tracing::debug!(kind = %e.kind(), "Rejected email address: {}", e);
        }

        result
    }
}

impl From<ValidatorSettings> for EmailValidator {
    fn from(settings: ValidatorSettings) -> Self {
        Self::new(settings.policy).with_idn_profile(settings.idn_profile)
    }
}
