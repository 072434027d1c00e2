//! src/validate/policy.rs
use super::error::{Error, Part};
use super::idn::{self, IdnProfile};
use super::length::{email_is_too_long, local_part_is_too_long};
use super::patterns::{COMMON_REGEX, RFC5322_REGEX, SIMPLE_REGEX};
use crate::domain::Email;
use serde::Deserialize;

/// The conformance policy an address is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    #[default]
    #[serde(alias = "strict")]
    Rfc5322,
    Common,
    Simple,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Rfc5322 => "rfc5322",
            Policy::Common => "common",
            Policy::Simple => "simple",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rfc5322" | "strict" => Ok(Policy::Rfc5322),
            "common" => Ok(Policy::Common),
            "simple" => Ok(Policy::Simple),
            other => Err(format!(
                "{} is not a supported policy. Use either `rfc5322`, `common` or `simple`.",
                other
            )),
        }
    }
}

/// Splits on the last `@`, so separators inside a quoted local part are
/// kept on the local side. Input without any `@` is all local part.
fn split(email: &str) -> (&str, &str) {
    match email.rfind('@') {
        Some(i) => (&email[..i], &email[i + 1..]),
        None => (email, ""),
    }
}

/// Checks `email` against the RFC 5322 addr-spec grammar.
pub fn parse_rfc5322(email: &str) -> Result<Email, Error> {
    if email_is_too_long(email) {
        return Err(Error::TooLong);
    }

    if !RFC5322_REGEX.is_match(email) {
        return Err(Error::GrammarMismatch);
    }

    let (local, domain) = split(email);
    if local_part_is_too_long(local) {
        return Err(Error::LocalTooLong);
    }

    Ok(Email::new(local, domain))
}

/// Checks `email` against the everyday `name@host.tld` shape.
///
/// The empty string passes this policy and yields an empty `Email`.
pub fn parse_common(email: &str) -> Result<Email, Error> {
    if email_is_too_long(email) {
        return Err(Error::TooLong);
    }

    if !COMMON_REGEX.is_match(email) {
        return Err(Error::PatternMismatch(Policy::Common));
    }

    let (local, domain) = split(email);
    if local_part_is_too_long(local) {
        return Err(Error::LocalTooLong);
    }

    Ok(Email::new(local, domain))
}

/// Loosest syntax check; internationalized domains come back in their
/// ASCII-compatible form.
pub fn parse_simple(email: &str) -> Result<Email, Error> {
    parse_simple_with(email, IdnProfile::default())
}

pub fn parse_simple_with(email: &str, profile: IdnProfile) -> Result<Email, Error> {
    if email_is_too_long(email) {
        return Err(Error::TooLong);
    }

    if !SIMPLE_REGEX.is_match(email) {
        return Err(Error::PatternMismatch(Policy::Simple));
    }

    let (local, domain) = split(email);

    let ascii_domain =
        idn::to_ascii(profile, domain).map_err(|source| Error::IdnConversionFailed {
            part: Part::Domain,
            source,
        })?;

    // Only an internationalized domain makes us touch the local part.
    let (local, domain) = if ascii_domain != domain {
        tracing::debug!(%domain, %ascii_domain, "Rewrote internationalized domain");
        let ascii_local = idn::to_ascii(profile, local).map_err(|source| {
            Error::IdnConversionFailed {
                part: Part::Local,
                source,
            }
        })?;
        (ascii_local, ascii_domain)
    } else {
        (local.to_string(), ascii_domain)
    };

    if local_part_is_too_long(&local) {
        return Err(Error::LocalTooLong);
    }

    Ok(Email::new(local, domain))
}
