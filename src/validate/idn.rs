//! src/validate/idn.rs
use serde::Deserialize;

const ACE_PREFIX: &str = "xn--";

/// How non-ASCII labels are turned into their ASCII-compatible form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdnProfile {
    /// Label-by-label punycode with no case mapping or validation beyond
    /// decoding existing `xn--` labels. ASCII labels pass through as-is.
    #[default]
    Punycode,
    /// UTS #46 mapping and validation.
    Uts46,
    /// UTS #46 with STD3 ASCII rules and DNS length checks.
    Strict,
}

impl IdnProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdnProfile::Punycode => "punycode",
            IdnProfile::Uts46 => "uts46",
            IdnProfile::Strict => "strict",
        }
    }
}

impl std::fmt::Display for IdnProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IdnProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "punycode" => Ok(IdnProfile::Punycode),
            "uts46" => Ok(IdnProfile::Uts46),
            "strict" => Ok(IdnProfile::Strict),
            other => Err(format!(
                "{} is not a supported IDN profile. Use either `punycode`, `uts46` or `strict`.",
                other
            )),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum IdnError {
    #[error("label {0:?} is not valid punycode")]
    InvalidPunycode(String),
    #[error("label {0:?} overflows the punycode encoder")]
    Overflow(String),
    #[error("{0}")]
    Rejected(#[from] idna::Errors),
}

pub fn to_ascii(profile: IdnProfile, input: &str) -> Result<String, IdnError> {
    match profile {
        IdnProfile::Punycode => punycode_to_ascii(input),
        IdnProfile::Uts46 => Ok(idna::domain_to_ascii(input)?),
        IdnProfile::Strict => Ok(idna::domain_to_ascii_strict(input)?),
    }
}

fn punycode_to_ascii(input: &str) -> Result<String, IdnError> {
    let labels = input
        .split('.')
        .map(punycode_label)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(labels.join("."))
}

fn punycode_label(label: &str) -> Result<String, IdnError> {
    let label = match label.strip_prefix(ACE_PREFIX) {
        // An empty decode would leave an empty label behind.
        Some(encoded) => idna::punycode::decode_to_string(encoded)
            .filter(|decoded| !decoded.is_empty())
            .ok_or_else(|| IdnError::InvalidPunycode(label.to_string()))?,
        None => label.to_string(),
    };

    if label.is_ascii() {
        return Ok(label);
    }

    idna::punycode::encode_str(&label)
        .map(|encoded| format!("{}{}", ACE_PREFIX, encoded))
        .ok_or(IdnError::Overflow(label))
}
