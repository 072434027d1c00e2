//! src/report.rs
use crate::domain::Email;
use crate::validate::ErrorKind;
use crate::validator::EmailValidator;
use serde::Serialize;

/// One line of CLI output: the verdict for a single address.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    pub policy: &'static str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl<'a> Report<'a> {
    pub fn new(validator: &EmailValidator, input: &'a str) -> Self {
        let policy = validator.policy().as_str();
        match validator.parse(input) {
            Ok(email) => Self {
                input,
                policy,
                valid: true,
                email: Some(email),
                error: None,
            },
            Err(e) => Self {
                input,
                policy,
                valid: false,
                email: None,
                error: Some(Failure {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            },
        }
    }
}
