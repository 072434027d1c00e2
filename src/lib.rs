pub mod configuration;
pub mod domain;
pub mod report;
pub mod telemetry;
pub mod validate;
pub mod validator;

pub use domain::Email;
pub use validate::{parse_common, parse_rfc5322, parse_simple, parse_simple_with, Error, Policy};
pub use validator::EmailValidator;
