//! src/validate/mod.rs
mod error;
pub use error::{Error, ErrorKind, Part};

mod idn;
pub use idn::{to_ascii, IdnError, IdnProfile};

mod length;
pub use length::{
    email_is_too_long, local_part_is_too_long, MAX_EMAIL_LENGTH, MAX_LOCAL_LENGTH,
};

mod patterns;

mod policy;
pub use policy::{parse_common, parse_rfc5322, parse_simple, parse_simple_with, Policy};
