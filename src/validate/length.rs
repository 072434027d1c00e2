//! src/validate/length.rs
//!
//! Limits from RFC 3696 errata 1690: a forward path is at most 256 octets
//! including the angle brackets, leaving 254 for the address itself.

pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_LOCAL_LENGTH: usize = 64;

/// Byte length, not characters.
pub fn email_is_too_long(email: &str) -> bool {
    email.len() > MAX_EMAIL_LENGTH
}

pub fn local_part_is_too_long(local: &str) -> bool {
    local.len() > MAX_LOCAL_LENGTH
}
