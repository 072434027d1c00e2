//! src/validate/patterns.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 5322 addr-spec: dot-atom or quoted-string local part, then either a
/// hostname of two or more labels or a bracketed address literal.
///
/// The domain is mandatory, so `user@` does not match. Quoted strings may
/// carry spaces and tabs (folding white space).
const RFC5322: &str = r##"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x09\x0b\x0c\x0e-\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\]|\[[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x5e-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+\])$"##;

/// The whole pattern is one optional group, so "" matches too.
const COMMON: &str = r"(?i)^([A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,24})*$";

/// Anything but whitespace and `@ . " ' ( ) [ ] { } / , : ;`. `\s` is the
/// Unicode class, so no-break space and vertical tab are excluded too.
const SIMPLE_LABEL: &str = r#"[^@\s."'()\[\]{}/,:;]+"#;

pub(crate) static RFC5322_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(RFC5322).expect("RFC 5322 pattern is valid"));

pub(crate) static COMMON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(COMMON).expect("common pattern is valid"));

pub(crate) static SIMPLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^({label}\.)*{label}@{label}(\.{label})+$",
        label = SIMPLE_LABEL
    );
    Regex::new(&pattern).expect("simple pattern is valid")
});
