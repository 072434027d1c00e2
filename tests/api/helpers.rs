//! tests/api/helpers.rs

use email_syntax::telemetry::{get_subscriber, init_subscriber};
use email_syntax::{EmailValidator, Policy};
use fake::faker::internet::en::{FreeEmailProvider, SafeEmail};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use once_cell::sync::Lazy;
use quickcheck::{Arbitrary, Gen};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "debug".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub const POLICIES: [Policy; 3] = [Policy::Rfc5322, Policy::Common, Policy::Simple];

pub fn validator(policy: Policy) -> EmailValidator {
    Lazy::force(&TRACING);
    EmailValidator::new(policy)
}

/// `local@example.com` with the local part padded to `local_len` bytes.
pub fn email_with_local_len(local_len: usize) -> String {
    format!("{}@example.com", "a".repeat(local_len))
}

/// A well-formed address of exactly `len` bytes, built from short labels.
pub fn email_of_len(len: usize) -> String {
    let mut domain = String::from("example.com");
    let prefix = "user@";
    while prefix.len() + domain.len() < len {
        domain.insert_str(0, "a.");
    }
    let mut email = format!("{}{}", prefix, domain);
    if email.len() > len {
        // drop a single leading label character to land on `len`
        email = format!("us{}", &email[3..]);
    }
    email
}

#[derive(Debug, Clone)]
pub struct SafeEmailFixture(pub String);

impl Arbitrary for SafeEmailFixture {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let email = SafeEmail().fake_with_rng(g);
        Self(email)
    }
}

/// `first.last@provider` restricted to ASCII letters, accepted by every
/// policy.
#[derive(Debug, Clone)]
pub struct PlainEmailFixture(pub String);

impl Arbitrary for PlainEmailFixture {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let first: String = FirstName().fake_with_rng(g);
        let last: String = LastName().fake_with_rng(g);
        let provider: String = FreeEmailProvider().fake_with_rng(g);
        Self(format!("{}.{}@{}", letters(&first), letters(&last), provider))
    }
}

fn letters(s: &str) -> String {
    let letters: String = s
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        "x".into()
    } else {
        letters
    }
}

const IDN_DOMAINS: [&str; 6] = [
    "bücher.example",
    "münchen.de",
    "παράδειγμα.δοκιμή",
    "例え.テスト",
    "mañana.com",
    "xn--bcher-kva.example",
];

const IDN_LOCALS: [&str; 4] = ["user", "müller", "first.last", "josé.garcía"];

/// An address the simple policy accepts, often with a non-ASCII domain.
#[derive(Debug, Clone)]
pub struct IdnEmailFixture(pub String);

impl Arbitrary for IdnEmailFixture {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let local = IDN_LOCALS[usize::arbitrary(g) % IDN_LOCALS.len()];
        let domain = IDN_DOMAINS[usize::arbitrary(g) % IDN_DOMAINS.len()];
        Self(format!("{}@{}", local, domain))
    }
}

/// Arbitrary text padded past the 254 byte limit.
#[derive(Debug, Clone)]
pub struct OverlongInput(pub String);

impl Arbitrary for OverlongInput {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let text = String::arbitrary(g);
        let padding = 255usize.saturating_sub(text.len());
        Self(format!("{}{}", "a".repeat(padding), text))
    }
}
