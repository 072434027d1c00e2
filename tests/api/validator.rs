//! tests/api/validator.rs

use crate::helpers::validator;
use claims::assert_ok;
use email_syntax::configuration::ValidatorSettings;
use email_syntax::validate::{ErrorKind, IdnProfile};
use email_syntax::{EmailValidator, Policy};

#[test]
fn settings_select_policy_and_idn_profile() {
    let validator = EmailValidator::from(ValidatorSettings {
        policy: Policy::Simple,
        idn_profile: IdnProfile::Strict,
    });

    let email = assert_ok!(validator.parse("Info@München.DE"));
    assert_eq!(email.to_string(), "info@xn--mnchen-3ya.de");
}

#[test]
fn policies_do_not_fall_back_to_each_other() {
    let result = validator(Policy::Common).parse("user@bücher.example");

    let error = result.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::PatternMismatch);
    assert_eq!(error.to_string(), "doesn't match common email pattern");
}

#[test]
fn validators_are_shared_across_threads() {
    let validator = validator(Policy::Simple);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let email = validator
                    .parse(&format!("user{}@bücher.example", i))
                    .expect("Failed to parse email");
                email.domain().to_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "xn--bcher-kva.example");
    }
}
