//! Integration tests for the walkthrough and its configuration.

#![cfg(all(feature = "complex", feature = "account"))]

use message_passing::config::{ConfigError, DemoConfig};
use message_passing::error::MessageError;
use message_passing::walkthrough;
use rstest::rstest;

#[rstest]
fn configured_walkthrough() {
    let config = DemoConfig::from_lookup(|key| match key {
        "SICP_INITIAL_BALANCE" => Some("10".to_string()),
        "SICP_DEPOSIT" => Some("5".to_string()),
        "SICP_WITHDRAWAL" => Some("50".to_string()),
        "SICP_REAL_PART" => Some("0".to_string()),
        "SICP_IMAG_PART" => Some("1".to_string()),
        _ => None,
    })
    .unwrap();

    let report = walkthrough::run(&config).unwrap();

    assert_eq!(report.complex.angle, std::f64::consts::FRAC_PI_2);
    assert_eq!(report.dispatched.after_deposit, 15);
    assert_eq!(report.dispatched.balance, 15);
    assert_eq!(report.dispatched.after_withdrawal, -35);
    assert_eq!(report.table, report.dispatched);
    assert_eq!(report.unknown_request.rejected_name(), Some("current"));
    assert_eq!(
        report.complex.rejected,
        MessageError::UnknownOperation("scale".to_string())
    );
}

#[rstest]
fn invalid_configuration_names_the_key() {
    let error = DemoConfig::from_lookup(|key| {
        (key == "SICP_WITHDRAWAL").then(|| "fifty".to_string())
    })
    .unwrap_err();

    assert!(matches!(
        error,
        ConfigError::InvalidValue { ref key, .. } if key == "SICP_WITHDRAWAL"
    ));
}
