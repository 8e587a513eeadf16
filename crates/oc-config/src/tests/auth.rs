use crate::Config;
use crate::tests::{EnvGuard, TEST_SECRET, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_no_jwt_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("OC_AUTH_JWT_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_short_jwt_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("OC_AUTH_JWT_SECRET", "too-short");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_secret_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("OC_AUTH_JWT_SECRET", TEST_SECRET);

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_token_ttl_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("OC_AUTH_JWT_SECRET", TEST_SECRET);
    let _ttl = EnvGuard::set("OC_AUTH_TOKEN_TTL_SECS", "10");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
