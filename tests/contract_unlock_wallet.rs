//! Contract tests for `WalletService::unlock` and the rate limiter it consults.

mod common;

use arcsign_core::errors::WalletError;
use common::{test_data, TestWallet};

#[test]
fn unlocking_with_the_correct_password_returns_the_original_mnemonic() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    let unlocked = fixture.service.unlock(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();

    assert_eq!(unlocked.mnemonic, outcome.mnemonic);
    assert!(unlocked.wallet.last_accessed_at >= outcome.wallet.last_accessed_at);
}

#[test]
fn unlocking_with_the_wrong_password_is_indistinguishable_from_a_tampered_blob() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    let result = fixture.service.unlock(fixture.root(), &outcome.wallet.id, "definitely wrong", None);
    assert!(matches!(result, Err(WalletError::Authentication)));
}

#[test]
fn unlocking_an_unknown_wallet_id_is_not_found() {
    let fixture = TestWallet::new();
    let result = fixture.service.unlock(fixture.root(), "no-such-wallet", test_data::TEST_PASSWORD, None);
    assert!(matches!(result, Err(WalletError::WalletNotFound(_))));
}

#[test]
fn three_failures_then_a_fourth_is_rate_limited_with_a_positive_retry_after() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    for _ in 0..3 {
        let result = fixture.service.unlock(fixture.root(), &outcome.wallet.id, "wrong", None);
        assert!(matches!(result, Err(WalletError::Authentication)));
    }

    match fixture.service.unlock(fixture.root(), &outcome.wallet.id, "wrong", None) {
        Err(WalletError::RateLimited { retry_after_ms }) => assert!(retry_after_ms > 0),
        other => panic!("expected ErrRateLimited, got {:?}", other.is_ok()),
    }
}

#[test]
fn a_successful_unlock_resets_the_rate_limiter_immediately() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    for _ in 0..3 {
        fixture.service.unlock(fixture.root(), &outcome.wallet.id, "wrong", None).unwrap_err();
    }
    assert!(matches!(
        fixture.service.unlock(fixture.root(), &outcome.wallet.id, "wrong", None),
        Err(WalletError::RateLimited { .. })
    ));

    fixture.service.unlock(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();

    let fifth = fixture.service.unlock(fixture.root(), &outcome.wallet.id, "wrong", None);
    assert!(matches!(fifth, Err(WalletError::Authentication)));
}
