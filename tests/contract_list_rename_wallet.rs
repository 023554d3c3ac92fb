//! Contract tests for `WalletService::list_wallets` and `WalletService::rename`.

mod common;

use arcsign_core::errors::WalletError;
use common::{test_data, TestWallet};

#[test]
fn list_wallets_enumerates_every_created_wallet_without_decrypting() {
    let fixture = TestWallet::new();
    fixture.service.create(fixture.root(), Some("Alpha"), test_data::TEST_PASSWORD, 12, false, None).unwrap();
    fixture.service.create(fixture.root(), Some("Beta"), test_data::TEST_PASSWORD, 24, false, None).unwrap();

    let wallets = fixture.service.list_wallets(fixture.root()).unwrap();
    let names: Vec<_> = wallets.iter().filter_map(|w| w.name.clone()).collect();

    assert_eq!(wallets.len(), 2);
    assert!(names.contains(&"Alpha".to_string()));
    assert!(names.contains(&"Beta".to_string()));
}

#[test]
fn list_wallets_on_an_empty_root_is_an_empty_list() {
    let fixture = TestWallet::new();
    assert!(fixture.service.list_wallets(fixture.root()).unwrap().is_empty());
}

#[test]
fn rename_persists_across_a_fresh_list_call() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), Some("Original"), test_data::TEST_PASSWORD, 12, false, None).unwrap();

    fixture.service.rename(fixture.root(), &outcome.wallet.id, "Renamed").unwrap();

    let wallets = fixture.service.list_wallets(fixture.root()).unwrap();
    assert_eq!(wallets[0].name.as_deref(), Some("Renamed"));
}

#[test]
fn rename_rejects_an_empty_or_overlong_name() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    assert!(matches!(
        fixture.service.rename(fixture.root(), &outcome.wallet.id, ""),
        Err(WalletError::InvalidArgument { .. })
    ));
    let too_long = "x".repeat(65);
    assert!(matches!(
        fixture.service.rename(fixture.root(), &outcome.wallet.id, &too_long),
        Err(WalletError::InvalidArgument { .. })
    ));
}
