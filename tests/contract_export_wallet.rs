//! Contract tests for `WalletService::export_addresses`.

mod common;

use arcsign_core::services::export::ExportFormat;
use common::{test_data, TestWallet};
use std::fs;

#[test]
fn exports_json_with_the_documented_shape() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    let path = fixture
        .service
        .export_addresses(fixture.root(), &outcome.wallet.id, ExportFormat::Json, "20260801-120000")
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["wallet_id"], outcome.wallet.id);
    assert_eq!(parsed["total_chains"], 54);
    assert_eq!(parsed["addresses"][0]["symbol"], "BTC");
}

#[test]
fn exports_csv_with_the_documented_header_row() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    let path = fixture
        .service
        .export_addresses(fixture.root(), &outcome.wallet.id, ExportFormat::Csv, "20260801-120001")
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, "Rank,Symbol,Name,Category,Coin Type,Key Type,Derivation Path,Address,Error");
    assert_eq!(contents.lines().count(), 55); // header + 54 chains
}

#[test]
fn export_never_requires_decryption() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    // Three wrong unlocks trip the rate limiter, but export doesn't touch it.
    for _ in 0..4 {
        let _ = fixture.service.unlock(fixture.root(), &outcome.wallet.id, "wrong", None);
    }

    let result = fixture.service.export_addresses(fixture.root(), &outcome.wallet.id, ExportFormat::Json, "20260801-120002");
    assert!(result.is_ok());
}
