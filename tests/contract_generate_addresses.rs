//! Contract tests for `WalletService::generate_addresses`.

mod common;

use common::{test_data, TestWallet};

#[test]
fn returns_exactly_fifty_four_entries_sorted_by_rank_with_btc_first() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    let book = fixture.service.generate_addresses(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();

    assert_eq!(book.len(), 54);
    assert_eq!(book.entries()[0].symbol, "BTC");
    assert_eq!(book.entries()[0].rank, 1);
    for window in book.entries().windows(2) {
        assert!(window[0].rank < window[1].rank);
    }
}

#[test]
fn every_entry_has_either_an_address_or_an_error_never_neither() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();
    let book = fixture.service.generate_addresses(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();

    for entry in book.entries() {
        let has_address = !entry.address.is_empty();
        let has_error = entry.error.is_some();
        assert_ne!(has_address, has_error, "{} must have exactly one of address/error", entry.symbol);
    }
}

#[test]
fn re_deriving_twice_is_bit_for_bit_identical() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();

    let first = fixture.service.generate_addresses(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();
    let second = fixture.service.generate_addresses(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();

    assert!(first.matches(&second));
}

#[test]
fn ethereum_and_harmony_addresses_never_collide() {
    let fixture = TestWallet::new();
    let outcome = fixture.service.create(fixture.root(), None, test_data::TEST_PASSWORD, 12, false, None).unwrap();
    let book = fixture.service.generate_addresses(fixture.root(), &outcome.wallet.id, test_data::TEST_PASSWORD, None).unwrap();

    let eth = book.find_by_symbol("ETH").unwrap();
    let one = book.find_by_symbol("ONE").unwrap();
    assert!(eth.address.starts_with("0x"));
    assert!(one.address.starts_with("one1"));
    assert_ne!(eth.address, one.address);
}
