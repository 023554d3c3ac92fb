//! # Address Codecs
//!
//! One dispatch function, [`encode`], maps a registry entry's
//! [`FormatterId`](crate::services::registry::FormatterId) and a wallet seed
//! to a chain-native textual address. Every codec function is pure and
//! side-effect free; a codec failure is reported to the caller rather than
//! panicking, so [`encode`] never silently skips a registry entry.

pub mod base58check;
pub mod bech32_cosmos;
pub mod ed25519_text;
pub mod evm;
pub mod ripple;
pub mod sha3_trunc;
pub mod ss58;
pub mod starknet;
pub mod tron;

use crate::errors::WalletResult;
use crate::services::hdkey;
use crate::services::registry::{FormatterId, RegistryEntry};
use crate::utils::{format_bip44_path, parse_bip44_path};

/// Derive the chain-native address for `entry` from `seed`, at
/// `m/44'/coin_type'/0'/0/0`.
pub fn encode(entry: &RegistryEntry, seed: &[u8]) -> WalletResult<String> {
    let path_str = format_bip44_path(entry.coin_type, 0, 0, 0);
    let path = parse_bip44_path(&path_str)?;

    match entry.formatter {
        FormatterId::P2pkhBase58Check { version } => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            base58check::p2pkh_address(&node.compressed_pubkey()?, version)
        }
        FormatterId::KeccakEvm => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            evm::keccak_address(&node.uncompressed_pubkey()?)
        }
        FormatterId::Bech32Cosmos { hrp } => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            bech32_cosmos::address(&node.compressed_pubkey()?, hrp)
        }
        FormatterId::Ss58 { prefix } => {
            let node = hdkey::derive_sr25519(seed, &path)?;
            ss58::address(&node.public_key()?, prefix)
        }
        FormatterId::Ed25519Solana => {
            let node = hdkey::derive_ed25519(seed, &path)?;
            ed25519_text::solana_address(&node.public_key())
        }
        FormatterId::Ed25519Tezos => {
            let node = hdkey::derive_ed25519(seed, &path)?;
            ed25519_text::tezos_address(&node.public_key())
        }
        FormatterId::Ed25519Stellar => {
            let node = hdkey::derive_ed25519(seed, &path)?;
            ed25519_text::stellar_address(&node.public_key())
        }
        FormatterId::Sha3Trunc => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            sha3_trunc::icon_address(&node.uncompressed_pubkey()?)
        }
        FormatterId::Eip2645Starknet => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            starknet::address(&node.private_key)
        }
        FormatterId::RippleBase58Check => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            ripple::address(&node.compressed_pubkey()?)
        }
        FormatterId::TronBase58Check => {
            let node = hdkey::derive_secp256k1(seed, &path)?;
            tron::address(&node.uncompressed_pubkey()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED_HEX: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e";

    fn test_seed() -> Vec<u8> {
        hex::decode(TEST_SEED_HEX).unwrap()
    }

    #[test]
    fn test_bitcoin_address_is_stable() {
        let entry = crate::services::registry::by_symbol("BTC").unwrap();
        let address = encode(entry, &test_seed()).unwrap();
        assert!(address.starts_with('1'));
    }

    #[test]
    fn test_ethereum_and_harmony_addresses_differ() {
        let eth = crate::services::registry::by_symbol("ETH").unwrap();
        let one = crate::services::registry::by_symbol("ONE").unwrap();
        let eth_address = encode(eth, &test_seed()).unwrap();
        let one_address = encode(one, &test_seed()).unwrap();
        assert!(eth_address.starts_with("0x"));
        assert!(one_address.starts_with("one1"));
        assert_ne!(eth_address, one_address);
    }

    #[test]
    fn test_every_registry_entry_encodes_or_reports_an_error() {
        for entry in crate::services::registry::all() {
            let result = encode(entry, &test_seed());
            assert!(result.is_ok(), "codec for {} failed: {:?}", entry.symbol, result.err());
        }
    }
}
