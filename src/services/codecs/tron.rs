//! TRON Base58Check addressing: Keccak-derived payload, `0x41` version byte.

use crate::errors::WalletResult;
use crate::services::codecs::base58check::base58check_encode;
use tiny_keccak::{Hasher, Keccak};

const TRON_VERSION: u8 = 0x41;

/// TRON address: Base58Check of `0x41 ‖ last 20 bytes of Keccak-256(uncompressed pubkey)`.
pub fn address(uncompressed_pubkey: &[u8; 65]) -> WalletResult<String> {
    let mut hasher = Keccak::v256();
    let mut digest = [0u8; 32];
    hasher.update(&uncompressed_pubkey[1..]);
    hasher.finalize(&mut digest);
    Ok(base58check_encode(&[TRON_VERSION], &digest[12..]))
}
