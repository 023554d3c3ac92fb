//! Bitcoin-style P2PKH Base58Check addressing, and the `hash160`/checksum
//! primitives the Ripple and TRON codecs reuse.

use crate::errors::WalletResult;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// RIPEMD-160(SHA-256(data)), the Bitcoin-style "hash160".
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    let mut out = [0u8; 20];
    out.copy_from_slice(&ripe);
    out
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// Base58Check-encode `version ‖ payload ‖ checksum[..4]` with the Bitcoin alphabet.
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);
    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Bitcoin-style P2PKH address: `version ‖ hash160(compressed pubkey)`.
pub fn p2pkh_address(compressed_pubkey: &[u8; 33], version: u8) -> WalletResult<String> {
    let payload = hash160(compressed_pubkey);
    Ok(base58check_encode(&[version], &payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash160_length() {
        assert_eq!(hash160(b"test").len(), 20);
    }

    #[test]
    fn test_p2pkh_address_is_deterministic() {
        let pubkey = [0x02; 33];
        let a = p2pkh_address(&pubkey, 0x00).unwrap();
        let b = p2pkh_address(&pubkey, 0x00).unwrap();
        assert_eq!(a, b);
        assert!(a.chars().next().unwrap().is_ascii_alphanumeric());
    }

    #[test]
    fn test_version_byte_changes_address() {
        let pubkey = [0x02; 33];
        let btc = p2pkh_address(&pubkey, 0x00).unwrap();
        let ltc = p2pkh_address(&pubkey, 0x30).unwrap();
        assert_ne!(btc, ltc);
    }
}
