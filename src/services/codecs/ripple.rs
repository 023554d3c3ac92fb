//! Ripple Base58Check addressing: Bitcoin-shaped, with Ripple's own alphabet.

use crate::errors::{WalletError, WalletResult};
use crate::services::codecs::base58check::hash160;
use sha2::{Digest, Sha256};

const RIPPLE_ALPHABET: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// Ripple address: `0x00 ‖ hash160(compressed pubkey)`, Base58Check-encoded
/// with Ripple's alphabet instead of Bitcoin's.
pub fn address(compressed_pubkey: &[u8; 33]) -> WalletResult<String> {
    let payload = hash160(compressed_pubkey);
    let mut data = vec![0x00];
    data.extend_from_slice(&payload);
    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    let alphabet = bs58::Alphabet::new(RIPPLE_ALPHABET)
        .map_err(|e| WalletError::Internal(format!("invalid Ripple alphabet: {:?}", e)))?;
    Ok(bs58::encode(data).with_alphabet(&alphabet).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_starts_with_r() {
        let pubkey = [0x02; 33];
        let address = address(&pubkey).unwrap();
        assert!(address.starts_with('r'));
    }

    #[test]
    fn test_deterministic() {
        let pubkey = [0x02; 33];
        assert_eq!(address(&pubkey).unwrap(), address(&pubkey).unwrap());
    }
}
