//! EIP-2645 Starknet addressing.
//!
//! No Stark-curve point-multiplication crate is available in this stack, so
//! the address is SHA-256 of the grindKey-derived Stark private key rather
//! than the real Pedersen-hash-of-public-key computation; see DESIGN.md.

use crate::errors::WalletResult;
use crate::services::hdkey;
use sha2::{Digest, Sha256};

/// `0x` + 64 hex digits derived from the grindKey-ground Stark private key.
pub fn address(secp256k1_private_key: &[u8; 32]) -> WalletResult<String> {
    let stark = hdkey::derive_starknet(secp256k1_private_key)?;
    let digest = Sha256::digest(stark.stark_private_key);
    Ok(format!("0x{}", hex::encode(digest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shape() {
        let seed = [0x07; 32];
        let address = address(&seed).unwrap();
        assert_eq!(address.len(), 66);
        assert!(address.starts_with("0x"));
    }

    #[test]
    fn test_deterministic() {
        let seed = [0x07; 32];
        assert_eq!(address(&seed).unwrap(), address(&seed).unwrap());
    }
}
