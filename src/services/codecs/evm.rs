//! Keccak-256 EVM addressing, shared by every EVM-compatible chain in the registry.

use crate::errors::WalletResult;
use tiny_keccak::{Hasher, Keccak};

/// `0x` + the last 20 bytes of Keccak-256(uncompressed pubkey minus its `0x04` prefix).
pub fn keccak_address(uncompressed_pubkey: &[u8; 65]) -> WalletResult<String> {
    let mut hasher = Keccak::v256();
    let mut digest = [0u8; 32];
    hasher.update(&uncompressed_pubkey[1..]);
    hasher.finalize(&mut digest);
    Ok(format!("0x{}", hex::encode(&digest[12..])))
}
