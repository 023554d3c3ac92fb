//! SHA3-256-truncated addressing (ICON's `hx…`).

use crate::errors::WalletResult;
use sha3::{Digest, Sha3_256};

/// `hx` + the last 20 bytes of SHA3-256(uncompressed pubkey minus its `0x04` prefix).
pub fn icon_address(uncompressed_pubkey: &[u8; 65]) -> WalletResult<String> {
    let digest = Sha3_256::digest(&uncompressed_pubkey[1..]);
    Ok(format!("hx{}", hex::encode(&digest[12..])))
}
