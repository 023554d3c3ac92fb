//! Bech32 / Cosmos ADR-028 addressing, shared by the Cosmos SDK chains (and,
//! per the registry, by Harmony and Zilliqa's Bech32-shaped addresses).

use crate::errors::{WalletError, WalletResult};
use crate::services::codecs::base58check::hash160;
use bech32::{Bech32, Hrp};

/// Bech32-encode `RIPEMD-160(SHA-256(compressed pubkey))` under `hrp`.
pub fn address(compressed_pubkey: &[u8; 33], hrp: &str) -> WalletResult<String> {
    let payload = hash160(compressed_pubkey);
    let hrp = Hrp::parse(hrp).map_err(|e| WalletError::Internal(format!("invalid bech32 hrp {}: {}", hrp, e)))?;
    bech32::encode::<Bech32>(hrp, &payload)
        .map_err(|e| WalletError::Internal(format!("bech32 encoding failed: {}", e)))
}
