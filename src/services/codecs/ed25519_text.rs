//! Ed25519 textual addressing: Solana's raw Base58, Tezos's `tz1…`
//! Base58Check, and Stellar's `G…` Base32.

use crate::errors::{WalletError, WalletResult};
use crate::services::codecs::base58check::base58check_encode;
use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;

/// Solana address: the raw Base58 encoding of the Ed25519 public key.
pub fn solana_address(public_key: &[u8; 32]) -> WalletResult<String> {
    Ok(bs58::encode(public_key).into_string())
}

const TEZOS_TZ1_PREFIX: [u8; 3] = [6, 161, 159];

/// Tezos `tz1…` address: Base58Check of `tz1 prefix ‖ Blake2b-160(pubkey)`.
pub fn tezos_address(public_key: &[u8; 32]) -> WalletResult<String> {
    let mut hasher = Blake2bVar::new(20)
        .map_err(|e| WalletError::Internal(format!("blake2b-160 init failed: {}", e)))?;
    hasher.update(public_key);
    let mut digest = [0u8; 20];
    hasher
        .finalize_variable(&mut digest)
        .map_err(|e| WalletError::Internal(format!("blake2b-160 finalize failed: {}", e)))?;

    Ok(base58check_encode(&TEZOS_TZ1_PREFIX, &digest))
}

const STELLAR_VERSION_ED25519: u8 = 6 << 3;
const BASE32_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Stellar `G…` address: Base32 of `version byte ‖ pubkey ‖ CRC16-XModem checksum`.
pub fn stellar_address(public_key: &[u8; 32]) -> WalletResult<String> {
    let mut payload = Vec::with_capacity(1 + 32 + 2);
    payload.push(STELLAR_VERSION_ED25519);
    payload.extend_from_slice(public_key);
    let checksum = crc16_xmodem(&payload);
    payload.extend_from_slice(&checksum.to_le_bytes());
    Ok(base32_encode(&payload))
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0x0000;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 { (crc << 1) ^ 0x1021 } else { crc << 1 };
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut output = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut bits: u32 = 0;
    let mut bit_count: u32 = 0;
    for &byte in data {
        bits = (bits << 8) | byte as u32;
        bit_count += 8;
        while bit_count >= 5 {
            bit_count -= 5;
            output.push(BASE32_ALPHABET[((bits >> bit_count) & 0x1f) as usize] as char);
        }
    }
    if bit_count > 0 {
        output.push(BASE32_ALPHABET[((bits << (5 - bit_count)) & 0x1f) as usize] as char);
    }
    output
}
