//! Substrate SS58 addressing: a network-prefixed, Blake2b-checksummed Base58 encoding.

use crate::errors::WalletResult;
use blake2::{Blake2b512, Digest};

const SS58_CONTEXT: &[u8] = b"SS58PRE";

/// SS58's compact prefix encoding: one byte for `prefix <= 63`, two bytes above that.
fn prefix_bytes(prefix: u16) -> Vec<u8> {
    if prefix <= 63 {
        vec![prefix as u8]
    } else {
        let ident = prefix & 0b0011_1111_1111_1111;
        let first = 0b0100_0000 | ((ident & 0b0000_0000_1111_1100) >> 2) as u8;
        let second = (ident >> 8) as u8 | (((ident & 0b0000_0000_0000_0011) << 6) as u8);
        vec![first, second]
    }
}

/// SS58-encode `public_key` under `prefix` (e.g. `0` for Polkadot, `2` for Kusama).
pub fn address(public_key: &[u8; 32], prefix: u16) -> WalletResult<String> {
    let mut data = prefix_bytes(prefix);
    data.extend_from_slice(public_key);

    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CONTEXT);
    hasher.update(&data);
    let checksum = hasher.finalize();

    data.extend_from_slice(&checksum[..2]);
    Ok(bs58::encode(data).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polkadot_and_kusama_prefixes_differ() {
        let public_key = [0x11; 32];
        let dot = address(&public_key, 0).unwrap();
        let ksm = address(&public_key, 2).unwrap();
        assert_ne!(dot, ksm);
    }

    #[test]
    fn test_two_byte_prefix_is_stable() {
        let public_key = [0x22; 32];
        let a = address(&public_key, 1285).unwrap();
        let b = address(&public_key, 1285).unwrap();
        assert_eq!(a, b);
    }
}
