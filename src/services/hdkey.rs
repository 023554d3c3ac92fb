//! # HD Key Engine
//!
//! Four derivation schemes sharing the contract "pure, deterministic
//! function of `(seed, path)`": secp256k1/BIP32 (and its BIP44 convention),
//! Ed25519/SLIP-10, sr25519 (a SLIP-10-style adaptation for Substrate), and
//! the EIP-2645 Starknet grindKey built atop a secp256k1-derived seed.

use crate::errors::{WalletError, WalletResult};
use crate::utils::PathComponent;
use bitcoin::bip32::{ChildNumber, DerivationPath, Xpriv, Xpub};
use bitcoin::secp256k1::Secp256k1;
use bitcoin::NetworkKind;
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Sha256, Sha512};
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha512 = Hmac<Sha512>;

/// A derived secp256k1 node: private key, chain code, and both public-key encodings.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secp256k1Node {
    /// 32-byte private key scalar.
    pub private_key: [u8; 32],
    /// 32-byte BIP32 chain code.
    pub chain_code: [u8; 32],
}

impl Secp256k1Node {
    /// SEC1 compressed public key (33 bytes).
    pub fn compressed_pubkey(&self) -> WalletResult<[u8; 33]> {
        let secp = Secp256k1::new();
        let sk = bitcoin::secp256k1::SecretKey::from_slice(&self.private_key)
            .map_err(|e| WalletError::Internal(format!("invalid secp256k1 scalar: {}", e)))?;
        let pk = bitcoin::secp256k1::PublicKey::from_secret_key(&secp, &sk);
        Ok(pk.serialize())
    }

    /// SEC1 uncompressed public key (65 bytes), used by Keccak-256 EVM addressing.
    pub fn uncompressed_pubkey(&self) -> WalletResult<[u8; 65]> {
        let secp = Secp256k1::new();
        let sk = bitcoin::secp256k1::SecretKey::from_slice(&self.private_key)
            .map_err(|e| WalletError::Internal(format!("invalid secp256k1 scalar: {}", e)))?;
        let pk = bitcoin::secp256k1::PublicKey::from_secret_key(&secp, &sk);
        Ok(pk.serialize_uncompressed())
    }
}

/// Derive a secp256k1/BIP32 node at a canonical BIP44 path.
///
/// Hardened index = `index + 2^31`. `path` is the already-parsed five
/// component path (`m/44'/coin'/account'/change/index`).
pub fn derive_secp256k1(seed: &[u8], path: &[PathComponent]) -> WalletResult<Secp256k1Node> {
    let secp = Secp256k1::new();
    let master = Xpriv::new_master(NetworkKind::Main, seed)
        .map_err(|e| WalletError::Internal(format!("BIP32 master key derivation failed: {}", e)))?;

    let child_numbers: WalletResult<Vec<ChildNumber>> = path
        .iter()
        .map(|c| {
            if c.hardened {
                ChildNumber::from_hardened_idx(c.index)
            } else {
                ChildNumber::from_normal_idx(c.index)
            }
            .map_err(|e| WalletError::InvalidPath(e.to_string()))
        })
        .collect();
    let derivation_path = DerivationPath::from(child_numbers?);

    let derived = master
        .derive_priv(&secp, &derivation_path)
        .map_err(|e| WalletError::InvalidPath(e.to_string()))?;

    Ok(Secp256k1Node {
        private_key: derived.private_key.secret_bytes(),
        chain_code: *derived.chain_code.as_bytes(),
    })
}

/// Textual extended private key (`xprv...`) at the given seed and path.
///
/// Re-derives through `bitcoin`'s own encoder rather than hand-assembling an
/// `Xpriv`, so the textual form round-trips through its checksum logic.
pub fn xprv_string(seed: &[u8], path: &[PathComponent]) -> WalletResult<String> {
    Ok(derive_xpriv(seed, path)?.to_string())
}

/// Textual extended public key (`xpub...`) at the given seed and path.
pub fn xpub_string(seed: &[u8], path: &[PathComponent]) -> WalletResult<String> {
    let secp = Secp256k1::new();
    let xpriv = derive_xpriv(seed, path)?;
    Ok(Xpub::from_priv(&secp, &xpriv).to_string())
}

fn derive_xpriv(seed: &[u8], path: &[PathComponent]) -> WalletResult<Xpriv> {
    let secp = Secp256k1::new();
    let master = Xpriv::new_master(NetworkKind::Main, seed)
        .map_err(|e| WalletError::Internal(format!("BIP32 master key derivation failed: {}", e)))?;

    let child_numbers: WalletResult<Vec<ChildNumber>> = path
        .iter()
        .map(|c| {
            if c.hardened {
                ChildNumber::from_hardened_idx(c.index)
            } else {
                ChildNumber::from_normal_idx(c.index)
            }
            .map_err(|e| WalletError::InvalidPath(e.to_string()))
        })
        .collect();
    let derivation_path = DerivationPath::from(child_numbers?);

    master
        .derive_priv(&secp, &derivation_path)
        .map_err(|e| WalletError::InvalidPath(e.to_string()))
}

/// A derived Ed25519/SLIP-10 node.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519Node {
    /// The 32-byte SLIP-10 key, used directly as the Ed25519 secret seed.
    pub private_key: [u8; 32],
    /// 32-byte SLIP-10 chain code.
    pub chain_code: [u8; 32],
}

impl Ed25519Node {
    /// The Ed25519 public key.
    pub fn public_key(&self) -> [u8; 32] {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&self.private_key);
        signing_key.verifying_key().to_bytes()
    }
}

/// Derive an Ed25519/SLIP-10 node. SLIP-10 defines only hardened derivation
/// for Ed25519; a non-hardened component in `path` is rejected.
pub fn derive_ed25519(seed: &[u8], path: &[PathComponent]) -> WalletResult<Ed25519Node> {
    let (mut key, mut chain_code) = slip10_master(b"ed25519 seed", seed)?;

    for component in path {
        if !component.hardened {
            return Err(WalletError::InvalidPath(
                "SLIP-10 Ed25519 supports hardened derivation only".to_string(),
            ));
        }
        let (next_key, next_chain_code) = slip10_child(&chain_code, &key, component.raw_index())?;
        key = next_key;
        chain_code = next_chain_code;
    }

    Ok(Ed25519Node { private_key: key, chain_code })
}

/// A derived sr25519 (Substrate) node.
///
/// This is a SLIP-10-style adaptation built on `schnorrkel`, not Substrate's
/// own hierarchical-derivation junction scheme; see `DESIGN.md`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sr25519Node {
    mini_secret: [u8; 32],
    chain_code: [u8; 32],
}

impl Sr25519Node {
    /// The sr25519 public key.
    pub fn public_key(&self) -> WalletResult<[u8; 32]> {
        let msk = schnorrkel::MiniSecretKey::from_bytes(&self.mini_secret)
            .map_err(|e| WalletError::Internal(format!("invalid sr25519 mini-secret: {:?}", e)))?;
        let keypair = msk.expand_to_keypair(schnorrkel::ExpansionMode::Ed25519);
        Ok(keypair.public.to_bytes())
    }
}

/// Derive an sr25519 node, hardened-only (mirrors [`derive_ed25519`]).
pub fn derive_sr25519(seed: &[u8], path: &[PathComponent]) -> WalletResult<Sr25519Node> {
    let (mut key, mut chain_code) = slip10_master(b"sr25519 seed", seed)?;

    for component in path {
        if !component.hardened {
            return Err(WalletError::InvalidPath(
                "sr25519 derivation supports hardened components only".to_string(),
            ));
        }
        let (next_key, next_chain_code) = slip10_child(&chain_code, &key, component.raw_index())?;
        key = next_key;
        chain_code = next_chain_code;
    }

    Ok(Sr25519Node { mini_secret: key, chain_code })
}

fn slip10_master(domain: &'static [u8], seed: &[u8]) -> WalletResult<([u8; 32], [u8; 32])> {
    let mut mac = HmacSha512::new_from_slice(domain)
        .map_err(|e| WalletError::Internal(format!("HMAC setup failed: {}", e)))?;
    mac.update(seed);
    let i = mac.finalize().into_bytes();
    let mut key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    key.copy_from_slice(&i[..32]);
    chain_code.copy_from_slice(&i[32..]);
    Ok((key, chain_code))
}

fn slip10_child(chain_code: &[u8; 32], key: &[u8; 32], raw_index: u32) -> WalletResult<([u8; 32], [u8; 32])> {
    let mut data = Vec::with_capacity(37);
    data.push(0x00);
    data.extend_from_slice(key);
    data.extend_from_slice(&raw_index.to_be_bytes());

    let mut mac = HmacSha512::new_from_slice(chain_code)
        .map_err(|e| WalletError::Internal(format!("HMAC setup failed: {}", e)))?;
    mac.update(&data);
    let i = mac.finalize().into_bytes();

    let mut next_key = [0u8; 32];
    let mut next_chain_code = [0u8; 32];
    next_key.copy_from_slice(&i[..32]);
    next_chain_code.copy_from_slice(&i[32..]);
    Ok((next_key, next_chain_code))
}

/// The Stark curve order, per EIP-2645 / StarkWare's published constant.
fn stark_curve_order() -> BigUint {
    BigUint::from_str("3618502788666131213697322783095070105526743751716087489154079457884512865583").unwrap()
}

/// A grindKey-derived Starknet private key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StarknetNode {
    /// The ground private key, reduced into `[0, EC_ORDER)`.
    pub stark_private_key: [u8; 32],
}

/// Run the EIP-2645 grindKey loop over a secp256k1-derived seed, producing a
/// private key uniformly distributed modulo the Stark curve order.
pub fn derive_starknet(secp256k1_seed: &[u8; 32]) -> WalletResult<StarknetNode> {
    let key_value_limit = stark_curve_order();
    let two_256 = BigUint::from(1u8) << 256;
    let max_allowed = &two_256 - (&two_256 % &key_value_limit);

    let mut index: u8 = 0;
    loop {
        let mut hasher_input = secp256k1_seed.to_vec();
        hasher_input.push(index);
        let digest = {
            use sha2::Digest;
            Sha256::digest(&hasher_input)
        };
        let candidate = BigUint::from_bytes_be(&digest);

        if candidate < max_allowed {
            let result = candidate % &key_value_limit;
            let mut bytes = result.to_bytes_be();
            let mut fixed = [0u8; 32];
            if bytes.len() > 32 {
                bytes = bytes[bytes.len() - 32..].to_vec();
            }
            fixed[32 - bytes.len()..].copy_from_slice(&bytes);
            return Ok(StarknetNode { stark_private_key: fixed });
        }

        index = index.checked_add(1).ok_or_else(|| {
            WalletError::Internal("grindKey exhausted its search space".to_string())
        })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_bip44_path;

    const TEST_SEED_HEX: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e";

    fn test_seed() -> Vec<u8> {
        hex::decode(TEST_SEED_HEX).unwrap()
    }

    #[test]
    fn test_secp256k1_derivation_is_deterministic() {
        let path = parse_bip44_path("m/44'/0'/0'/0/0").unwrap();
        let a = derive_secp256k1(&test_seed(), &path).unwrap();
        let b = derive_secp256k1(&test_seed(), &path).unwrap();
        assert_eq!(a.private_key, b.private_key);
        assert_eq!(a.compressed_pubkey().unwrap(), b.compressed_pubkey().unwrap());
    }

    #[test]
    fn test_secp256k1_different_coin_types_differ() {
        let btc_path = parse_bip44_path("m/44'/0'/0'/0/0").unwrap();
        let eth_path = parse_bip44_path("m/44'/60'/0'/0/0").unwrap();
        let btc = derive_secp256k1(&test_seed(), &btc_path).unwrap();
        let eth = derive_secp256k1(&test_seed(), &eth_path).unwrap();
        assert_ne!(btc.private_key, eth.private_key);
    }

    #[test]
    fn test_ed25519_rejects_non_hardened() {
        let mut path = parse_bip44_path("m/44'/1729'/0'/0/0").unwrap();
        path[4].hardened = false;
        let result = derive_ed25519(&test_seed(), &path);
        assert!(result.is_err());
    }

    #[test]
    fn test_ed25519_derivation_is_deterministic() {
        let path = parse_bip44_path("m/44'/1729'/0'/0'/0'").unwrap();
        let a = derive_ed25519(&test_seed(), &path).unwrap();
        let b = derive_ed25519(&test_seed(), &path).unwrap();
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_sr25519_derivation_is_deterministic() {
        let path = parse_bip44_path("m/44'/354'/0'/0'/0'").unwrap();
        let a = derive_sr25519(&test_seed(), &path).unwrap();
        let b = derive_sr25519(&test_seed(), &path).unwrap();
        assert_eq!(a.public_key().unwrap(), b.public_key().unwrap());
    }

    #[test]
    fn test_starknet_grind_key_in_range() {
        let path = parse_bip44_path("m/44'/9004'/0'/0/0").unwrap();
        let node = derive_secp256k1(&test_seed(), &path).unwrap();
        let stark = derive_starknet(&node.private_key).unwrap();
        let value = BigUint::from_bytes_be(&stark.stark_private_key);
        assert!(value < stark_curve_order());
        assert!(!value.is_zero());
    }
}
