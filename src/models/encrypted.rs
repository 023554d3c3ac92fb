//! # Encrypted Mnemonic Blob
//!
//! On-disk format for `<wallet_id>/mnemonic.enc`: the Argon2id parameters
//! used to derive the encryption key travel with the ciphertext so the KDF
//! cost can evolve across versions without breaking existing wallets.

use crate::config;
use crate::errors::{WalletError, WalletResult};

/// A decrypt-ready encrypted mnemonic blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMnemonic {
    /// Blob format version.
    pub version: u8,
    /// Argon2id time cost used to derive the key that encrypted this blob.
    pub argon2_time_cost: u32,
    /// Argon2id memory cost (KiB) used to derive the key that encrypted this blob.
    pub argon2_memory_kib: u32,
    /// Argon2id parallelism used to derive the key that encrypted this blob.
    pub argon2_parallelism: u32,
    /// Argon2id salt, fixed length per [`config::crypto::SALT_LENGTH`].
    pub salt: Vec<u8>,
    /// AES-GCM nonce, fixed length per [`config::crypto::NONCE_LENGTH`].
    pub nonce: Vec<u8>,
    /// AES-GCM ciphertext, including the trailing authentication tag.
    pub ciphertext: Vec<u8>,
}

impl EncryptedMnemonic {
    /// Serialize to the binary layout: `version‖time‖memory‖threads‖salt‖nonce‖ciphertext`,
    /// all integers big-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 12 + self.salt.len() + self.nonce.len() + self.ciphertext.len());
        out.push(self.version);
        out.extend_from_slice(&self.argon2_time_cost.to_be_bytes());
        out.extend_from_slice(&self.argon2_memory_kib.to_be_bytes());
        out.extend_from_slice(&self.argon2_parallelism.to_be_bytes());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse the binary layout produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        let header_len = 1 + 4 + 4 + 4;
        let salt_len = config::crypto::SALT_LENGTH;
        let nonce_len = config::crypto::NONCE_LENGTH;
        let min_len = header_len + salt_len + nonce_len + config::crypto::TAG_LENGTH;

        if bytes.len() < min_len {
            return Err(WalletError::InvalidArgument {
                message: "encrypted mnemonic blob truncated".to_string(),
            });
        }

        let version = bytes[0];
        let mut pos = 1;
        let argon2_time_cost = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap());
        pos += 4;
        let argon2_memory_kib = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap());
        pos += 4;
        let argon2_parallelism = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap());
        pos += 4;
        let salt = bytes[pos..pos + salt_len].to_vec();
        pos += salt_len;
        let nonce = bytes[pos..pos + nonce_len].to_vec();
        pos += nonce_len;
        let ciphertext = bytes[pos..].to_vec();

        if ciphertext.len() < config::crypto::TAG_LENGTH {
            return Err(WalletError::InvalidArgument {
                message: "encrypted mnemonic ciphertext shorter than the AEAD tag".to_string(),
            });
        }

        Ok(Self {
            version,
            argon2_time_cost,
            argon2_memory_kib,
            argon2_parallelism,
            salt,
            nonce,
            ciphertext,
        })
    }
}
