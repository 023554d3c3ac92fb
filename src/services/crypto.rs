//! # Cryptographic Service
//!
//! Argon2id key derivation and AES-256-GCM authenticated encryption for the
//! mnemonic at-rest format. The KDF parameters used for a given ciphertext
//! travel with it ([`EncryptedMnemonic`]); `CoreConfig` only supplies the
//! parameters used when encrypting a newly created or imported wallet.

use crate::config;
use crate::errors::{WalletError, WalletResult};
use crate::models::encrypted::EncryptedMnemonic;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Cryptographic service for mnemonic encryption/decryption.
pub struct CryptoService;

impl CryptoService {
    /// Encrypt a plaintext mnemonic phrase with a password, producing a
    /// ready-to-persist blob.
    pub fn encrypt_mnemonic(
        mnemonic: &str,
        password: &str,
        time_cost: u32,
        memory_kib: u32,
        parallelism: u32,
    ) -> WalletResult<EncryptedMnemonic> {
        let mut salt = vec![0u8; config::crypto::SALT_LENGTH];
        let mut nonce_bytes = vec![0u8; config::crypto::NONCE_LENGTH];
        rand::thread_rng().fill_bytes(&mut salt);
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        let mut key_bytes = vec![0u8; config::crypto::KEY_LENGTH];
        Self::derive_key_argon2(password.as_bytes(), &salt, time_cost, memory_kib, parallelism, &mut key_bytes)?;

        let key = Key::<Aes256Gcm>::from_slice(&key_bytes);
        let cipher = Aes256Gcm::new(key);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher.encrypt(nonce, mnemonic.as_bytes()).map_err(|e| {
            WalletError::Internal(format!("mnemonic encryption failed: {}", e))
        })?;

        key_bytes.zeroize();

        Ok(EncryptedMnemonic {
            version: config::crypto::BLOB_VERSION,
            argon2_time_cost: time_cost,
            argon2_memory_kib: memory_kib,
            argon2_parallelism: parallelism,
            salt,
            nonce: nonce_bytes,
            ciphertext,
        })
    }

    /// Decrypt a persisted blob, deriving the key with the Argon2id
    /// parameters stored inside it. Returns `ErrAuthentication` on any tag
    /// mismatch — wrong password, tampered blob, or mismatched parameters
    /// are indistinguishable by design.
    pub fn decrypt_mnemonic(blob: &EncryptedMnemonic, password: &str) -> WalletResult<SecureString> {
        let mut key_bytes = vec![0u8; config::crypto::KEY_LENGTH];
        Self::derive_key_argon2(
            password.as_bytes(),
            &blob.salt,
            blob.argon2_time_cost,
            blob.argon2_memory_kib,
            blob.argon2_parallelism,
            &mut key_bytes,
        )?;

        let key = Key::<Aes256Gcm>::from_slice(&key_bytes);
        let cipher = Aes256Gcm::new(key);
        let nonce = Nonce::from_slice(&blob.nonce);

        let plaintext = cipher
            .decrypt(nonce, blob.ciphertext.as_ref())
            .map_err(|_| WalletError::Authentication);

        key_bytes.zeroize();
        let mut plaintext = plaintext?;

        let mnemonic = String::from_utf8(plaintext.clone()).map_err(|_| WalletError::Authentication)?;
        plaintext.zeroize();

        Ok(SecureString::new(mnemonic))
    }

    /// Derive an Argon2id key of `output.len()` bytes.
    fn derive_key_argon2(
        password: &[u8],
        salt: &[u8],
        time_cost: u32,
        memory_kib: u32,
        parallelism: u32,
        output: &mut [u8],
    ) -> WalletResult<()> {
        let params = Params::new(memory_kib, time_cost, parallelism, Some(output.len()))
            .map_err(|e| WalletError::Internal(format!("invalid Argon2 parameters: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        argon2
            .hash_password_into(password, salt, output)
            .map_err(|e| WalletError::Internal(format!("Argon2 key derivation failed: {}", e)))
    }

    /// Validate password strength, returning every unmet requirement.
    pub fn validate_password(password: &str) -> WalletResult<()> {
        let mut requirements = Vec::new();

        if password.len() < config::crypto::MIN_PASSWORD_LENGTH {
            requirements.push(format!("at least {} characters", config::crypto::MIN_PASSWORD_LENGTH));
        }
        if password.len() > config::crypto::MAX_PASSWORD_LENGTH {
            requirements.push(format!("at most {} characters", config::crypto::MAX_PASSWORD_LENGTH));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            requirements.push("at least one lowercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            requirements.push("at least one uppercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            requirements.push("at least one digit".to_string());
        }
        if !password.chars().any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)) {
            requirements.push("at least one special character".to_string());
        }

        if !requirements.is_empty() {
            return Err(WalletError::WeakPassword(requirements));
        }
        Ok(())
    }

    /// Generate a random password satisfying [`Self::validate_password`].
    pub fn generate_password(length: usize) -> String {
        use rand::seq::SliceRandom;
        const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";
        let mut rng = rand::thread_rng();
        loop {
            let candidate: String = (0..length).map(|_| *CHARS.choose(&mut rng).unwrap() as char).collect();
            if Self::validate_password(&candidate).is_ok() {
                return candidate;
            }
        }
    }
}

/// A string that is overwritten with zeros before its memory is released.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    data: String,
}

impl SecureString {
    /// Wrap a string for zeroize-on-drop handling.
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<String> for SecureString {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}
