//! # Mnemonic Service
//!
//! BIP39 entropy-to-words generation, validation, and seed stretching.

use crate::config;
use crate::errors::{WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::RngCore;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Mnemonic generation and validation service.
pub struct MnemonicService;

impl MnemonicService {
    /// Generate a new random mnemonic phrase with `word_count ∈ {12, 24}`.
    pub fn generate(word_count: u8) -> WalletResult<SecureMnemonic> {
        let entropy_bits = config::entropy_bits_for_word_count(word_count).ok_or_else(|| {
            WalletError::InvalidMnemonic(format!("unsupported word count: {}", word_count))
        })?;

        let mut entropy = vec![0u8; entropy_bits / 8];
        rand::thread_rng().fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy(&entropy)
            .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

        entropy.zeroize();

        Ok(SecureMnemonic::new(mnemonic.to_string()))
    }

    /// Validate an existing mnemonic phrase: word count, dictionary membership,
    /// and BIP39 checksum.
    pub fn validate(mnemonic_str: &str) -> WalletResult<SecureMnemonic> {
        let mnemonic = Mnemonic::from_str(mnemonic_str.trim())
            .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

        let word_count = mnemonic_str.split_whitespace().count();
        if !config::is_supported_word_count(word_count as u8) {
            return Err(WalletError::InvalidMnemonic(format!(
                "unsupported word count: {}",
                word_count
            )));
        }

        Ok(SecureMnemonic::new(mnemonic.to_string()))
    }

    /// Stretch a mnemonic (plus optional passphrase) into a 64-byte seed via
    /// PBKDF2-HMAC-SHA512, 2048 iterations, salt `"mnemonic" ‖ passphrase`.
    pub fn to_seed(mnemonic: &SecureMnemonic, passphrase: Option<&str>) -> WalletResult<SecureSeed> {
        let bip39_mnemonic = Mnemonic::from_str(mnemonic.phrase())
            .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

        let seed = bip39_mnemonic.to_seed(passphrase.unwrap_or(""));
        Ok(SecureSeed::new(seed.to_vec()))
    }

    /// Classify a mnemonic's entropy strength by word count.
    pub fn check_mnemonic_strength(mnemonic: &SecureMnemonic) -> MnemonicStrength {
        match mnemonic.word_count() {
            12 => MnemonicStrength::Standard,
            24 => MnemonicStrength::High,
            _ => MnemonicStrength::Weak,
        }
    }

    /// The full BIP39 English word list, for host-side autocomplete.
    pub fn word_list() -> &'static [&'static str] {
        Language::English.word_list()
    }

    /// True when `word` appears in the BIP39 English word list.
    pub fn is_valid_word(word: &str) -> bool {
        Self::word_list().contains(&word)
    }

    /// Up to 10 words from the BIP39 list starting with `partial`.
    pub fn suggest_words(partial: &str) -> Vec<&'static str> {
        if partial.is_empty() {
            return Vec::new();
        }
        Self::word_list()
            .iter()
            .filter(|word| word.starts_with(partial))
            .take(10)
            .copied()
            .collect()
    }
}

/// A mnemonic phrase, zeroed on drop.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureMnemonic {
    phrase: String,
}

impl SecureMnemonic {
    /// Wrap a phrase for zeroize-on-drop handling.
    pub fn new(phrase: String) -> Self {
        Self { phrase }
    }

    /// Borrow the phrase text.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }

    /// Individual words, in order.
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }
}

/// A BIP39 seed, zeroed on drop.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureSeed {
    bytes: Vec<u8>,
}

impl SecureSeed {
    /// Wrap seed bytes for zeroize-on-drop handling.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Borrow the seed bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Seed length in bytes (64 for BIP39).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Mnemonic entropy-strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// Non-standard word count.
    Weak,
    /// 12 words, 128-bit entropy.
    Standard,
    /// 24 words, 256-bit entropy.
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generation_word_counts() {
        assert_eq!(MnemonicService::generate(12).unwrap().word_count(), 12);
        assert_eq!(MnemonicService::generate(24).unwrap().word_count(), 24);
        assert!(MnemonicService::generate(16).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(MnemonicService::validate(TEST_MNEMONIC).is_ok());
        assert!(MnemonicService::validate("invalid mnemonic phrase").is_err());
    }

    #[test]
    fn test_seed_matches_bip39_test_vector() {
        let mnemonic = MnemonicService::validate(TEST_MNEMONIC).unwrap();
        let seed = MnemonicService::to_seed(&mnemonic, None).unwrap();
        assert_eq!(seed.len(), 64);
        assert_eq!(
            hex::encode(seed.bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e"
        );
    }

    #[test]
    fn test_seed_changes_with_passphrase() {
        let mnemonic = MnemonicService::validate(TEST_MNEMONIC).unwrap();
        let no_pass = MnemonicService::to_seed(&mnemonic, None).unwrap();
        let with_pass = MnemonicService::to_seed(&mnemonic, Some("TREZOR")).unwrap();
        assert_ne!(no_pass.bytes(), with_pass.bytes());
    }

    #[test]
    fn test_word_validation_and_suggestions() {
        assert!(MnemonicService::is_valid_word("abandon"));
        assert!(!MnemonicService::is_valid_word("notaword"));
        let suggestions = MnemonicService::suggest_words("aba");
        assert!(suggestions.contains(&"abandon"));
        assert!(suggestions.len() <= 10);
    }
}
