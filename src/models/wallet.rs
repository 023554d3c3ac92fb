//! # Wallet Record
//!
//! The persistent, non-sensitive metadata for a created wallet. Never holds
//! mnemonic, seed, or private-key material — that lives only in
//! [`crate::models::encrypted::EncryptedMnemonic`] and in transient buffers.

use crate::config;
use crate::errors::{WalletError, WalletResult};
use crate::models::address::AddressBook;
use serde::{Deserialize, Serialize};

/// A created wallet's on-disk record (`<root>/<id>/wallet.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Stable unique identifier; also the wallet's directory name.
    pub id: String,
    /// Optional human label, at most 64 characters.
    pub name: Option<String>,
    /// Creation instant, RFC 3339.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last successful unlock instant, RFC 3339.
    pub last_accessed_at: chrono::DateTime<chrono::Utc>,
    /// Mnemonic word count, fixed at creation.
    pub word_count: u8,
    /// Whether a BIP39 passphrase was supplied at creation. The passphrase
    /// itself is never persisted.
    pub uses_passphrase: bool,
    /// Derived addresses, absent only for legacy pre-v0.2 records.
    pub address_book: Option<AddressBook>,
}

impl Wallet {
    /// Construct a freshly created wallet record with a new random id.
    pub fn new(
        name: Option<String>,
        word_count: u8,
        uses_passphrase: bool,
        address_book: AddressBook,
    ) -> WalletResult<Self> {
        if !config::is_supported_word_count(word_count) {
            return Err(WalletError::InvalidArgument {
                message: format!("unsupported word count: {}", word_count),
            });
        }
        if let Some(ref n) = name {
            validate_name(n)?;
        }

        let now = chrono::Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            created_at: now,
            last_accessed_at: now,
            word_count,
            uses_passphrase,
            address_book: Some(address_book),
        })
    }

    /// Validate the invariants required of any wallet record loaded from disk.
    pub fn validate(&self) -> WalletResult<()> {
        if self.id.is_empty() {
            return Err(WalletError::InvalidArgument {
                message: "wallet id must not be empty".to_string(),
            });
        }
        if !config::is_supported_word_count(self.word_count) {
            return Err(WalletError::InvalidArgument {
                message: format!("unsupported word count: {}", self.word_count),
            });
        }
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(ref book) = self.address_book {
            book.validate()?;
        }
        Ok(())
    }

    /// Apply a new human label, validating its length.
    pub fn rename(&mut self, new_name: &str) -> WalletResult<()> {
        validate_name(new_name)?;
        self.name = Some(new_name.to_string());
        Ok(())
    }

    /// Stamp `last_accessed_at` to the current instant, called on a successful unlock.
    pub fn touch(&mut self) {
        self.last_accessed_at = chrono::Utc::now();
    }

    /// Serialize to pretty-printed JSON, the format written to `wallet.json`.
    pub fn to_json(&self) -> WalletResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from the JSON format written by [`Self::to_json`].
    pub fn from_json(json: &str) -> WalletResult<Self> {
        let wallet: Self = serde_json::from_str(json)?;
        wallet.validate()?;
        Ok(wallet)
    }
}

fn validate_name(name: &str) -> WalletResult<()> {
    if name.is_empty() || name.chars().count() > 64 {
        return Err(WalletError::InvalidArgument {
            message: "wallet name must be 1-64 characters".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wallet_has_unique_id() {
        let a = Wallet::new(None, 12, false, AddressBook::new()).unwrap();
        let b = Wallet::new(None, 12, false, AddressBook::new()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.last_accessed_at);
    }

    #[test]
    fn test_rejects_unsupported_word_count() {
        let result = Wallet::new(None, 18, false, AddressBook::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_overlong_name() {
        let long_name = "x".repeat(65);
        let result = Wallet::new(Some(long_name), 12, false, AddressBook::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_rename() {
        let mut wallet = Wallet::new(None, 12, false, AddressBook::new()).unwrap();
        wallet.rename("my wallet").unwrap();
        assert_eq!(wallet.name.as_deref(), Some("my wallet"));
        assert!(wallet.rename("").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let wallet = Wallet::new(Some("test".to_string()), 24, true, AddressBook::new()).unwrap();
        let json = wallet.to_json().unwrap();
        let restored = Wallet::from_json(&json).unwrap();
        assert_eq!(wallet.id, restored.id);
        assert_eq!(wallet.word_count, restored.word_count);
    }
}
