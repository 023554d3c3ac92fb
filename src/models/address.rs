//! # Derived Address Model
//!
//! A single chain's result from a derive-all pass, and the ordered
//! collection of all 54 results that makes up a wallet's `AddressBook`.

use crate::errors::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

/// Chain category, as assigned by the coin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Chains with dedicated Layer-1 codecs (Bitcoin, Litecoin, ...).
    Base,
    /// Layer-2 networks.
    Layer2,
    /// Regional/national chains.
    Regional,
    /// Cosmos SDK / ADR-028 Bech32 chains.
    Cosmos,
    /// EVM-compatible chains other than Ethereum mainnet.
    AltEvm,
    /// Substrate/SS58 chains.
    Substrate,
    /// Anything not fitting the above.
    Custom,
}

/// Signature scheme a chain's key material uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyType {
    /// secp256k1 ECDSA.
    Secp256k1,
    /// Ed25519 (SLIP-10 derived).
    Ed25519,
    /// Substrate sr25519 (Schnorrkel).
    Sr25519,
    /// Starknet's Stark-curve scheme, derived via EIP-2645 grindKey from secp256k1.
    SchnorrSecp256k1,
}

/// One chain's outcome from a derive-all pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAddress {
    /// 1-based market-cap rank from the registry; also the sort key.
    pub rank: u32,
    /// Uppercase ticker symbol, e.g. `"BTC"`.
    pub symbol: String,
    /// Display name, e.g. `"Bitcoin"`.
    pub name: String,
    /// Registry category.
    pub category: Category,
    /// BIP44 coin-type integer used to build `derivation_path`.
    pub coin_type: u32,
    /// Signature scheme used to derive this chain's key.
    pub key_type: KeyType,
    /// Canonical textual BIP44 path, e.g. `m/44'/0'/0'/0/0`.
    pub derivation_path: String,
    /// Chain-native textual address. Empty iff `error` is present.
    pub address: String,
    /// Present iff this chain's codec failed; `address` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DerivedAddress {
    /// True when this entry carries a usable address rather than an error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered sequence of [`DerivedAddress`], sorted by `rank` ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    entries: Vec<DerivedAddress>,
}

impl AddressBook {
    /// An empty address book (used for legacy pre-v0.2 wallet records).
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a book from entries already produced in registry-rank order,
    /// re-sorting defensively and checking the uniqueness invariants.
    pub fn from_entries(mut entries: Vec<DerivedAddress>) -> WalletResult<Self> {
        entries.sort_by_key(|e| e.rank);
        let book = Self { entries };
        book.validate()?;
        Ok(book)
    }

    /// All entries, in rank order.
    pub fn entries(&self) -> &[DerivedAddress] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the book has no entries (legacy record).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of entries that produced a usable address.
    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_ok()).count()
    }

    /// Count of entries whose codec failed.
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_ok()).count()
    }

    /// Find an entry by ticker symbol.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&DerivedAddress> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Check the invariants: entries are rank-sorted, symbols and coin types
    /// are each unique.
    pub fn validate(&self) -> WalletResult<()> {
        let mut last_rank = 0u32;
        let mut seen_symbols = std::collections::HashSet::new();
        let mut seen_coin_types = std::collections::HashSet::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 && entry.rank < last_rank {
                return Err(WalletError::InvalidArgument {
                    message: "address book entries are not rank-sorted".to_string(),
                });
            }
            last_rank = entry.rank;

            if !seen_symbols.insert(entry.symbol.clone()) {
                return Err(WalletError::InvalidArgument {
                    message: format!("duplicate symbol in address book: {}", entry.symbol),
                });
            }
            if !seen_coin_types.insert(entry.coin_type) {
                return Err(WalletError::InvalidArgument {
                    message: format!("duplicate coin type in address book: {}", entry.coin_type),
                });
            }
        }
        Ok(())
    }

    /// Bit-for-bit comparison ignoring nothing; used to verify re-derivation
    /// against a persisted book per §4.7 `generate_addresses`.
    pub fn matches(&self, other: &AddressBook) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        self.entries.iter().zip(other.entries.iter()).all(|(a, b)| {
            a.rank == b.rank
                && a.symbol == b.symbol
                && a.coin_type == b.coin_type
                && a.derivation_path == b.derivation_path
                && a.address == b.address
                && a.error == b.error
        })
    }
}
