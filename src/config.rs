//! # Configuration
//!
//! Core configuration constants and the host-supplied [`CoreConfig`].

/// Default HD derivation path prefix shared by every coin (BIP44, minus the final index).
pub const BIP44_PREFIX: &str = "m/44'";

/// Default keystore/wallet directory name when a host has no preference of its own.
pub const DEFAULT_WALLET_DIR: &str = ".arcsign";

/// Cryptographic configuration.
pub mod crypto {
    /// Argon2id defaults per the wallet format's on-disk contract.
    pub const DEFAULT_ARGON2_TIME_COST: u32 = 4;
    pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 262_144;
    pub const DEFAULT_ARGON2_PARALLELISM: u32 = 4;

    /// Derived key / output length for Argon2id and the AES-256 key.
    pub const KEY_LENGTH: usize = 32;

    /// Salt length for the Argon2id KDF.
    pub const SALT_LENGTH: usize = 16;

    /// AES-GCM nonce length.
    pub const NONCE_LENGTH: usize = 12;

    /// AES-GCM authentication tag length, appended to the ciphertext.
    pub const TAG_LENGTH: usize = 16;

    /// Minimum password length accepted by the strength policy.
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Maximum password length accepted by the strength policy.
    pub const MAX_PASSWORD_LENGTH: usize = 1024;

    /// Encrypted mnemonic blob format version.
    pub const BLOB_VERSION: u8 = 1;
}

/// File system configuration.
pub mod fs {
    /// File mode for wallet.json, mnemonic.enc, audit.log, and exported address files.
    pub const FILE_PERMISSIONS: u32 = 0o600;

    /// Directory mode for the per-wallet directory and the `addresses/` subdirectory.
    pub const DIR_PERMISSIONS: u32 = 0o700;

    /// Maximum size accepted when reading any core-managed file, to bound memory use
    /// against a corrupted or hostile storage root.
    pub const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;
}

/// BIP39 configuration.
pub mod bip39 {
    /// Supported mnemonic word counts.
    pub const SUPPORTED_WORD_COUNTS: &[u8] = &[12, 24];

    /// Entropy bits for the two supported word counts.
    pub const ENTROPY_BITS_12: usize = 128;
    pub const ENTROPY_BITS_24: usize = 256;
}

/// Rate limiter configuration.
pub mod rate_limit {
    use std::time::Duration;

    /// Failed unlock attempts allowed per window before `ErrRateLimited`.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Sliding window length.
    pub const WINDOW: Duration = Duration::from_secs(60);
}

/// FFI execution queue configuration.
pub mod ffi {
    /// Bounded queue capacity; a submission beyond this returns `ErrQueueFull`.
    pub const QUEUE_CAPACITY: usize = 100;
}

/// Application metadata.
pub mod app {
    /// Library name as surfaced by `GetVersion`.
    pub const NAME: &str = "ArcSign Core";

    /// Library version, taken from the crate manifest at compile time.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Host-configurable parameters for newly created wallets and the FFI execution layer.
///
/// Parameters used to *decrypt* an existing wallet always come from the persisted
/// [`crate::models::encrypted::EncryptedMnemonic`] blob, never from this struct.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Argon2id time cost used when encrypting a newly created or imported wallet.
    pub argon2_time_cost: u32,
    /// Argon2id memory cost (KiB) used when encrypting a newly created or imported wallet.
    pub argon2_memory_kib: u32,
    /// Argon2id parallelism used when encrypting a newly created or imported wallet.
    pub argon2_parallelism: u32,
    /// Maximum failed-unlock attempts per rate-limiter window.
    pub rate_limit_max_attempts: u32,
    /// Rate-limiter sliding window, in seconds.
    pub rate_limit_window_secs: u64,
    /// Capacity of the FFI execution queue.
    pub ffi_queue_capacity: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            argon2_time_cost: crypto::DEFAULT_ARGON2_TIME_COST,
            argon2_memory_kib: crypto::DEFAULT_ARGON2_MEMORY_KIB,
            argon2_parallelism: crypto::DEFAULT_ARGON2_PARALLELISM,
            rate_limit_max_attempts: rate_limit::MAX_ATTEMPTS,
            rate_limit_window_secs: rate_limit::WINDOW.as_secs(),
            ffi_queue_capacity: ffi::QUEUE_CAPACITY,
        }
    }
}

/// Validate a word count against the supported set.
pub fn is_supported_word_count(count: u8) -> bool {
    bip39::SUPPORTED_WORD_COUNTS.contains(&count)
}

/// Entropy bits required for a supported word count.
pub fn entropy_bits_for_word_count(count: u8) -> Option<usize> {
    match count {
        12 => Some(bip39::ENTROPY_BITS_12),
        24 => Some(bip39::ENTROPY_BITS_24),
        _ => None,
    }
}
