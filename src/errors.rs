//! # Error Types
//!
//! Error taxonomy for the wallet core. Every variant carries a stable string
//! `code()` and a `context_json()` map so the FFI boundary can render the
//! uniform response envelope without inspecting error internals.

use serde_json::{json, Value};
use thiserror::Error;

/// Convenient result type alias.
pub type WalletResult<T> = Result<T, WalletError>;

/// Top-level error type for every wallet-core operation.
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    /// A request field is missing, malformed, or out of range.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable detail.
        message: String,
    },

    /// Password failed the strength policy.
    #[error("weak password: {0:?}")]
    WeakPassword(Vec<String>),

    /// Mnemonic failed BIP39 validation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// No wallet with that id exists under the storage root.
    #[error("wallet not found: {0}")]
    WalletNotFound(String),

    /// A wallet deriving the identical seed already exists under the root.
    #[error("wallet already exists: {0}")]
    WalletExists(String),

    /// AEAD tag verification failed: wrong password or tampered/corrupted blob.
    #[error("authentication failed")]
    Authentication,

    /// Too many failed unlock attempts within the sliding window.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited {
        /// Milliseconds until the window allows another attempt.
        retry_after_ms: u64,
    },

    /// Storage root is missing or not writable.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Not enough free space to complete an atomic write.
    #[error("storage full: needed {needed} bytes, {available} available")]
    StorageFull {
        /// Bytes the write needed.
        needed: u64,
        /// Bytes actually free.
        available: u64,
    },

    /// The FFI execution queue is at capacity.
    #[error("queue full")]
    QueueFull,

    /// A single address codec failed during derive-all. Non-fatal to the caller.
    #[error("address codec failed for {symbol}: {message}")]
    AddressCodec {
        /// Coin symbol the codec was formatting for.
        symbol: String,
        /// Failure detail.
        message: String,
    },

    /// An HD derivation path failed to parse or resolve.
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// A lower-level I/O failure not otherwise classified.
    #[error("I/O error: {0}")]
    Io(String),

    /// A lower-level JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(String),

    /// An uncaught panic or bug, caught at the FFI boundary.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Stable error code for programmatic handling across the FFI boundary.
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::InvalidArgument { .. } => "ErrInvalidArgument",
            WalletError::WeakPassword(_) => "ErrWeakPassword",
            WalletError::InvalidMnemonic(_) => "ErrInvalidMnemonic",
            WalletError::WalletNotFound(_) => "ErrWalletNotFound",
            WalletError::WalletExists(_) => "ErrWalletExists",
            WalletError::Authentication => "ErrAuthentication",
            WalletError::RateLimited { .. } => "ErrRateLimited",
            WalletError::StorageUnavailable(_) => "ErrStorageUnavailable",
            WalletError::StorageFull { .. } => "ErrStorageFull",
            WalletError::QueueFull => "ErrQueueFull",
            WalletError::AddressCodec { .. } => "ErrAddressCodec",
            WalletError::InvalidPath(_) => "ErrInvalidArgument",
            WalletError::Io(_) => "ErrStorageUnavailable",
            WalletError::Json(_) => "ErrInvalidArgument",
            WalletError::Internal(_) => "ErrInternal",
        }
    }

    /// Machine-readable context attached to the FFI response envelope's `error.context`.
    pub fn context_json(&self) -> Value {
        match self {
            WalletError::WeakPassword(requirements) => json!({ "requirements": requirements }),
            WalletError::WalletNotFound(id) => json!({ "wallet_id": id }),
            WalletError::WalletExists(id) => json!({ "conflicting_wallet_id": id }),
            WalletError::RateLimited { retry_after_ms } => {
                json!({ "retry_after_ms": retry_after_ms })
            }
            WalletError::StorageFull { needed, available } => {
                json!({ "needed_bytes": needed, "available_bytes": available })
            }
            WalletError::AddressCodec { symbol, .. } => json!({ "symbol": symbol }),
            _ => json!({}),
        }
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Json(err.to_string())
    }
}
