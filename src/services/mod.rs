//! # Services
//!
//! Business logic layer: cryptographic primitives, mnemonic lifecycle, HD
//! key derivation, the coin registry and its address codecs, the rate
//! limiter, the storage adapter, and the orchestrating wallet service.

pub mod codecs;
pub mod crypto;
pub mod export;
pub mod hdkey;
pub mod mnemonic;
pub mod rate_limiter;
pub mod registry;
pub mod storage;
pub mod wallet_service;

pub use crypto::CryptoService;
pub use mnemonic::MnemonicService;
pub use rate_limiter::RateLimiter;
pub use wallet_service::WalletService;
