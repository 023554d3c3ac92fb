//! # ArcSign Core
//!
//! HD multi-chain wallet engine: mnemonic lifecycle, BIP32/SLIP-10/sr25519/
//! EIP-2645 key derivation, a 54-chain address codec registry, and an FFI
//! boundary a desktop host can drive over JSON.
//!
//! The crate never calls into the network and never mutates an existing
//! wallet's seed or encryption parameters once written.
//!
//! ## Example
//!
//! ```rust,no_run
//! use arcsign_core::{CoreConfig, services::wallet_service::WalletService};
//!
//! let service = WalletService::new(CoreConfig::default());
//! let outcome = service.create("/tmp/arcsign-root", None, "Correct Horse Battery 9!", 12, false, None).unwrap();
//! println!("created wallet {}", outcome.wallet.id);
//! ```

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true
)]

pub mod config;
pub mod errors;
pub mod ffi;
pub mod models;
pub mod services;
pub mod utils;

pub use config::CoreConfig;
pub use errors::{WalletError, WalletResult};
pub use models::audit::AuditEvent;
pub use models::address::{AddressBook, DerivedAddress};
pub use models::encrypted::EncryptedMnemonic;
pub use models::wallet::Wallet;

/// Library version, identical to the value `GetVersion` returns across the FFI boundary.
pub const VERSION: &str = config::app::VERSION;

/// Install a `tracing` subscriber writing to stderr.
///
/// A cdylib must never install a global subscriber as a side effect of being
/// loaded, so this is exposed for the host (or a test harness) to call
/// explicitly, at most once per process. Calling it a second time is a no-op
/// error that callers may safely ignore.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
