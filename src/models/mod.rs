//! # Data Models
//!
//! Core data structures persisted or produced by the wallet engine.

pub mod address;
pub mod audit;
pub mod encrypted;
pub mod wallet;

pub use address::{AddressBook, DerivedAddress};
pub use audit::AuditEvent;
pub use encrypted::EncryptedMnemonic;
pub use wallet::Wallet;
