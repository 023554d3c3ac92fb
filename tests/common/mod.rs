//! # Common Test Utilities
//!
//! Shared fixtures for the contract and integration suites: an isolated
//! temporary storage root plus a `CoreConfig` tuned for fast (not
//! production-strength) Argon2id parameters, so the suites stay fast without
//! touching the cryptographic pipeline's shape.

use arcsign_core::config::CoreConfig;
use arcsign_core::services::wallet_service::WalletService;
use tempfile::TempDir;

/// An isolated storage root and a wallet service configured for testing.
pub struct TestWallet {
    pub temp_dir: TempDir,
    pub service: WalletService,
}

impl TestWallet {
    /// Build a fresh isolated fixture: a new temp directory and a service
    /// with cheap KDF parameters.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
            service: WalletService::new(fast_config()),
        }
    }

    /// The storage root path as a string, as the service's methods expect.
    pub fn root(&self) -> &str {
        self.temp_dir.path().to_str().expect("temp dir path was not valid UTF-8")
    }
}

/// Argon2id parameters cheap enough for a test suite, not for production use.
pub fn fast_config() -> CoreConfig {
    CoreConfig {
        argon2_time_cost: 2,
        argon2_memory_kib: 8192,
        argon2_parallelism: 1,
        ..CoreConfig::default()
    }
}

/// Test fixture constants.
pub mod test_data {
    /// The canonical BIP39 test-vector mnemonic (12 words, all-zero entropy).
    pub const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    /// A password satisfying the strength policy (length, case, digit, symbol).
    pub const TEST_PASSWORD: &str = "Correct Horse Battery 9!";

    /// A second, distinct valid password, for negative-path tests.
    pub const OTHER_PASSWORD: &str = "Another Horse Battery 7!";
}
