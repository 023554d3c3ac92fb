//! # Utility Functions
//!
//! Small helpers shared across the storage, HD-derivation, and codec layers.

use crate::errors::{WalletError, WalletResult};
use std::path::Path;

/// Validate a file path for security (prevent path traversal via `..`).
pub fn validate_file_path<P: AsRef<Path>>(path: P) -> WalletResult<()> {
    let path = path.as_ref();
    for component in path.components() {
        if let std::path::Component::ParentDir = component {
            return Err(WalletError::InvalidArgument {
                message: format!("path traversal rejected: {}", path.display()),
            });
        }
    }
    Ok(())
}

/// Sanitize a wallet id or filename fragment to alphanumeric plus `-`/`_`.
pub fn sanitize_filename(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(*c, '-' | '_'))
        .collect()
}

/// One component of a parsed BIP44 path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathComponent {
    /// The plain (non-hardened) index.
    pub index: u32,
    /// Whether this component carries the hardening marker (`'`).
    pub hardened: bool,
}

impl PathComponent {
    /// The raw BIP32 index: `index + 2^31` when hardened.
    pub fn raw_index(&self) -> u32 {
        if self.hardened {
            self.index | 0x8000_0000
        } else {
            self.index
        }
    }
}

/// Parse a canonical BIP44 textual path, e.g. `m/44'/60'/0'/0/0`.
///
/// Only the canonical five-component form is accepted; anything else is
/// rejected with `ErrInvalidArgument` (surfaced by the HD key engine as
/// `ErrInvalidPath` semantics).
pub fn parse_bip44_path(path: &str) -> WalletResult<Vec<PathComponent>> {
    let rest = path.strip_prefix("m/").ok_or_else(|| WalletError::InvalidPath(path.to_string()))?;

    let mut components = Vec::new();
    for raw in rest.split('/') {
        if raw.is_empty() {
            return Err(WalletError::InvalidPath(path.to_string()));
        }
        let (digits, hardened) = match raw.strip_suffix('\'') {
            Some(d) => (d, true),
            None => (raw, false),
        };
        let index: u32 = digits
            .parse()
            .map_err(|_| WalletError::InvalidPath(path.to_string()))?;
        components.push(PathComponent { index, hardened });
    }

    if components.len() != 5 {
        return Err(WalletError::InvalidPath(path.to_string()));
    }

    Ok(components)
}

/// Build the canonical BIP44 textual path for a coin/account/change/index tuple.
pub fn format_bip44_path(coin_type: u32, account: u32, change: u32, index: u32) -> String {
    format!("{}/{}'/{}'/{}/{}", crate::config::BIP44_PREFIX, coin_type, account, change, index)
}

/// Format a duration for audit-log/export human-readable display.
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bip44_path() {
        let parsed = parse_bip44_path("m/44'/60'/0'/0/0").unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0].index, 44);
        assert!(parsed[0].hardened);
        assert_eq!(parsed[3].index, 0);
        assert!(!parsed[3].hardened);
        assert_eq!(parsed[0].raw_index(), 44 + (1u32 << 31));
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        assert!(parse_bip44_path("44'/60'/0'/0/0").is_err());
        assert!(parse_bip44_path("m/44'/60'//0/0").is_err());
        assert!(parse_bip44_path("m/44'/60'/a/0/0").is_err());
        assert!(parse_bip44_path("m/44'/60'/0'/0").is_err());
    }

    #[test]
    fn test_format_bip44_path() {
        assert_eq!(format_bip44_path(60, 0, 0, 0), "m/44'/60'/0'/0/0");
        assert_eq!(format_bip44_path(0, 0, 0, 5), "m/44'/0'/0'/0/5");
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("wallets/abc").is_ok());
        assert!(validate_file_path("../escape").is_err());
        assert!(validate_file_path("wallets/../../etc/passwd").is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("my-wallet_123"), "my-wallet_123");
        assert_eq!(sanitize_filename("../../../etc/passwd"), "etcpasswd");
    }
}
