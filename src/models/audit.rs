//! # Audit Event
//!
//! One newline-delimited JSON object per line in `<wallet_id>/audit.log`.
//! The file is append-only; the core never edits or reorders lines.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Audit event kinds emitted by [`crate::services::wallet_service::WalletService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    /// A wallet was created.
    WalletCreate,
    /// A wallet was imported from an existing mnemonic.
    WalletImport,
    /// An unlock attempt succeeded.
    UnlockSuccess,
    /// An unlock attempt failed.
    UnlockFailure,
    /// Addresses were (re-)derived.
    GenerateAddresses,
    /// Addresses were exported to a file.
    ExportAddresses,
    /// A wallet's human label changed.
    WalletRename,
}

/// A single audit log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event instant, RFC 3339.
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Event kind.
    pub event_type: AuditEventType,
    /// Wallet the event concerns, or `"(none)"` when not applicable.
    pub wallet_id: String,
    /// Open map of event-specific, non-sensitive details.
    pub details: Value,
}

impl AuditEvent {
    /// Construct an event stamped with the current instant.
    ///
    /// `details` must never contain passwords, passphrases, mnemonics, or
    /// derived private-key material; callers are responsible for that
    /// contract since this type cannot enforce it structurally.
    pub fn new(event_type: AuditEventType, wallet_id: impl Into<String>, details: Value) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            event_type,
            wallet_id: wallet_id.into(),
            details,
        }
    }

    /// Serialize as a single NDJSON line, without a trailing newline.
    pub fn to_ndjson_line(&self) -> crate::errors::WalletResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ndjson_line_has_no_newline() {
        let event = AuditEvent::new(AuditEventType::WalletCreate, "abc", json!({"wordCount": 12}));
        let line = event.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("WALLET_CREATE"));
    }

    #[test]
    fn test_unspecified_wallet_id() {
        let event = AuditEvent::new(AuditEventType::UnlockFailure, "(none)", json!({}));
        assert_eq!(event.wallet_id, "(none)");
    }
}
