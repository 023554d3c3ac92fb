//! Response envelope shared by every exported function:
//! `{ success, data, error: { code, message, context } }`.

use crate::errors::WalletError;
use serde_json::{json, Value};

/// Render a success envelope around `data`.
pub fn success_json(data: Value) -> String {
    json!({ "success": true, "data": data, "error": Value::Null }).to_string()
}

/// Render an error envelope from a [`WalletError`], using its stable `code()`
/// and `context_json()`.
pub fn error_json(err: &WalletError) -> String {
    json!({
        "success": false,
        "data": Value::Null,
        "error": {
            "code": err.code(),
            "message": err.to_string(),
            "context": err.context_json(),
        },
    })
    .to_string()
}

/// Render an `ErrInternal` envelope for faults that never reach a [`WalletError`]
/// (malformed request JSON, a caught worker panic, an interior NUL byte).
pub fn internal_error_json(message: &str) -> String {
    json!({
        "success": false,
        "data": Value::Null,
        "error": { "code": "ErrInternal", "message": message, "context": {} },
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let rendered = success_json(json!({ "x": 1 }));
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"]["x"], 1);
        assert!(parsed["error"].is_null());
    }

    #[test]
    fn test_error_envelope_carries_code_and_context() {
        let err = WalletError::WalletExists("wallet-1".to_string());
        let rendered = error_json(&err);
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"]["code"], "ErrWalletExists");
        assert_eq!(parsed["error"]["context"]["conflicting_wallet_id"], "wallet-1");
    }
}
