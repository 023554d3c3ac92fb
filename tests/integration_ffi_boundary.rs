//! Integration tests driving the crate exclusively through its exported
//! `extern "C"` functions, the way a desktop host would: JSON request in,
//! JSON envelope out, every buffer paired with exactly one `GoFree`.

use arcsign_core::ffi::{CreateWallet, ExportWallet, GenerateAddresses, GetVersion, GoFree, ListWallets, RenameWallet, UnlockWallet};
use serde_json::{json, Value};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use tempfile::TempDir;

unsafe fn call(f: unsafe extern "C" fn(*const c_char) -> *mut c_char, request: &Value) -> Value {
    let c_request = CString::new(request.to_string()).unwrap();
    let out = f(c_request.as_ptr());
    let text = CStr::from_ptr(out).to_str().unwrap().to_string();
    let parsed = serde_json::from_str(&text).unwrap();
    GoFree(out);
    parsed
}

const PASSWORD: &str = "Correct Horse Battery 9!";

#[test]
fn get_version_reports_a_name_and_a_version_without_touching_storage() {
    let out = GetVersion();
    let text = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], true);
    assert!(parsed["data"]["name"].is_string());
    assert!(parsed["data"]["version"].is_string());
    unsafe { GoFree(out) };
}

#[test]
fn every_exported_operation_round_trips_through_json_envelopes() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_str().unwrap();

    let created = unsafe {
        call(
            CreateWallet,
            &json!({ "root": root, "name": "FFI Wallet", "password": PASSWORD, "word_count": 12 }),
        )
    };
    assert_eq!(created["success"], true);
    let wallet_id = created["data"]["wallet"]["id"].as_str().unwrap().to_string();
    assert!(created["data"]["mnemonic"].as_str().unwrap().split_whitespace().count() == 12);

    let addresses = unsafe {
        call(
            GenerateAddresses,
            &json!({ "root": root, "wallet_id": wallet_id, "password": PASSWORD }),
        )
    };
    assert_eq!(addresses["success"], true);
    assert_eq!(addresses["data"]["total_chains"], 54);

    let exported = unsafe {
        call(ExportWallet, &json!({ "root": root, "wallet_id": wallet_id, "format": "csv" }))
    };
    assert_eq!(exported["success"], true);
    assert!(exported["data"]["path"].as_str().unwrap().ends_with(".csv"));

    let renamed = unsafe {
        call(
            RenameWallet,
            &json!({ "root": root, "wallet_id": wallet_id, "new_name": "Renamed via FFI" }),
        )
    };
    assert_eq!(renamed["success"], true);
    assert_eq!(renamed["data"]["wallet"]["name"], "Renamed via FFI");

    let listed = unsafe { call(ListWallets, &json!({ "root": root })) };
    assert_eq!(listed["success"], true);
    assert_eq!(listed["data"]["wallets"].as_array().unwrap().len(), 1);

    let unlocked = unsafe {
        call(
            UnlockWallet,
            &json!({ "root": root, "wallet_id": wallet_id, "password": PASSWORD }),
        )
    };
    assert_eq!(unlocked["success"], true);
    assert_eq!(unlocked["data"]["mnemonic"], created["data"]["mnemonic"]);
}

#[test]
fn a_wrong_password_across_the_boundary_yields_a_stable_error_code_not_a_crash() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_str().unwrap();

    let created = unsafe {
        call(CreateWallet, &json!({ "root": root, "password": PASSWORD, "word_count": 12 }))
    };
    let wallet_id = created["data"]["wallet"]["id"].as_str().unwrap().to_string();

    let failed = unsafe {
        call(
            UnlockWallet,
            &json!({ "root": root, "wallet_id": wallet_id, "password": "wrong password" }),
        )
    };
    assert_eq!(failed["success"], false);
    assert_eq!(failed["error"]["code"], "ErrAuthentication");
}

#[test]
fn unknown_export_format_is_rejected_before_the_worker_queue_ever_sees_it() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_str().unwrap();

    let created = unsafe {
        call(CreateWallet, &json!({ "root": root, "password": PASSWORD, "word_count": 12 }))
    };
    let wallet_id = created["data"]["wallet"]["id"].as_str().unwrap().to_string();

    let result = unsafe {
        call(ExportWallet, &json!({ "root": root, "wallet_id": wallet_id, "format": "xml" }))
    };
    assert_eq!(result["success"], false);
    assert_eq!(result["error"]["code"], "ErrInvalidArgument");
}
