//! # FFI Boundary
//!
//! The nine functions a desktop host loads from this shared library, all
//! sharing the shape `(in_json_cstring) -> out_json_cstring_owned_by_library`.
//! Every mutating call is handed to the single worker in [`queue`]; the
//! response is always a well-formed envelope (see [`envelope`]), even for a
//! null pointer, malformed JSON, or a panic inside the wallet service.
//!
//! This is the one module in the crate permitted to use `unsafe`: dereferencing
//! a caller-owned C string cannot be expressed safely. Every other module
//! keeps the crate-level `#![deny(unsafe_code)]`.

#![allow(unsafe_code)]

mod envelope;
mod queue;

use crate::config::{self, CoreConfig};
use crate::errors::WalletError;
use crate::services::export::ExportFormat;
use crate::services::wallet_service::WalletService;
use envelope::{error_json, internal_error_json, success_json};
use serde::Deserialize;
use serde_json::json;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::OnceLock;

fn service() -> &'static WalletService {
    static SERVICE: OnceLock<WalletService> = OnceLock::new();
    SERVICE.get_or_init(|| WalletService::new(CoreConfig::default()))
}

/// Read a caller-owned, NUL-terminated UTF-8 request string. The pointer is
/// borrowed for the duration of this call only; the library never retains it.
///
/// # Safety
/// `ptr` must be null or point to a valid, NUL-terminated C string that
/// remains valid for the duration of this call.
unsafe fn read_request(ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err(error_json(&WalletError::InvalidArgument {
            message: "request pointer was null".to_string(),
        }));
    }
    CStr::from_ptr(ptr).to_str().map(str::to_string).map_err(|e| {
        error_json(&WalletError::InvalidArgument {
            message: format!("request was not valid UTF-8: {}", e),
        })
    })
}

/// Hand a JSON envelope string to the caller as a library-owned buffer. The
/// caller must release it with exactly one [`GoFree`] call.
fn respond(json: String) -> *mut c_char {
    CString::new(json)
        .unwrap_or_else(|_| {
            CString::new(internal_error_json("response contained an interior NUL byte"))
                .expect("the fallback response is a fixed ASCII literal")
        })
        .into_raw()
}

/// Parse a request body, returning an `ErrInvalidArgument` envelope on failure.
fn parse_request<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| {
        error_json(&WalletError::InvalidArgument {
            message: format!("malformed request: {}", e),
        })
    })
}

fn parse_export_format(raw: &str) -> Result<ExportFormat, String> {
    match raw {
        "json" => Ok(ExportFormat::Json),
        "csv" => Ok(ExportFormat::Csv),
        other => Err(error_json(&WalletError::InvalidArgument {
            message: format!("unsupported export format: {}", other),
        })),
    }
}

/// Release a response buffer previously returned by any exported function.
/// Calling it a second time on the same pointer, or on a pointer this
/// library did not return, is undefined behavior.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by one of this
/// module's functions, not yet passed to `GoFree`.
#[no_mangle]
pub unsafe extern "C" fn GoFree(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
}

/// Report the library name and version. Safe to call before any wallet
/// exists; the canonical first call a host makes to verify the library loaded.
#[no_mangle]
pub extern "C" fn GetVersion() -> *mut c_char {
    respond(success_json(json!({ "name": config::app::NAME, "version": crate::VERSION })))
}

#[derive(Deserialize)]
struct CreateWalletRequest {
    root: String,
    name: Option<String>,
    password: String,
    word_count: u8,
    #[serde(default)]
    uses_passphrase: bool,
    passphrase: Option<String>,
}

/// Generate a fresh mnemonic and persist a new wallet.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn CreateWallet(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: CreateWalletRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || {
        match service().create(
            &req.root,
            req.name.as_deref(),
            &req.password,
            req.word_count,
            req.uses_passphrase,
            req.passphrase.as_deref(),
        ) {
            Ok(outcome) => success_json(json!({ "wallet": outcome.wallet, "mnemonic": outcome.mnemonic })),
            Err(err) => error_json(&err),
        }
    })))
}

#[derive(Deserialize)]
struct ImportWalletRequest {
    root: String,
    name: Option<String>,
    password: String,
    mnemonic: String,
    #[serde(default)]
    uses_passphrase: bool,
    passphrase: Option<String>,
}

/// Restore a wallet from an existing mnemonic.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn ImportWallet(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: ImportWalletRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || {
        match service().import(
            &req.root,
            req.name.as_deref(),
            &req.password,
            &req.mnemonic,
            req.uses_passphrase,
            req.passphrase.as_deref(),
        ) {
            Ok(outcome) => success_json(json!({ "wallet": outcome.wallet, "mnemonic": outcome.mnemonic })),
            Err(err) => error_json(&err),
        }
    })))
}

#[derive(Deserialize)]
struct UnlockWalletRequest {
    root: String,
    wallet_id: String,
    password: String,
    passphrase: Option<String>,
}

/// Decrypt a wallet's mnemonic, subject to the rate limiter.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn UnlockWallet(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: UnlockWalletRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || {
        match service().unlock(&req.root, &req.wallet_id, &req.password, req.passphrase.as_deref()) {
            Ok(outcome) => success_json(json!({ "wallet": outcome.wallet, "mnemonic": outcome.mnemonic })),
            Err(err) => error_json(&err),
        }
    })))
}

#[derive(Deserialize)]
struct GenerateAddressesRequest {
    root: String,
    wallet_id: String,
    password: String,
    passphrase: Option<String>,
}

/// Re-derive and return a wallet's full address book.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn GenerateAddresses(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: GenerateAddressesRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || {
        match service().generate_addresses(&req.root, &req.wallet_id, &req.password, req.passphrase.as_deref()) {
            Ok(book) => success_json(json!({ "addresses": book.entries(), "total_chains": book.len() })),
            Err(err) => error_json(&err),
        }
    })))
}

#[derive(Deserialize)]
struct ExportWalletRequest {
    root: String,
    wallet_id: String,
    format: String,
}

/// Write the persisted address book to a JSON or CSV file and return its path.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn ExportWallet(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: ExportWalletRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };
    let format = match parse_export_format(&req.format) {
        Ok(format) => format,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || {
        let generated_at = chrono::Utc::now().format("%Y%m%d-%H%M%S").to_string();
        match service().export_addresses(&req.root, &req.wallet_id, format, &generated_at) {
            Ok(path) => success_json(json!({ "path": path })),
            Err(err) => error_json(&err),
        }
    })))
}

#[derive(Deserialize)]
struct RenameWalletRequest {
    root: String,
    wallet_id: String,
    new_name: String,
}

/// Change a wallet's human label.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn RenameWallet(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: RenameWalletRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || {
        match service().rename(&req.root, &req.wallet_id, &req.new_name) {
            Ok(wallet) => success_json(json!({ "wallet": wallet })),
            Err(err) => error_json(&err),
        }
    })))
}

#[derive(Deserialize)]
struct ListWalletsRequest {
    root: String,
}

/// Enumerate every wallet under `root`, without decrypting any of them.
///
/// # Safety
/// `request` must be null or a valid NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn ListWallets(request: *const c_char) -> *mut c_char {
    let raw = match read_request(request) {
        Ok(raw) => raw,
        Err(envelope) => return respond(envelope),
    };
    let req: ListWalletsRequest = match parse_request(&raw) {
        Ok(req) => req,
        Err(envelope) => return respond(envelope),
    };

    respond(queue::worker().submit(Box::new(move || match service().list_wallets(&req.root) {
        Ok(wallets) => success_json(json!({ "wallets": wallets })),
        Err(err) => error_json(&err),
    })))
}
