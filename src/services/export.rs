//! # Export Formatter
//!
//! Renders a wallet's [`AddressBook`] as pretty-printed JSON or CSV, in
//! `rank` order, deterministically for a given wallet.

use crate::errors::WalletResult;
use crate::models::address::AddressBook;
use serde_json::json;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON object.
    Json,
    /// CSV with a fixed header row.
    Csv,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Render `book` as a pretty-printed JSON export document.
pub fn to_json(wallet_id: &str, wallet_name: Option<&str>, generated_at: &str, book: &AddressBook) -> WalletResult<String> {
    let document = json!({
        "wallet_id": wallet_id,
        "wallet_name": wallet_name,
        "generated_at": generated_at,
        "total_chains": book.len(),
        "success_count": book.success_count(),
        "failed_count": book.failed_count(),
        "addresses": book.entries(),
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Render `book` as CSV: header row, then one row per chain in `rank` order.
pub fn to_csv(book: &AddressBook) -> String {
    let mut out = String::from("Rank,Symbol,Name,Category,Coin Type,Key Type,Derivation Path,Address,Error\n");
    for entry in book.entries() {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            entry.rank,
            csv_field(&entry.symbol),
            csv_field(&entry.name),
            csv_field(&serde_variant(&entry.category)),
            entry.coin_type,
            csv_field(&serde_variant(&entry.key_type)),
            csv_field(&entry.derivation_path),
            csv_field(&entry.address),
            csv_field(entry.error.as_deref().unwrap_or("")),
        ));
    }
    out
}

fn serde_variant<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
