//! # Wallet Service
//!
//! The orchestrating layer: coordinates [`CryptoService`], [`MnemonicService`],
//! the HD key engine, the coin registry and its codecs, the rate limiter, and
//! storage into the seven host-visible operations.

use crate::config::CoreConfig;
use crate::errors::{WalletError, WalletResult};
use crate::models::address::{AddressBook, DerivedAddress};
use crate::models::audit::{AuditEvent, AuditEventType};
use crate::models::wallet::Wallet;
use crate::services::codecs;
use crate::services::crypto::{CryptoService, SecureString};
use crate::services::export::{self, ExportFormat};
use crate::services::mnemonic::{MnemonicService, SecureMnemonic, SecureSeed};
use crate::services::rate_limiter::RateLimiter;
use crate::services::registry;
use crate::services::storage::Storage;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Outcome of `create` or `import`: the wallet record and the plaintext
/// mnemonic, returned to the caller exactly once.
pub struct CreateOutcome {
    /// The newly persisted wallet record.
    pub wallet: Wallet,
    /// The plaintext mnemonic phrase.
    pub mnemonic: String,
}

/// Outcome of a successful `unlock`.
#[derive(Debug)]
pub struct UnlockOutcome {
    /// The wallet record, with `last_accessed_at` refreshed.
    pub wallet: Wallet,
    /// The plaintext mnemonic phrase.
    pub mnemonic: String,
}

/// Coordinates every wallet-lifecycle operation against one storage root.
pub struct WalletService {
    config: CoreConfig,
    rate_limiter: RateLimiter,
}

impl WalletService {
    /// Build a service from host configuration.
    pub fn new(config: CoreConfig) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_max_attempts, Duration::from_secs(config.rate_limit_window_secs));
        Self { config, rate_limiter }
    }

    /// Generate a fresh mnemonic, derive every chain's address, encrypt, and
    /// persist a new wallet under `root`.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        root: &str,
        name: Option<&str>,
        password: &str,
        word_count: u8,
        uses_passphrase: bool,
        passphrase: Option<&str>,
    ) -> WalletResult<CreateOutcome> {
        info!(word_count, "creating a new wallet");
        CryptoService::validate_password(password)?;
        if uses_passphrase && passphrase.is_none() {
            warn!("create rejected: uses_passphrase set without a passphrase");
            return Err(WalletError::InvalidArgument {
                message: "uses_passphrase is true but no passphrase was supplied".to_string(),
            });
        }

        let mnemonic = MnemonicService::generate(word_count)?;
        let result = self.finish_create(root, name, password, mnemonic, uses_passphrase, passphrase, AuditEventType::WalletCreate);
        match &result {
            Ok(outcome) => info!(wallet_id = %outcome.wallet.id, "wallet created"),
            Err(err) => warn!(error = %err, "create failed"),
        }
        result
    }

    /// Validate and restore a wallet from an existing mnemonic, rejecting it
    /// when an existing wallet on `root` derives the identical seed.
    #[allow(clippy::too_many_arguments)]
    pub fn import(
        &self,
        root: &str,
        name: Option<&str>,
        password: &str,
        mnemonic: &str,
        uses_passphrase: bool,
        passphrase: Option<&str>,
    ) -> WalletResult<CreateOutcome> {
        info!("importing a wallet from a supplied mnemonic");
        CryptoService::validate_password(password)?;
        if uses_passphrase && passphrase.is_none() {
            warn!("import rejected: uses_passphrase set without a passphrase");
            return Err(WalletError::InvalidArgument {
                message: "uses_passphrase is true but no passphrase was supplied".to_string(),
            });
        }

        let mnemonic = MnemonicService::validate(mnemonic)?;
        let seed = MnemonicService::to_seed(&mnemonic, if uses_passphrase { passphrase } else { None })?;
        let book = derive_address_book(seed.bytes())?;

        let storage = Storage::new(root);
        for existing_id in storage.list_wallet_ids()? {
            if let Ok(existing) = load_wallet(&storage, &existing_id) {
                if let Some(existing_book) = &existing.address_book {
                    if existing_book.matches(&book) {
                        warn!(conflicting_wallet_id = %existing_id, "import rejected: seed already present under this root");
                        return Err(WalletError::WalletExists(existing_id));
                    }
                }
            }
        }

        let result = self.finish_create(root, name, password, mnemonic, uses_passphrase, passphrase, AuditEventType::WalletImport);
        match &result {
            Ok(outcome) => info!(wallet_id = %outcome.wallet.id, "wallet imported"),
            Err(err) => warn!(error = %err, "import failed"),
        }
        result
    }

    fn finish_create(
        &self,
        root: &str,
        name: Option<&str>,
        password: &str,
        mnemonic: SecureMnemonic,
        uses_passphrase: bool,
        passphrase: Option<&str>,
        event_type: AuditEventType,
    ) -> WalletResult<CreateOutcome> {
        let seed = MnemonicService::to_seed(&mnemonic, if uses_passphrase { passphrase } else { None })?;
        let book = derive_address_book(seed.bytes())?;

        let mut wallet = Wallet::new(name.map(str::to_string), mnemonic.word_count() as u8, uses_passphrase, book)?;

        let blob = CryptoService::encrypt_mnemonic(
            mnemonic.phrase(),
            password,
            self.config.argon2_time_cost,
            self.config.argon2_memory_kib,
            self.config.argon2_parallelism,
        )?;

        let storage = Storage::new(root);
        storage.create_wallet_dir(&wallet.id)?;
        storage.write_file_atomic(&storage.wallet_dir(&wallet.id).join("mnemonic.enc"), &blob.to_bytes())?;
        storage.write_file_atomic(&storage.wallet_dir(&wallet.id).join("wallet.json"), wallet.to_json()?.as_bytes())?;

        self.audit(&storage, &wallet.id, event_type, json!({ "word_count": wallet.word_count }))?;

        wallet.touch();
        storage.write_file_atomic(&storage.wallet_dir(&wallet.id).join("wallet.json"), wallet.to_json()?.as_bytes())?;

        Ok(CreateOutcome { wallet, mnemonic: mnemonic.phrase().to_string() })
    }

    /// Decrypt a wallet's mnemonic, subject to the rate limiter.
    ///
    /// `passphrase` is only consulted when the wallet record carries
    /// `uses_passphrase = true`; the BIP39 passphrase is never persisted, so
    /// a passphrase-protected wallet's owner must resupply it here.
    pub fn unlock(&self, root: &str, wallet_id: &str, password: &str, passphrase: Option<&str>) -> WalletResult<UnlockOutcome> {
        debug!(wallet_id, "unlocking wallet");
        let storage = Storage::new(root);
        let (mut wallet, mnemonic, _seed) = self.decrypt(&storage, wallet_id, password, passphrase)?;

        wallet.touch();
        storage.write_file_atomic(&storage.wallet_dir(wallet_id).join("wallet.json"), wallet.to_json()?.as_bytes())?;

        info!(wallet_id, "wallet unlocked");
        Ok(UnlockOutcome { wallet, mnemonic: mnemonic.as_str().to_string() })
    }

    /// Re-derive a wallet's full `AddressBook`, verifying it against the
    /// persisted one, upgrading legacy wallets that have none on record.
    pub fn generate_addresses(&self, root: &str, wallet_id: &str, password: &str, passphrase: Option<&str>) -> WalletResult<AddressBook> {
        debug!(wallet_id, "deriving address book");
        let storage = Storage::new(root);
        let (wallet, _mnemonic, seed) = self.decrypt(&storage, wallet_id, password, passphrase)?;

        let fresh = derive_address_book(seed.bytes())?;
        match &wallet.address_book {
            Some(persisted) if !persisted.matches(&fresh) => {
                warn!(wallet_id, "re-derived address book does not match the persisted record");
                return Err(WalletError::Internal(
                    "re-derived address book does not match the persisted record".to_string(),
                ));
            }
            Some(_) => {}
            None => {
                info!(wallet_id, "upgrading a legacy wallet record with a freshly derived address book");
                self.upgrade_address_book(root, wallet_id, &fresh)?;
            }
        }

        self.audit(&storage, wallet_id, AuditEventType::GenerateAddresses, json!({ "total_chains": fresh.len() }))?;
        info!(wallet_id, total_chains = fresh.len(), "address book derived");
        Ok(fresh)
    }

    /// Persist a freshly derived address book onto a legacy wallet record
    /// that predates address-book persistence.
    pub fn upgrade_address_book(&self, root: &str, wallet_id: &str, book: &AddressBook) -> WalletResult<()> {
        let storage = Storage::new(root);
        let mut wallet = load_wallet(&storage, wallet_id)?;
        wallet.address_book = Some(book.clone());
        storage.write_file_atomic(&storage.wallet_dir(wallet_id).join("wallet.json"), wallet.to_json()?.as_bytes())?;
        Ok(())
    }

    /// Write the persisted address book to `<id>/addresses/addresses-<timestamp>.<ext>`.
    pub fn export_addresses(&self, root: &str, wallet_id: &str, format: ExportFormat, generated_at: &str) -> WalletResult<String> {
        debug!(wallet_id, format = format.extension(), "exporting address book");
        let storage = Storage::new(root);
        let wallet = load_wallet(&storage, wallet_id)?;
        let book = wallet.address_book.as_ref().ok_or_else(|| {
            warn!(wallet_id, "export rejected: wallet has no persisted address book");
            WalletError::InvalidArgument { message: "wallet has no persisted address book; call generate_addresses first".to_string() }
        })?;

        let rendered = match format {
            ExportFormat::Json => export::to_json(wallet_id, wallet.name.as_deref(), generated_at, book)?,
            ExportFormat::Csv => export::to_csv(book),
        };

        let filename = format!("addresses-{}.{}", sanitize_timestamp(generated_at), format.extension());
        let path = storage.wallet_dir(wallet_id).join("addresses").join(&filename);
        storage.write_file_atomic(&path, rendered.as_bytes())?;

        self.audit(&storage, wallet_id, AuditEventType::ExportAddresses, json!({ "path": path.display().to_string() }))?;
        info!(wallet_id, path = %path.display(), "address book exported");
        Ok(path.display().to_string())
    }

    /// Every wallet under `root`, without decrypting any of them.
    pub fn list_wallets(&self, root: &str) -> WalletResult<Vec<Wallet>> {
        let storage = Storage::new(root);
        storage
            .list_wallet_ids()?
            .iter()
            .map(|id| load_wallet(&storage, id))
            .collect()
    }

    /// Rename a wallet in place.
    pub fn rename(&self, root: &str, wallet_id: &str, new_name: &str) -> WalletResult<Wallet> {
        info!(wallet_id, "renaming wallet");
        let storage = Storage::new(root);
        let mut wallet = load_wallet(&storage, wallet_id)?;
        wallet.rename(new_name)?;
        storage.write_file_atomic(&storage.wallet_dir(wallet_id).join("wallet.json"), wallet.to_json()?.as_bytes())?;
        self.audit(&storage, wallet_id, AuditEventType::WalletRename, json!({ "new_name": new_name }))?;
        Ok(wallet)
    }

    /// Decrypt a wallet's mnemonic against a password.
    ///
    /// The password is always attempted, regardless of the rate limiter's
    /// current state: a correct password must succeed and reset the window
    /// immediately, so the unlock right after a successful one is judged on
    /// its own merits rather than against a stale limit. Only a *wrong*
    /// password consults the limiter, which decides whether this failure is
    /// reported as `ErrAuthentication` or, once the window's budget is
    /// spent, `ErrRateLimited`.
    fn decrypt(
        &self,
        storage: &Storage,
        wallet_id: &str,
        password: &str,
        passphrase: Option<&str>,
    ) -> WalletResult<(Wallet, SecureString, SecureSeed)> {
        let wallet = load_wallet(storage, wallet_id)?;
        let blob_bytes = storage.read_file(&storage.wallet_dir(wallet_id).join("mnemonic.enc"))?;
        let blob = crate::models::encrypted::EncryptedMnemonic::from_bytes(&blob_bytes)?;

        match CryptoService::decrypt_mnemonic(&blob, password) {
            Ok(mnemonic) => {
                self.rate_limiter.reset(wallet_id)?;
                let secure_mnemonic = MnemonicService::validate(mnemonic.as_str())?;
                let seed = MnemonicService::to_seed(&secure_mnemonic, if wallet.uses_passphrase { passphrase } else { None })?;
                self.audit(storage, wallet_id, AuditEventType::UnlockSuccess, json!({}))?;
                Ok((wallet, mnemonic, seed))
            }
            Err(err) => {
                if let Err(limited) = self.rate_limiter.check(wallet_id) {
                    warn!(wallet_id, "unlock rejected: rate limit window exhausted");
                    self.audit(storage, wallet_id, AuditEventType::UnlockFailure, json!({ "reason": "rate_limited" }))?;
                    return Err(limited);
                }
                self.rate_limiter.record_failure(wallet_id)?;
                self.audit(storage, wallet_id, AuditEventType::UnlockFailure, json!({ "reason": "wrong_password" }))?;
                Err(err)
            }
        }
    }

    fn audit(&self, storage: &Storage, wallet_id: &str, event_type: AuditEventType, details: serde_json::Value) -> WalletResult<()> {
        let event = AuditEvent::new(event_type, wallet_id.to_string(), details);
        storage.append_audit_line(wallet_id, &event.to_ndjson_line()?)
    }
}

fn load_wallet(storage: &Storage, wallet_id: &str) -> WalletResult<Wallet> {
    if !storage.wallet_exists(wallet_id) {
        return Err(WalletError::WalletNotFound(wallet_id.to_string()));
    }
    let bytes = storage.read_file(&storage.wallet_dir(wallet_id).join("wallet.json"))?;
    let text = String::from_utf8(bytes).map_err(|e| WalletError::Internal(format!("wallet.json is not UTF-8: {}", e)))?;
    Wallet::from_json(&text)
}

fn derive_address_book(seed: &[u8]) -> WalletResult<AddressBook> {
    let entries: Vec<DerivedAddress> = registry::all()
        .iter()
        .map(|row| match codecs::encode(row, seed) {
            Ok(address) => DerivedAddress {
                rank: row.rank,
                symbol: row.symbol.to_string(),
                name: row.name.to_string(),
                category: row.category,
                coin_type: row.coin_type,
                key_type: row.key_type,
                derivation_path: crate::utils::format_bip44_path(row.coin_type, 0, 0, 0),
                address: address.clone(),
                error: None,
            },
            Err(err) => DerivedAddress {
                rank: row.rank,
                symbol: row.symbol.to_string(),
                name: row.name.to_string(),
                category: row.category,
                coin_type: row.coin_type,
                key_type: row.key_type,
                derivation_path: crate::utils::format_bip44_path(row.coin_type, 0, 0, 0),
                address: String::new(),
                error: Some(err.to_string()),
            },
        })
        .collect();
    AddressBook::from_entries(entries)
}

fn sanitize_timestamp(generated_at: &str) -> String {
    crate::utils::sanitize_filename(generated_at)
}
