//! # Storage Adapter
//!
//! File-system access for the wallet directory layout:
//! `<root>/<wallet_id>/{wallet.json, mnemonic.enc, audit.log, addresses/}`.
//! Writes are atomic (temp file, flush, rename); every core-managed file is
//! mode `0600`, every directory `0700`.

use crate::config;
use crate::errors::{WalletError, WalletResult};
use crate::utils::{sanitize_filename, validate_file_path};
use std::ffi::CString;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// File-system adapter rooted at a host-supplied wallet storage directory.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open (without creating) the storage adapter at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// The per-wallet directory, `<root>/<wallet_id>`.
    pub fn wallet_dir(&self, wallet_id: &str) -> PathBuf {
        self.root.join(sanitize_filename(wallet_id))
    }

    /// True when a wallet directory with a `wallet.json` already exists.
    pub fn wallet_exists(&self, wallet_id: &str) -> bool {
        self.wallet_dir(wallet_id).join("wallet.json").is_file()
    }

    /// Create `<root>/<wallet_id>` and its `addresses/` subdirectory at mode `0700`.
    pub fn create_wallet_dir(&self, wallet_id: &str) -> WalletResult<PathBuf> {
        let dir = self.wallet_dir(wallet_id);
        validate_file_path(&dir)?;
        fs::create_dir_all(dir.join("addresses"))?;
        set_dir_permissions(&dir)?;
        set_dir_permissions(&dir.join("addresses"))?;
        Ok(dir)
    }

    /// Read a core-managed file, rejecting anything larger than [`config::fs::MAX_FILE_SIZE`].
    pub fn read_file(&self, path: &Path) -> WalletResult<Vec<u8>> {
        validate_file_path(path)?;
        let metadata = fs::metadata(path)?;
        if metadata.len() > config::fs::MAX_FILE_SIZE {
            return Err(WalletError::StorageUnavailable(format!(
                "{} exceeds the maximum readable file size",
                path.display()
            )));
        }
        let mut file = File::open(path)?;
        let mut contents = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Atomically write `contents` to `path` at mode `0600`: write to a
    /// sibling temp file, flush, then rename over the destination.
    pub fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> WalletResult<()> {
        validate_file_path(path)?;
        let parent = path.parent().ok_or_else(|| {
            WalletError::StorageUnavailable(format!("{} has no parent directory", path.display()))
        })?;
        check_free_space(parent, contents.len() as u64)?;

        let temp_path = path.with_extension("tmp");
        {
            let mut temp_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            temp_file.write_all(contents)?;
            temp_file.flush()?;
            temp_file.sync_all()?;
        }
        set_file_permissions(&temp_path)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Append one NDJSON line to `<wallet_dir>/audit.log`, creating it at mode `0600`.
    pub fn append_audit_line(&self, wallet_id: &str, line: &str) -> WalletResult<()> {
        let path = self.wallet_dir(wallet_id).join("audit.log");
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        set_file_permissions(&path)?;
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    /// Every wallet id with a `wallet.json` directly under `root`.
    pub fn list_wallet_ids(&self) -> WalletResult<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_dir() && entry.path().join("wallet.json").is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    ids.push(name.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// The storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn set_file_permissions(path: &Path) -> WalletResult<()> {
    let permissions = fs::Permissions::from_mode(config::fs::FILE_PERMISSIONS);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

fn set_dir_permissions(path: &Path) -> WalletResult<()> {
    let permissions = fs::Permissions::from_mode(config::fs::DIR_PERMISSIONS);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

/// Available free space on the filesystem backing `dir`, in bytes, via
/// POSIX `statvfs`.
fn free_space_bytes(dir: &Path) -> WalletResult<u64> {
    let c_path = CString::new(dir.as_os_str().as_bytes())
        .map_err(|_| WalletError::StorageUnavailable(format!("{} contains a NUL byte", dir.display())))?;

    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: `c_path` is a NUL-terminated byte string built from a valid
    // `Path`; `stat.as_mut_ptr()` points at enough space for `statvfs` to
    // fill, per its libc contract.
    #[allow(unsafe_code)]
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(WalletError::StorageUnavailable(format!(
            "statvfs failed for {}: {}",
            dir.display(),
            std::io::Error::last_os_error()
        )));
    }
    #[allow(unsafe_code)]
    let stat = unsafe { stat.assume_init() };
    Ok(stat.f_bavail as u64 * stat.f_frsize as u64)
}

/// Free-space guard invoked before every atomic write. Best-effort: when
/// `statvfs` itself fails (non-POSIX platform, path not yet visible to the
/// filesystem), the write is allowed to proceed rather than blocked on a
/// check that couldn't be answered.
fn check_free_space(dir: &Path, needed: u64) -> WalletResult<()> {
    match free_space_bytes(dir) {
        Ok(available) if available < needed => Err(WalletError::StorageFull { needed, available }),
        Ok(_) | Err(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_detect_wallet_dir() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path());
        assert!(!storage.wallet_exists("wallet-1"));
        storage.create_wallet_dir("wallet-1").unwrap();
        assert!(storage.wallet_dir("wallet-1").join("addresses").is_dir());
    }

    #[test]
    fn test_atomic_write_and_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path());
        storage.create_wallet_dir("wallet-1").unwrap();
        let path = storage.wallet_dir("wallet-1").join("wallet.json");

        storage.write_file_atomic(&path, b"{\"id\":\"wallet-1\"}").unwrap();
        let contents = storage.read_file(&path).unwrap();
        assert_eq!(contents, b"{\"id\":\"wallet-1\"}");

        let metadata = fs::metadata(&path).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, config::fs::FILE_PERMISSIONS);
    }

    #[test]
    fn test_audit_log_appends_lines() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path());
        storage.create_wallet_dir("wallet-1").unwrap();

        storage.append_audit_line("wallet-1", "{\"event\":1}").unwrap();
        storage.append_audit_line("wallet-1", "{\"event\":2}").unwrap();

        let contents = storage.read_file(&storage.wallet_dir("wallet-1").join("audit.log")).unwrap();
        let text = String::from_utf8(contents).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_list_wallet_ids_only_includes_wallets_with_manifest() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path());
        storage.create_wallet_dir("wallet-1").unwrap();
        fs::create_dir_all(temp.path().join("not-a-wallet")).unwrap();

        storage
            .write_file_atomic(&storage.wallet_dir("wallet-1").join("wallet.json"), b"{}")
            .unwrap();

        let ids = storage.list_wallet_ids().unwrap();
        assert_eq!(ids, vec!["wallet-1".to_string()]);
    }

    #[test]
    fn test_rejects_path_traversal() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path());
        let result = storage.read_file(Path::new("../../etc/passwd"));
        assert!(result.is_err());
    }

    #[test]
    fn test_free_space_bytes_reports_a_real_positive_number() {
        let temp = TempDir::new().unwrap();
        let available = free_space_bytes(temp.path()).unwrap();
        assert!(available > 0);
    }

    #[test]
    fn test_check_free_space_rejects_an_absurd_requirement() {
        let temp = TempDir::new().unwrap();
        let result = check_free_space(temp.path(), u64::MAX);
        assert!(matches!(result, Err(WalletError::StorageFull { .. })));
    }

    #[test]
    fn test_check_free_space_allows_a_tiny_write() {
        let temp = TempDir::new().unwrap();
        assert!(check_free_space(temp.path(), 1).is_ok());
    }
}
