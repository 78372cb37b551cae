use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::account::Accounts;
use crate::{errors::CoreResult, storage};

/// Durable home of the account mapping.
///
/// Every operation reads or writes the whole document; the caller owns the
/// in-memory mutation in between. Nothing here locks the file, so two
/// overlapping invocations against the same path are unsupported.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the shared application data directory.
    pub fn at_default() -> Self {
        Self::new(storage::accounts_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted mapping. Missing or malformed state degrades to
    /// an empty mapping instead of failing the caller: corrupt data is
    /// treated as absent, not repaired or quarantined.
    pub fn load(&self) -> Accounts {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %err, "account store unreadable; starting empty");
                }
                return Accounts::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(accounts) => accounts,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "account store malformed; starting empty");
                Accounts::new()
            }
        }
    }

    /// Serializes the whole mapping and replaces the stored document. The
    /// in-memory mapping is not rolled back on failure; callers treat a
    /// failed save as "mutation may be lost".
    pub fn save(&self, accounts: &Accounts) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(accounts)?;
        storage::write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), accounts = accounts.len(), "account store saved");
        Ok(())
    }
}
