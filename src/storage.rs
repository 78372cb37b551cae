//! Path resolution and file-write helpers shared by the stores.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::errors::CoreResult;

const DEFAULT_DIR_NAME: &str = ".campus_core";
const ACCOUNTS_FILE: &str = "accounts.json";
const TASKS_FILE: &str = "tasks.txt";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application-specific data directory, defaulting to
/// `~/.campus_core`. `CAMPUS_CORE_HOME` overrides the location.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CAMPUS_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical location of the persisted account mapping.
pub fn accounts_file() -> PathBuf {
    app_data_dir().join(ACCOUNTS_FILE)
}

/// Canonical location of the persisted task list.
pub fn tasks_file() -> PathBuf {
    app_data_dir().join(TASKS_FILE)
}

/// Canonical location of the student profile document.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> CoreResult<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Replaces `path` with `data` through a temp file and rename, so readers
/// never observe a partially written document.
pub fn write_atomic(path: &Path, data: &str) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_stacks_suffix_on_existing_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/accounts.json")),
            Path::new("/data/accounts.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/tasks")), Path::new("/data/tasks.tmp"));
    }

    #[test]
    fn write_atomic_creates_missing_parents() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("nested").join("out.json");
        write_atomic(&target, "{}").expect("write");
        assert_eq!(fs::read_to_string(&target).expect("read back"), "{}");
    }

    #[test]
    fn failed_write_leaves_existing_file_untouched() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("out.json");
        write_atomic(&target, "original").expect("first write");

        // A directory squatting on the temp path forces File::create to fail.
        fs::create_dir_all(tmp_path(&target)).expect("block temp path");
        assert!(write_atomic(&target, "replacement").is_err());
        assert_eq!(fs::read_to_string(&target).expect("read back"), "original");
    }
}
