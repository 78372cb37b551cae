//! Student profile shown in the tool banners.
//!
//! Display-only configuration: the stores never read these values.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{errors::CoreResult, storage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub roll_number: String,
    pub college: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Student".into(),
            roll_number: "000000".into(),
            college: "Campus".into(),
        }
    }
}

impl Profile {
    /// Formatted banner header shared by every tool.
    pub fn header(&self, project: &str) -> String {
        let rule = "=".repeat(60);
        format!(
            "{rule}\n    COLLEGE MINI PROJECT\n{rule}\n\
             Student Name: {}\nRoll Number:  {}\nCollege:      {}\n{rule}\n\
             PROJECT: {project}\n{rule}",
            self.name, self.roll_number, self.college
        )
    }
}

/// Loads and saves the profile document in the app data directory.
pub struct ProfileManager {
    path: PathBuf,
}

impl ProfileManager {
    pub fn new() -> Self {
        Self::with_path(storage::config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing document falls back to the default profile; a malformed
    /// one is reported so the owner can fix it.
    pub fn load(&self) -> CoreResult<Profile> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Profile::default())
        }
    }

    pub fn save(&self, profile: &Profile) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(profile)?;
        storage::write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::new()
    }
}
