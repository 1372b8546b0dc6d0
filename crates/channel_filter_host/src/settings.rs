// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host settings.
//!
//! Stored as RON next to the working directory:
//! - Profile version (which category rows exist, whether Ctrl removes)
//! - Extra categories appended after the built-in rows
//! - Default report format

use crate::error::{HostError, Result};
use channel_filter::{Category, FilterError, FilterProfile, ProfileVersion};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "channel_filter.ron";

/// How the channel report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Pretty JSON
    Json,
}

/// Host configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Feature set to run with
    pub profile: ProfileVersion,
    /// Categories added after the built-in ones
    pub extra_categories: Vec<Category>,
    /// Report format when none is given on the command line
    pub output: OutputFormat,
}

impl HostSettings {
    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HostError::io(path, e))?;
        let settings = ron::from_str(&contents).map_err(|e| HostError::parse(path, e))?;
        tracing::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load an explicitly requested file, or the default file if it exists.
    ///
    /// A missing default file yields default settings; a missing explicit
    /// file is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(SETTINGS_FILE_NAME);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save settings as pretty RON
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, contents).map_err(|e| HostError::io(path, e))
    }

    /// Build the filter profile these settings describe
    pub fn build_profile(&self) -> std::result::Result<FilterProfile, FilterError> {
        let mut profile = FilterProfile::new(self.profile);
        for category in &self.extra_categories {
            profile.add_category(category.clone())?;
        }
        Ok(profile)
    }
}
