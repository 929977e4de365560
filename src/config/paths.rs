use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "deckhand";
const CONFIG_DIR_ENV: &str = "DECKHAND_CONFIG_DIR";
const DIALOG_REFUSAL_FILE: &str = "do-not-show-profile-dialog";
pub(crate) const STAGING_PREFIX: &str = ".staging-";

/// Filesystem layout: one subdirectory per profile under the config root.
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_dir = match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir()
                .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?
                .join(APP_DIR),
        };

        Self::at(config_dir)
    }

    pub fn at(config_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let config_dir = config_dir.into();
        fs::create_dir_all(&config_dir)?;
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn profile_dir(&self, profile: &str) -> PathBuf {
        self.config_dir.join(profile)
    }

    pub fn dialog_refusal_file(&self) -> PathBuf {
        self.config_dir.join(DIALOG_REFUSAL_FILE)
    }
}
