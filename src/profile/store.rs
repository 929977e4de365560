use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::paths::STAGING_PREFIX;
use crate::config::{AppPaths, DEFAULT_PROFILE, profile_name_valid};
use crate::error::{AppResult, ProfileError};

const ICON_FILE: &str = "icon";
const DESCRIPTION_FILE: &str = "description";
const CONFIG_FILE: &str = "config";
const TEMPLATE_FILES: [&str; 3] = [ICON_FILE, DESCRIPTION_FILE, CONFIG_FILE];
const DEFAULT_DESCRIPTION: &str = "The default profile";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub template: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl NewProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    paths: AppPaths,
}

impl ProfileStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn exists(&self, profile: &str) -> bool {
        self.paths.profile_dir(profile).is_dir()
    }

    pub fn dialog_refused(&self) -> bool {
        self.paths.dialog_refusal_file().exists()
    }

    /// Creates the `default` profile on first use.
    pub fn ensure_default(&self) -> Result<(), ProfileError> {
        if self.exists(DEFAULT_PROFILE) {
            return Ok(());
        }

        let request = NewProfile {
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            ..NewProfile::named(DEFAULT_PROFILE)
        };
        self.generate(&request)?;
        debug!("created default profile");
        Ok(())
    }

    /// Builds the new profile in a staging directory next to the existing
    /// profiles and renames it into place.
    pub fn generate(&self, request: &NewProfile) -> Result<PathBuf, ProfileError> {
        if !profile_name_valid(&request.name) {
            return Err(ProfileError::InvalidName(request.name.clone()));
        }

        let template_dir = match request.template.as_deref() {
            Some(template) => {
                if !profile_name_valid(template) {
                    return Err(ProfileError::InvalidTemplate(template.to_string()));
                }
                let dir = self.paths.profile_dir(template);
                if !dir.is_dir() {
                    return Err(ProfileError::MissingTemplate(template.to_string()));
                }
                Some(dir)
            }
            None => None,
        };

        let dest = self.paths.profile_dir(&request.name);
        check_destination(&dest)?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(self.paths.config_dir())
            .map_err(ProfileError::Staging)?;
        debug!(staging = %staging.path().display(), profile = %request.name, "staging profile");

        let result = stage(staging.path(), template_dir.as_deref(), request)
            .and_then(|()| commit(staging.path(), &dest));

        let staging_path = staging.path().to_path_buf();
        if let Err(err) = staging.close() {
            if err.kind() != ErrorKind::NotFound {
                warn!(path = %staging_path.display(), error = %err, "could not remove staging directory");
            }
        }

        result.map(|()| dest)
    }

    /// Profiles under the config root, sorted by name.
    pub fn list(&self) -> AppResult<Vec<ProfileInfo>> {
        let mut profiles = Vec::new();
        for entry in fs::read_dir(self.paths.config_dir())? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !profile_name_valid(&name) {
                continue;
            }

            let dir = entry.path();
            profiles.push(ProfileInfo {
                description: read_field(&dir, DESCRIPTION_FILE),
                icon: read_field(&dir, ICON_FILE),
                name,
                dir,
            });
        }

        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }
}

pub fn config_file(profile_dir: &Path) -> PathBuf {
    profile_dir.join(CONFIG_FILE)
}

fn check_destination(dest: &Path) -> Result<(), ProfileError> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => Err(ProfileError::Exists(dest.to_path_buf())),
        Ok(_) => Err(ProfileError::PathBlocked(dest.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ProfileError::Commit(err)),
    }
}

fn stage(
    staging: &Path,
    template_dir: Option<&Path>,
    request: &NewProfile,
) -> Result<(), ProfileError> {
    if let Some(template_dir) = template_dir {
        for file in TEMPLATE_FILES {
            match fs::copy(template_dir.join(file), staging.join(file)) {
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    debug!(file, "template has no such file, skipping");
                }
                Err(source) => return Err(ProfileError::Write { file, source }),
            }
        }
    }

    let fields = [
        (ICON_FILE, request.icon.as_deref()),
        (DESCRIPTION_FILE, request.description.as_deref()),
    ];
    for (file, value) in fields {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            fs::write(staging.join(file), value)
                .map_err(|source| ProfileError::Write { file, source })?;
        }
    }

    Ok(())
}

fn commit(staging: &Path, dest: &Path) -> Result<(), ProfileError> {
    // rename(2) replaces an empty directory, so re-check right before it.
    check_destination(dest)?;
    fs::rename(staging, dest).map_err(ProfileError::Commit)
}

/// Unreadable metadata only loses the field; the profile stays selectable.
fn read_field(dir: &Path, file: &str) -> Option<String> {
    let path = dir.join(file);
    match read_text(&path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read profile {file}");
            None
        }
    }
}

fn read_text(path: &Path) -> io::Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
