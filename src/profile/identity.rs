use std::path::PathBuf;

use serde::Serialize;

use crate::config::AppPaths;

use super::store::config_file;

const BUS_NAME_PREFIX: &str = "org.deckhand";
const OBJECT_PATH_PREFIX: &str = "/org/deckhand";
const JACK_CLIENT_PREFIX: &str = "deckhand";

/// Everything a profile isolates from other running instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub profile: String,
    pub profile_dir: PathBuf,
    pub config_file: PathBuf,
    pub bus_name: String,
    pub object_path: String,
    pub jack_client: String,
}

impl SessionIdentity {
    /// `profile` must already have passed the name check.
    pub fn new(paths: &AppPaths, profile: &str) -> Self {
        let profile_dir = paths.profile_dir(profile);
        Self {
            profile: profile.to_string(),
            config_file: config_file(&profile_dir),
            profile_dir,
            bus_name: format!("{BUS_NAME_PREFIX}.{profile}"),
            object_path: format!("{OBJECT_PATH_PREFIX}/{profile}"),
            jack_client: format!("{JACK_CLIENT_PREFIX}_{profile}"),
        }
    }
}
