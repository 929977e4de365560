use tracing::{debug, warn};

use crate::cli::RunArgs;
use crate::config::{DEFAULT_PROFILE, profile_name_valid};
use crate::error::{AppError, AppResult};

use super::dialog::ProfileDialog;
use super::store::ProfileStore;

pub const DEFAULT_TITLE: &str = "Profile Selector";

/// Resolves which profile this instance runs under.
pub struct ProfileSelector<'a> {
    store: &'a ProfileStore,
    dialog: Option<&'a dyn ProfileDialog>,
    title: &'a str,
}

impl<'a> ProfileSelector<'a> {
    pub fn new(store: &'a ProfileStore) -> Self {
        Self {
            store,
            dialog: None,
            title: DEFAULT_TITLE,
        }
    }

    pub fn with_dialog(mut self, dialog: &'a dyn ProfileDialog) -> Self {
        self.dialog = Some(dialog);
        self
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// `--profile` beats the refusal marker, `--dialog` beats both.
    pub fn choose(&self, args: &RunArgs) -> AppResult<String> {
        let mut profile = DEFAULT_PROFILE.to_string();
        let mut show_dialog = !self.store.dialog_refused();

        if let Some(requested) = args.profile.as_deref() {
            if !profile_name_valid(requested) {
                return Err(AppError::InvalidInput(
                    "specified profile name is not valid".to_string(),
                ));
            }
            profile = requested.to_string();
            show_dialog = false;
        }

        if let Some(forced) = args.dialog {
            show_dialog = forced;
        }

        if let (true, Some(dialog)) = (show_dialog, self.dialog) {
            let profiles = self.store.list()?;
            profile = dialog.choose(self.title, &profile, &profiles)?;
            if !profile_name_valid(&profile) {
                return Err(AppError::InvalidInput(format!(
                    "profile chooser returned an invalid name ({profile})"
                )));
            }
        }

        if !self.store.exists(&profile) {
            warn!(%profile, "selected profile has no directory yet");
        }
        debug!(%profile, "profile selected");
        Ok(profile)
    }
}
