use std::cell::RefCell;
use std::fs;

use deckhand::cli::RunArgs;
use deckhand::config::AppPaths;
use deckhand::error::{AppError, AppResult};
use deckhand::profile::{NewProfile, ProfileDialog, ProfileInfo, ProfileSelector, ProfileStore};
use tempfile::TempDir;

/// Answers with a fixed profile and records how it was asked.
struct ScriptedDialog {
    answer: Option<&'static str>,
    calls: RefCell<Vec<(String, String, Vec<String>)>>,
}

impl ScriptedDialog {
    fn answering(answer: Option<&'static str>) -> Self {
        Self {
            answer,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl ProfileDialog for ScriptedDialog {
    fn choose(&self, title: &str, highlight: &str, profiles: &[ProfileInfo]) -> AppResult<String> {
        self.calls.borrow_mut().push((
            title.to_string(),
            highlight.to_string(),
            profiles.iter().map(|p| p.name.clone()).collect(),
        ));
        Ok(self.answer.unwrap_or(highlight).to_string())
    }
}

fn store() -> (TempDir, ProfileStore) {
    let root = TempDir::new().expect("tempdir");
    let store = ProfileStore::new(AppPaths::at(root.path()).expect("paths"));
    store.ensure_default().expect("default");
    store
        .generate(&NewProfile::named("studio"))
        .expect("studio");
    (root, store)
}

fn refuse_dialog(root: &TempDir) {
    fs::write(root.path().join("do-not-show-profile-dialog"), "").expect("marker");
}

#[test]
fn dialog_shown_by_default_with_default_highlighted() {
    let (_root, store) = store();
    let dialog = ScriptedDialog::answering(Some("studio"));

    let profile = ProfileSelector::new(&store)
        .with_dialog(&dialog)
        .with_title("Pick one")
        .choose(&RunArgs::default())
        .expect("choose");

    assert_eq!(profile, "studio");
    let calls = dialog.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Pick one");
    assert_eq!(calls[0].1, "default");
    assert_eq!(calls[0].2, ["default", "studio"]);
}

#[test]
fn refusal_marker_hides_dialog() {
    let (root, store) = store();
    refuse_dialog(&root);
    let dialog = ScriptedDialog::answering(Some("studio"));

    let profile = ProfileSelector::new(&store)
        .with_dialog(&dialog)
        .choose(&RunArgs::default())
        .expect("choose");

    assert_eq!(profile, "default");
    assert!(dialog.calls().is_empty());
}

#[test]
fn profile_flag_suppresses_dialog_regardless_of_marker() {
    for refused in [false, true] {
        let (root, store) = store();
        if refused {
            refuse_dialog(&root);
        }
        let dialog = ScriptedDialog::answering(Some("default"));
        let args = RunArgs {
            profile: Some("studio".to_string()),
            ..RunArgs::default()
        };

        let profile = ProfileSelector::new(&store)
            .with_dialog(&dialog)
            .choose(&args)
            .expect("choose");

        assert_eq!(profile, "studio");
        assert!(dialog.calls().is_empty());
    }
}

#[test]
fn dialog_flag_forces_dialog_with_profile_preselected() {
    let (root, store) = store();
    refuse_dialog(&root);
    let dialog = ScriptedDialog::answering(None);
    let args = RunArgs {
        profile: Some("studio".to_string()),
        dialog: Some(true),
        ..RunArgs::default()
    };

    let profile = ProfileSelector::new(&store)
        .with_dialog(&dialog)
        .choose(&args)
        .expect("choose");

    assert_eq!(profile, "studio");
    assert_eq!(dialog.calls()[0].1, "studio");
}

#[test]
fn dialog_flag_false_hides_dialog() {
    let (_root, store) = store();
    let dialog = ScriptedDialog::answering(Some("studio"));
    let args = RunArgs {
        dialog: Some(false),
        ..RunArgs::default()
    };

    let profile = ProfileSelector::new(&store)
        .with_dialog(&dialog)
        .choose(&args)
        .expect("choose");

    assert_eq!(profile, "default");
    assert!(dialog.calls().is_empty());
}

#[test]
fn without_dialog_falls_back_to_default() {
    let (_root, store) = store();

    let profile = ProfileSelector::new(&store)
        .choose(&RunArgs::default())
        .expect("choose");

    assert_eq!(profile, "default");
}

#[test]
fn invalid_profile_flag_is_an_error() {
    let (_root, store) = store();
    let args = RunArgs {
        profile: Some("no/slashes".to_string()),
        ..RunArgs::default()
    };

    let err = ProfileSelector::new(&store)
        .choose(&args)
        .expect_err("name should be rejected");

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(
        err.to_string(),
        "invalid input: specified profile name is not valid"
    );
}

#[test]
fn invalid_dialog_answer_is_an_error() {
    let (_root, store) = store();
    let dialog = ScriptedDialog::answering(Some("bad name"));

    let err = ProfileSelector::new(&store)
        .with_dialog(&dialog)
        .choose(&RunArgs::default())
        .expect_err("answer should be rejected");

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn broken_profile_metadata_does_not_block_selection() {
    let (root, store) = store();
    fs::create_dir_all(root.path().join("broken/description")).expect("mkdir");
    let dialog = ScriptedDialog::answering(None);

    let profile = ProfileSelector::new(&store)
        .with_dialog(&dialog)
        .choose(&RunArgs::default())
        .expect("choose");

    assert_eq!(profile, "default");
    assert_eq!(dialog.calls()[0].2, ["broken", "default", "studio"]);
}
