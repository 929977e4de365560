use crate::config::AppPaths;
use crate::error::AppResult;
use crate::output::Output;
use crate::profile::ProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub store: ProfileStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(json: bool) -> AppResult<Self> {
        Self::with_paths(AppPaths::discover()?, json)
    }

    /// Makes sure the `default` profile exists before anything else runs.
    pub fn with_paths(paths: AppPaths, json: bool) -> AppResult<Self> {
        let store = ProfileStore::new(paths.clone());
        store.ensure_default()?;

        Ok(Self {
            paths,
            store,
            output: Output::new(json),
        })
    }
}
