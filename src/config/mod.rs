pub mod paths;
pub mod profile;

pub use paths::AppPaths;
pub use profile::{DEFAULT_PROFILE, profile_name_valid};
