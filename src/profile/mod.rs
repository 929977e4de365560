pub mod dialog;
pub mod identity;
pub mod selector;
pub mod store;

pub use dialog::{ProfileDialog, TerminalDialog};
pub use identity::SessionIdentity;
pub use selector::ProfileSelector;
pub use store::{NewProfile, ProfileInfo, ProfileStore};
