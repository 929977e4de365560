use serde::Serialize;

use crate::cli::{CrossfaderSide, RunArgs, VoipMode};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::{ProfileDialog, ProfileSelector, SessionIdentity};

/// Startup settings handed on to the user interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartupOptions {
    pub jack_server: Option<String>,
    pub mics: Vec<String>,
    pub aux: Vec<String>,
    pub voip: Option<VoipMode>,
    pub players: Vec<String>,
    pub servers: Vec<String>,
    pub recorders: Vec<String>,
    pub crossfader: Option<CrossfaderSide>,
}

impl From<RunArgs> for StartupOptions {
    fn from(args: RunArgs) -> Self {
        Self {
            jack_server: args.jack_server,
            mics: args.mics,
            aux: args.aux,
            voip: args.voip,
            players: args.players,
            servers: args.servers,
            recorders: args.recorders,
            crossfader: args.crossfader,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub identity: SessionIdentity,
    pub startup: StartupOptions,
}

impl Session {
    pub fn profile(&self) -> &str {
        &self.identity.profile
    }
}

pub fn run(
    ctx: &AppContext,
    args: RunArgs,
    dialog: Option<&dyn ProfileDialog>,
) -> AppResult<Session> {
    let mut selector = ProfileSelector::new(&ctx.store);
    if let Some(dialog) = dialog {
        selector = selector.with_dialog(dialog);
    }
    let profile = selector.choose(&args)?;

    let session = Session {
        identity: SessionIdentity::new(&ctx.paths, &profile),
        startup: StartupOptions::from(args),
    };

    let text = format!(
        "profile {} (bus name {}, jack client {})",
        session.profile(),
        session.identity.bus_name,
        session.identity.jack_client
    );
    ctx.output.emit(&text, &session)?;
    Ok(session)
}
