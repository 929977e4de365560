use crate::cli::{Cli, Command};
use crate::commands;
use crate::commands::generate::GeneratedProfile;
use crate::commands::run::Session;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::ProfileDialog;

/// A freshly generated profile (the process should exit) or a session to
/// start.
#[derive(Debug)]
pub enum Outcome {
    Generated(GeneratedProfile),
    Session(Session),
}

pub fn run(cli: Cli, dialog: Option<&dyn ProfileDialog>) -> AppResult<Outcome> {
    let Cli { json, command } = cli;

    let ctx = AppContext::bootstrap(json)?;
    dispatch(&ctx, command, dialog)
}

pub fn dispatch(
    ctx: &AppContext,
    command: Command,
    dialog: Option<&dyn ProfileDialog>,
) -> AppResult<Outcome> {
    match command {
        Command::GenerateProfile(args) => {
            commands::generate::run(ctx, args).map(Outcome::Generated)
        }
        Command::Run(args) => commands::run::run(ctx, args, dialog).map(Outcome::Session),
    }
}
