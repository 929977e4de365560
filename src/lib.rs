pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod profile;

use app::Outcome;
use cli::Cli;
use error::AppResult;
use profile::TerminalDialog;

pub fn run(cli: Cli) -> AppResult<Outcome> {
    app::run(cli, Some(&TerminalDialog))
}
