use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use serde::Serialize;

const DEFAULT_SUBCOMMAND: &str = "run";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "deckhand",
    version,
    disable_version_flag = true,
    about = "Desktop audio console: profile chooser and startup options",
    after_help = "Without a sub-command, `run` is assumed."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// The default command
    Run(RunArgs),
    /// Make a new profile
    #[command(name = "generateprofile")]
    GenerateProfile(GenerateProfileArgs),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct RunArgs {
    #[arg(
        short = 'd',
        long,
        value_name = "true|false",
        help = "Force the appearance or non-appearance of the profile chooser dialog; with -p the chosen profile is preselected"
    )]
    pub dialog: Option<bool>,
    #[arg(
        short = 'p',
        long,
        value_name = "profile_choice",
        help = "The profile to use; overrides the \"show profile dialog\" preference"
    )]
    pub profile: Option<String>,
    #[arg(
        short = 'j',
        long = "jackserver",
        value_name = "server_name",
        help = "The named JACK sound-server to connect with"
    )]
    pub jack_server: Option<String>,
    #[arg(short = 'm', long, num_args = 1.., action = ArgAction::Append, value_name = "m", help_heading = "User interface settings", help = "Microphones open at startup")]
    pub mics: Vec<String>,
    #[arg(short = 'a', long, num_args = 1.., action = ArgAction::Append, value_name = "a", help_heading = "User interface settings", help = "Aux ports open at startup")]
    pub aux: Vec<String>,
    #[arg(short = 'V', long, value_enum, help_heading = "User interface settings", help = "The VoIP mode at startup")]
    pub voip: Option<VoipMode>,
    #[arg(short = 'P', long, num_args = 1.., action = ArgAction::Append, value_name = "p", help_heading = "User interface settings", help = "The players to start among values {1,2}")]
    pub players: Vec<String>,
    #[arg(short = 's', long, num_args = 1.., action = ArgAction::Append, value_name = "s", help_heading = "User interface settings", help = "Attempt connection with the specified servers")]
    pub servers: Vec<String>,
    #[arg(short = 'r', long, num_args = 1.., action = ArgAction::Append, value_name = "r", help_heading = "User interface settings", help = "The recorders to start")]
    pub recorders: Vec<String>,
    #[arg(
        short = 'c',
        long,
        value_enum,
        help_heading = "User interface settings",
        help = "Position the crossfader for the specified player"
    )]
    pub crossfader: Option<CrossfaderSide>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoipMode {
    Off,
    Private,
    Public,
}

/// Player the crossfader starts on; only the exact spellings `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum CrossfaderSide {
    #[value(name = "1")]
    #[serde(rename = "1")]
    One,
    #[value(name = "2")]
    #[serde(rename = "2")]
    Two,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct GenerateProfileArgs {
    #[arg(value_name = "profile_name", help = "New profile name")]
    pub name: String,
    #[arg(
        short = 't',
        long,
        value_name = "template_profile",
        help = "An existing profile to use as a template"
    )]
    pub template: Option<String>,
    #[arg(
        short = 'i',
        long,
        value_name = "icon_pathname",
        help = "Pathname to an icon"
    )]
    pub icon: Option<String>,
    #[arg(
        short = 'd',
        long,
        value_name = "description_text",
        help = "Description of the profile"
    )]
    pub description: Option<String>,
}

/// The full command definition, including the `-v/--version` flag.
pub fn command() -> clap::Command {
    Cli::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

/// Parses `args` (program name first), exiting the process with clap's
/// message and status on failure.
pub fn parse_args<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match try_parse_args(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    }
}

/// Parses `args`, falling back to the `run` sub-command when none of the
/// sub-command keywords is present. On failure the error from the first
/// attempt is returned.
pub fn try_parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let err = match parse_once(&args) {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return Err(err);
    }

    if names_subcommand(&args) {
        return Err(err);
    }

    tracing::debug!("no sub-command given, retrying as `{DEFAULT_SUBCOMMAND}`");
    let mut retry = args;
    retry.push(DEFAULT_SUBCOMMAND.into());
    parse_once(&retry).map_err(|_| err)
}

fn parse_once(args: &[OsString]) -> Result<Cli, clap::Error> {
    let matches = command().try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

fn names_subcommand(args: &[OsString]) -> bool {
    let command = command();
    args.iter().skip(1).any(|arg| {
        command
            .get_subcommands()
            .any(|sub| arg.to_str() == Some(sub.get_name()))
    })
}
