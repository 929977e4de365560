use std::io::{self, BufRead, IsTerminal, Write};

use crate::config::profile_name_valid;
use crate::error::AppResult;

use super::store::ProfileInfo;

/// Interactive profile chooser. The host application may supply its own
/// (graphical) implementation.
pub trait ProfileDialog {
    fn choose(&self, title: &str, highlight: &str, profiles: &[ProfileInfo]) -> AppResult<String>;
}

/// Numbered list on stderr, answer read from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDialog;

impl ProfileDialog for TerminalDialog {
    fn choose(&self, title: &str, highlight: &str, profiles: &[ProfileInfo]) -> AppResult<String> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(highlight.to_string());
        }

        prompt_choice(stdin.lock(), io::stderr(), title, highlight, profiles)
    }
}

pub fn prompt_choice<R, W>(
    mut input: R,
    mut output: W,
    title: &str,
    highlight: &str,
    profiles: &[ProfileInfo],
) -> AppResult<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{title}")?;
    for (index, profile) in profiles.iter().enumerate() {
        let marker = if profile.name == highlight { '*' } else { ' ' };
        match profile.description.as_deref() {
            Some(description) if !description.is_empty() => writeln!(
                output,
                "{marker} {}. {} - {description}",
                index + 1,
                profile.name
            )?,
            _ => writeln!(output, "{marker} {}. {}", index + 1, profile.name)?,
        }
    }

    loop {
        write!(output, "Profile [{highlight}]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(highlight.to_string());
        }

        match resolve_choice(line.trim(), highlight, profiles) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "not a valid profile: {}", line.trim())?,
        }
    }
}

fn resolve_choice(answer: &str, highlight: &str, profiles: &[ProfileInfo]) -> Option<String> {
    if answer.is_empty() {
        return Some(highlight.to_string());
    }

    if let Ok(number) = answer.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| profiles.get(index))
            .map(|profile| profile.name.clone());
    }

    profile_name_valid(answer).then(|| answer.to_string())
}
