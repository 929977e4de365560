use std::path::PathBuf;

use serde::Serialize;

use crate::cli::GenerateProfileArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::NewProfile;

#[derive(Debug, Serialize)]
pub struct GeneratedProfile {
    pub profile: String,
    pub template: Option<String>,
    pub dir: PathBuf,
}

pub fn run(ctx: &AppContext, args: GenerateProfileArgs) -> AppResult<GeneratedProfile> {
    let GenerateProfileArgs {
        name,
        template,
        icon,
        description,
    } = args;

    let request = NewProfile {
        name,
        template,
        icon,
        description,
    };
    let dir = ctx.store.generate(&request)?;
    tracing::info!(profile = %request.name, dir = %dir.display(), "profile generated");

    let generated = GeneratedProfile {
        profile: request.name,
        template: request.template,
        dir,
    };
    let text = format!(
        "created profile {} at {}",
        generated.profile,
        generated.dir.display()
    );
    ctx.output.emit(&text, &generated)?;
    Ok(generated)
}
