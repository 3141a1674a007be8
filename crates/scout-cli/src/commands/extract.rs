use std::io::Read;

use anyhow::Context;
use scout_config::ScoutConfig;
use scout_core::techstack::parse_techstack;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::output;

/// Handle `scout extract`. Works offline; no API key is needed.
pub fn handle(args: &ExtractArgs, flags: &GlobalFlags, config: &ScoutConfig) -> anyhow::Result<()> {
    let techs = parse_techstack(&args.stack);
    if techs.is_empty() {
        anyhow::bail!("--stack must name at least one technology");
    }

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read model output from stdin")?;
            raw
        }
    };

    let questions = scout_extract::extract(&raw, &techs, config.screening.bounds()?);
    output::output(&questions, flags.format)
}
