use scout_config::ScoutConfig;
use scout_core::entities::CandidateProfile;
use scout_core::techstack::parse_techstack;
use scout_llm::generate_questions;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuestionsArgs;
use crate::output;

/// Handle `scout questions`.
pub async fn handle(
    args: &QuestionsArgs,
    flags: &GlobalFlags,
    config: &ScoutConfig,
) -> anyhow::Result<()> {
    let techs = parse_techstack(&args.stack);
    if techs.is_empty() {
        anyhow::bail!("--stack must name at least one technology");
    }

    let client = bootstrap::chat_client(config)?;
    let bounds = config.screening.bounds()?;
    let candidate = args.name.as_ref().map(|name| CandidateProfile {
        name: name.clone(),
        years: args.years,
        desired: args.desired.clone(),
        techstack: args.stack.clone(),
        ..Default::default()
    });

    let questions = generate_questions(&client, &techs, candidate.as_ref(), bounds).await;
    output::output(&questions, flags.format)
}
