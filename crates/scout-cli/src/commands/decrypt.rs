use anyhow::Context;
use scout_config::ScoutConfig;
use scout_vault::{SubmissionKey, open_submission};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecryptArgs;
use crate::output;

/// Handle `scout decrypt`.
pub fn handle(args: &DecryptArgs, flags: &GlobalFlags, config: &ScoutConfig) -> anyhow::Result<()> {
    let key_text = config
        .vault
        .encryption_key()
        .context("no encryption key configured; set ENCRYPTION_KEY (or SCOUT_VAULT__ENCRYPTION_KEY)")?;
    let key = SubmissionKey::from_text(key_text)?;

    let record = open_submission(&args.file, &key)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    output::output(&record, flags.format)
}
