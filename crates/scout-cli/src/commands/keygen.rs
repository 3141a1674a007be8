use scout_vault::SubmissionKey;

use crate::cli::GlobalFlags;
use crate::output::{self, KeyView};

/// Handle `scout keygen`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = SubmissionKey::generate()?;
    output::output(&KeyView { key: key.to_text() }, flags.format)
}
