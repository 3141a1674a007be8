use schemars::schema_for;
use scout_core::entities::{CandidateProfile, SubmissionRecord};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output;

/// Handle `scout schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.target)?;
    output::output(&schema, flags.format)
}

fn schema_value(target: SchemaTarget) -> anyhow::Result<serde_json::Value> {
    let schema = match target {
        SchemaTarget::Record => schema_for!(SubmissionRecord),
        SchemaTarget::Candidate => schema_for!(CandidateProfile),
    };
    Ok(serde_json::to_value(schema)?)
}
