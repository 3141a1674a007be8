use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use scout_config::ScoutConfig;
use scout_core::entities::CandidateProfile;
use scout_core::questions::QuestionBounds;
use scout_core::session::{FAREWELL_NOTE, ScreeningSession, is_end_conversation};
use scout_llm::{ChatModel, answer_followup, generate_questions};
use scout_vault::{SavedSubmission, SubmissionWriter};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScreenArgs;
use crate::output::{self, SavedView, TextView};

/// How a screening on the terminal ended.
#[derive(Debug)]
pub enum ScreenOutcome {
    Saved(SavedSubmission),
    /// Input closed before the candidate ended the conversation.
    Abandoned,
}

/// Tunables for one interactive session.
#[derive(Clone, Copy, Debug)]
pub struct SessionSettings {
    pub bounds: QuestionBounds,
    pub history_window: usize,
}

/// Handle `scout screen`.
pub async fn handle(
    args: &ScreenArgs,
    flags: &GlobalFlags,
    config: &ScoutConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::chat_client(config)?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.vault.output_dir));
    let writer = SubmissionWriter::from_config(out_dir, config.vault.encryption_key());
    let settings = SessionSettings {
        bounds: config.screening.bounds()?,
        history_window: config.screening.history_window,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = run_session(&client, &writer, settings, stdin.lock(), stdout.lock()).await?;

    match outcome {
        ScreenOutcome::Saved(saved) => output::output(
            &SavedView {
                path: saved.path.display().to_string(),
                ts: saved.ts,
                recoverable: saved.is_recoverable(),
            },
            flags.format,
        ),
        ScreenOutcome::Abandoned => {
            tracing::info!("input closed; nothing saved");
            Ok(())
        }
    }
}

/// Drive one screening over `input`/`output` until an end keyword or EOF.
pub async fn run_session<M, R, W>(
    model: &M,
    writer: &SubmissionWriter,
    settings: SessionSettings,
    input: R,
    output: W,
) -> anyhow::Result<ScreenOutcome>
where
    M: ChatModel,
    R: BufRead,
    W: Write,
{
    let mut console = Console { input, output };

    console.say("Hello! I'm Scout, the screening assistant. Let's start with a few details.")?;
    let Some(mut session) = intake(&mut console)? else {
        return Ok(ScreenOutcome::Abandoned);
    };

    let techs = session.candidate().technologies();
    let questions = generate_questions(model, &techs, Some(session.candidate()), settings.bounds).await;
    console.say(&format!(
        "\nHere are your technical questions:\n\n{}\n",
        questions.to_text()
    ))?;
    session.set_questions(questions);
    console.say("Ask me about any question, or say 'bye' when you're done.")?;

    loop {
        let Some(message) = console.ask("> ")? else {
            return Ok(ScreenOutcome::Abandoned);
        };
        if message.is_empty() {
            continue;
        }

        if is_end_conversation(&message) {
            let (candidate, questions) = session.finish(message)?;
            let saved = writer
                .save(candidate, questions)
                .context("failed to save submission")?;
            console.say(FAREWELL_NOTE)?;
            return Ok(ScreenOutcome::Saved(saved));
        }

        session.push_user(message.as_str())?;
        match reply(model, &session, &message, settings.history_window).await {
            Ok(answer) => {
                console.say(&answer)?;
                session.push_assistant(answer)?;
            }
            Err(error) => {
                tracing::warn!(error = %error, "follow-up failed");
                console.say(&format!("Sorry, I couldn't answer that: {error}"))?;
            }
        }
    }
}

async fn reply<M: ChatModel>(
    model: &M,
    session: &ScreeningSession,
    message: &str,
    window: usize,
) -> Result<String, scout_llm::LlmError> {
    answer_followup(
        model,
        message,
        session.conversation(),
        session.questions(),
        window,
    )
    .await
}

/// Collect a valid profile, re-asking from the top on validation errors.
fn intake<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> anyhow::Result<Option<ScreeningSession>> {
    loop {
        let Some(profile) = read_profile(console)? else {
            return Ok(None);
        };
        match ScreeningSession::new(profile) {
            Ok(session) => return Ok(Some(session)),
            Err(error) => console.say(&format!("{error}. Let's try again.\n"))?,
        }
    }
}

fn read_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> anyhow::Result<Option<CandidateProfile>> {
    macro_rules! field {
        ($label:expr) => {
            match console.ask($label)? {
                Some(value) => value,
                None => return Ok(None),
            }
        };
    }

    let name = field!("Full name: ");
    let email = field!("Email: ");
    let phone = field!("Phone: ");
    let years = loop {
        let raw = field!("Years of experience: ");
        if raw.is_empty() {
            break 0;
        }
        match raw.parse::<u32>() {
            Ok(years) => break years,
            Err(_) => console.say("Please enter a whole number of years.")?,
        }
    };
    let desired = field!("Desired position(s): ");
    let location = field!("Current location: ");
    let techstack = field!("Tech stack (comma separated): ");

    Ok(Some(CandidateProfile {
        name,
        email,
        phone,
        years,
        desired,
        location,
        techstack,
    }))
}

/// Line-oriented prompt over any reader/writer pair.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` on end of input.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
