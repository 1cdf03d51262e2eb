//! Session loop — reads lines, runs the pipeline, records each turn.
//!
//! The session is a small state machine:
//!
//! ```text
//! AwaitingInput --exit/quit/EOF--> Terminated
//! AwaitingInput --other line-----> Processing --response--> AwaitingInput
//! ```
//!
//! Only a termination token (or end of input) ends the session; pipeline
//! failures never do.

use parley_config::SessionConfig;
use parley_memory::InteractionMemory;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::pipeline::Pipeline;

/// Lines that end the session, compared case-insensitively after trimming.
pub const TERMINATION_TOKENS: [&str; 2] = ["exit", "quit"];

/// Prompt written before each read.
pub const DEFAULT_PROMPT: &str = "You: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Processing,
    Terminated,
}

/// Whether `line` asks to end the session.
pub fn is_termination_token(line: &str) -> bool {
    let line = line.trim();
    TERMINATION_TOKENS
        .iter()
        .any(|token| line.eq_ignore_ascii_case(token))
}

/// One user's conversation: the pipeline plus the memory it feeds.
pub struct Session {
    pipeline: Pipeline,
    memory: InteractionMemory,
    state: SessionState,
    agent_label: String,
    farewell: String,
    prompt: String,
    turns: usize,
}

impl Session {
    pub fn new(pipeline: Pipeline) -> Self {
        Self::with_config(pipeline, &SessionConfig::default())
    }

    pub fn with_config(pipeline: Pipeline, config: &SessionConfig) -> Self {
        Self {
            pipeline,
            memory: InteractionMemory::new(),
            state: SessionState::AwaitingInput,
            agent_label: config.agent_label.clone(),
            farewell: config.farewell.clone(),
            prompt: DEFAULT_PROMPT.into(),
            turns: 0,
        }
    }

    /// Replace the input prompt (empty to disable it).
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn memory(&self) -> &InteractionMemory {
        &self.memory
    }

    /// Number of completed turns.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Process one input line.
    ///
    /// Returns the agent's response, or `None` if the line was a termination
    /// token (or the session had already ended). Termination never touches the
    /// pipeline or the memory.
    pub async fn handle_line(&mut self, line: &str) -> Option<String> {
        if self.state == SessionState::Terminated {
            return None;
        }

        if is_termination_token(line) {
            info!(turns = self.turns, "Session terminated by user");
            self.state = SessionState::Terminated;
            return None;
        }

        self.state = SessionState::Processing;
        let input = line.trim();
        let outcome = self.pipeline.respond(input).await;
        self.memory.record(input, &outcome.response);
        self.turns += 1;

        info!(
            turn = self.turns,
            action = %outcome.action,
            remembered = self.memory.len(),
            "Turn complete"
        );

        self.state = SessionState::AwaitingInput;
        Some(outcome.response)
    }

    /// Drive the session over a line reader and a writer until it terminates.
    ///
    /// Each response is written as `"<agent label>: <response>"`; the farewell
    /// line is written last.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> parley_core::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        while self.state != SessionState::Terminated {
            if !self.prompt.is_empty() {
                writer.write_all(self.prompt.as_bytes()).await?;
                writer.flush().await?;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                debug!("End of input");
                self.state = SessionState::Terminated;
                writer.write_all(b"\n").await?;
                break;
            }

            // Invalid UTF-8 is replaced, not fatal.
            let line = String::from_utf8_lossy(&buf);
            if let Some(response) = self.handle_line(&line).await {
                let rendered = format!("{}: {}\n", self.agent_label, response);
                writer.write_all(rendered.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        writer.write_all(format!("{}\n", self.farewell).as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}
