use crate::client::GenerationClient;
use crate::error::{GenerationError, ValidationError};
use crate::types::{Mode, ModeLabels, Status, StudioSnapshot};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

pub const COPIED_INDICATOR: Duration = Duration::from_millis(2000);

pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Holds whatever was last copied. The browser performs the real clipboard
/// write with the text returned to it.
#[derive(Debug, Default)]
pub struct CapturedClipboard {
    pub text: Option<String>,
}

impl Clipboard for CapturedClipboard {
    fn write_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// Issued for every accepted generate; only the newest ticket may write back.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    pub mode: Mode,
    pub input: String,
    pub request_id: Uuid,
}

#[derive(Debug, Default)]
pub struct Studio {
    mode: Mode,
    input: String,
    output: String,
    loading: bool,
    error: Option<String>,
    copied_at: Option<Instant>,
    latest_seq: u64,
    request_id: Option<Uuid>,
    generated_at: Option<DateTime<Utc>>,
}

impl Studio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial state. In-flight responses become stale.
    pub fn reset(&mut self) {
        let latest_seq = self.latest_seq + 1;
        *self = Self {
            latest_seq,
            ..Self::default()
        };
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.input.clear();
        self.output.clear();
        if self.loading {
            log::debug!("Mode switched while loading, pending response will be dropped");
            self.loading = false;
        }
        self.latest_seq += 1;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn begin_generate(&mut self) -> Result<Ticket, ValidationError> {
        if self.input.trim().is_empty() {
            let err = ValidationError::EmptyInput;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.loading = true;
        self.error = None;
        self.copied_at = None;
        self.latest_seq += 1;

        Ok(Ticket {
            seq: self.latest_seq,
            mode: self.mode,
            input: self.input.clone(),
            request_id: Uuid::new_v4(),
        })
    }

    /// Applies a completion. Returns false when the ticket was superseded and
    /// the result was dropped.
    pub fn finish_generate(
        &mut self,
        ticket: &Ticket,
        result: Result<String, GenerationError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            log::warn!(
                "Discarding stale generation {} (ticket {}, latest {})",
                ticket.request_id,
                ticket.seq,
                self.latest_seq
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(text) => {
                self.output = text;
                self.request_id = Some(ticket.request_id);
                self.generated_at = Some(Utc::now());
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    pub async fn generate(&mut self, client: &GenerationClient) -> Result<(), ValidationError> {
        let ticket = self.begin_generate()?;
        let result = client.generate_content(ticket.mode, &ticket.input).await;
        self.finish_generate(&ticket, result);
        Ok(())
    }

    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        if self.output.is_empty() {
            return false;
        }
        clipboard.write_text(&self.output);
        self.copied_at = Some(Instant::now());
        true
    }

    pub fn copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_INDICATOR)
    }

    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.error.is_some() {
            Status::Error
        } else if !self.output.is_empty() {
            Status::Success
        } else {
            Status::Idle
        }
    }

    pub fn snapshot(&self) -> StudioSnapshot {
        StudioSnapshot {
            mode: self.mode,
            input: self.input.clone(),
            output: self.output.clone(),
            loading: self.loading,
            error: self.error.clone(),
            copied: self.copied(),
            status: self.status(),
            request_id: self.request_id.map(|id| id.to_string()),
            generated_at: self
                .generated_at
                .map(|at| at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            labels: ModeLabels::from(self.mode),
            clipboard: None,
        }
    }
}
