use chrono::Utc;
use tracing::{debug, info, warn};

use crate::client::GenerationClient;
use crate::error::GenerateError;
use crate::history::HistoryCache;
use crate::models::{GenerationResult, HistoryEntry};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Handle for one in-flight request.
///
/// Only the ticket from the latest `begin` may change state; older tickets
/// are dropped on `complete`.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
    prompt: String,
}

impl Ticket {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

// Observable state of the generator screen
pub struct ViewModel<S> {
    client: GenerationClient,
    history: HistoryCache<S>,
    prompt: String,
    loading: bool,
    result: Option<HistoryEntry>,
    error: Option<String>,
    generation: u64,
    last_id: i64,
}

impl<S: Storage> ViewModel<S> {
    pub fn new(client: GenerationClient, history: HistoryCache<S>) -> Self {
        let last_id = history.newest_id().unwrap_or(0);
        Self {
            client,
            history,
            prompt: String::new(),
            loading: false,
            result: None,
            error: None,
            generation: 0,
            last_id,
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&HistoryEntry> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    // Source of the current result, what the copy button hands out
    pub fn code(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.result.react_code.as_str())
    }

    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.error.is_some() {
            Status::Failure
        } else if self.result.is_some() {
            Status::Success
        } else {
            Status::Idle
        }
    }

    /// Run one generation for the current prompt.
    ///
    /// A blank prompt does nothing and reports `Idle`.
    pub async fn submit(&mut self) -> Status {
        let Some(ticket) = self.begin() else {
            return Status::Idle;
        };
        let outcome = self.client.generate(ticket.prompt()).await;
        self.complete(ticket, outcome);
        self.status()
    }

    pub fn begin(&mut self) -> Option<Ticket> {
        if self.prompt.trim().is_empty() {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.result = None;
        debug!("Starting generation #{}", self.generation);
        Some(Ticket {
            generation: self.generation,
            prompt: self.prompt.clone(),
        })
    }

    // Returns false when the ticket was superseded and its outcome dropped
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<GenerationResult, GenerateError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Dropping outcome of generation #{} (latest is #{})",
                ticket.generation, self.generation
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                let entry = HistoryEntry::new(self.next_id(), ticket.prompt, result);
                info!("Generated \"{}\" (id {})", entry.result.name, entry.id);
                self.history.add(entry.clone());
                self.result = Some(entry);
            }
            // a blank prompt never reaches here, but keep it silent if it does
            Err(GenerateError::EmptyPrompt) => {}
            Err(e) => {
                warn!("Generation failed ({}): {}", e.kind(), e);
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }

    pub fn select(&mut self, id: i64) -> bool {
        match self.history.restore(id) {
            Some(entry) => {
                self.result = Some(entry);
                self.error = None;
                true
            }
            None => false,
        }
    }

    pub fn discard(&mut self, id: i64) -> &[HistoryEntry] {
        self.history.remove(id)
    }

    // Millisecond timestamp, bumped when the clock hasn't moved
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
