//! Prompt-to-website generation: a client for the generation endpoint, a
//! bounded local history of results, the view-model tying them together, and
//! the HTTP endpoint that serves mock or relayed results.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod history;
pub mod metrics;
pub mod mock;
pub mod models;
pub mod openai;
pub mod relay;
pub mod server;
pub mod state;
pub mod storage;
pub mod view_model;

pub use client::{ClientConfig, GenerationClient, Provider};
pub use error::{ErrorKind, GenerateError, StorageError};
pub use history::{HISTORY_KEY, HistoryCache, MAX_HISTORY};
pub use models::{Colors, GenerationResult, HistoryEntry};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use view_model::{Status, Ticket, ViewModel};
