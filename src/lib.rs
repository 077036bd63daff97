pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod prompt;
pub mod state;
pub mod studio;
pub mod types;

pub use crate::client::GenerationClient;
pub use crate::config::Config;
pub use crate::generator::{GeminiGenerator, TextGenerator};
pub use crate::state::AppState;
pub use crate::studio::Studio;
pub use crate::types::*;
