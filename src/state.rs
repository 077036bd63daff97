use crate::client::GenerationClient;
use crate::config::Config;
use crate::studio::Studio;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct AppState {
    pub config: Config,
    pub client: GenerationClient,
    pub studio: Mutex<Studio>,
}

impl AppState {
    pub fn new(config: Config, client: GenerationClient) -> Self {
        Self {
            config,
            client,
            studio: Mutex::new(Studio::new()),
        }
    }

    pub fn studio(&self) -> MutexGuard<'_, Studio> {
        self.studio.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
