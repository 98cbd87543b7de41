use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        completion_client::{CompletionClient, HttpCompletionClient},
        generation_service::{GenerationService, GenerationSettings},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
}

impl AppState {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Arc::new(HttpCompletionClient::new(config)?);
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: &Config, client: Arc<dyn CompletionClient>) -> Self {
        let generation_service = Arc::new(GenerationService::new(
            client,
            GenerationSettings::from_config(config),
        ));

        Self { generation_service }
    }
}
