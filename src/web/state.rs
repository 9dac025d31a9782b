use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::sources::RecordSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<RecordSource>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<AppState> {
        Ok(AppState::from_source(
            RecordSource::from_config(&config.source).await?,
        ))
    }

    pub fn from_source(source: RecordSource) -> AppState {
        AppState {
            source: Arc::new(source),
        }
    }
}
