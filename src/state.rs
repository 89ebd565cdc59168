use std::sync::Arc;

use crate::config::Config;
use crate::services::ContentfulService;

#[derive(Clone)]
pub struct AppState {
    pub cms: ContentfulService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(cms: ContentfulService, config: Config) -> Self {
        Self {
            cms,
            config: Arc::new(config),
        }
    }
}
