use fr_config::Config;
use fr_core::SubmissionPipeline;

use std::sync::Arc;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: SubmissionPipeline,
}

impl AppState {
    pub fn new(config: Config, pipeline: SubmissionPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline,
        }
    }
}
