//! Application state.

use std::sync::Arc;

use ytagent_youtube::{DemoUploader, VideoUploader, YouTubeConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub youtube: YouTubeConfig,
    pub uploader: Arc<dyn VideoUploader>,
}

impl AppState {
    /// Create state from environment configuration with the demo uploader.
    pub fn from_env(config: ApiConfig) -> Self {
        let youtube = YouTubeConfig::from_env();
        let uploader = Arc::new(DemoUploader::new(youtube.clone()));
        Self::with_uploader(config, youtube, uploader)
    }

    /// Create state around an explicit uploader.
    pub fn with_uploader(
        config: ApiConfig,
        youtube: YouTubeConfig,
        uploader: Arc<dyn VideoUploader>,
    ) -> Self {
        Self {
            config,
            youtube,
            uploader,
        }
    }
}
