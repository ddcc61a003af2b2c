//! Uploader interface and the demo implementation.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use ytagent_models::VideoId;

use crate::config::YouTubeConfig;
use crate::error::UploadResult;
use crate::types::{UploadOutcome, UploadRequest};

/// Submits a video with its metadata to a hosting platform.
#[async_trait]
pub trait VideoUploader: Send + Sync {
    /// Name used in logs and metrics labels.
    fn name(&self) -> &'static str;

    /// Upload a video and return the platform's id for it.
    async fn upload(&self, request: &UploadRequest) -> UploadResult<UploadOutcome>;

    /// Check the uploader can accept work.
    async fn health_check(&self) -> UploadResult<()>;
}

/// Uploader that never leaves the process.
#[derive(Debug, Clone, Default)]
pub struct DemoUploader {
    config: YouTubeConfig,
}

impl DemoUploader {
    pub fn new(config: YouTubeConfig) -> Self {
        if !config.has_credentials() {
            warn!("No OAuth client credentials configured; demo uploader only");
        }
        Self { config }
    }
}

#[async_trait]
impl VideoUploader for DemoUploader {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn upload(&self, request: &UploadRequest) -> UploadResult<UploadOutcome> {
        let resource = request.to_video_resource();
        debug!(resource = %serde_json::to_string(&resource)?, "Video resource");

        let video_id = VideoId::demo_at(Utc::now());

        info!(
            video_id = %video_id,
            source = %request.source.describe(),
            category_id = %request.category_id,
            privacy = %resource.status.privacy_status,
            publish_at = ?request.publish_at,
            monetization = request.monetization,
            credentials = self.config.has_credentials(),
            "Demo upload accepted"
        );

        Ok(UploadOutcome {
            video_id,
            success: true,
        })
    }

    async fn health_check(&self) -> UploadResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoSource;
    use bytes::Bytes;
    use ytagent_models::SeoContent;

    fn request() -> UploadRequest {
        let content = SeoContent {
            title: "Amazing Vlog - Must Watch!".to_string(),
            description: "desc".to_string(),
            tags: vec!["vlog".to_string()],
            hashtags: vec!["#Vlog".to_string()],
            thumbnail_prompt: "prompt".to_string(),
        };
        let source = VideoSource::File {
            file_name: "day.mp4".to_string(),
            bytes: Bytes::from_static(b"not really a video"),
        };
        UploadRequest::new(source, &content, "vlog").with_monetization(true)
    }

    #[tokio::test]
    async fn test_demo_upload_returns_demo_id() {
        let uploader = DemoUploader::default();
        let before = Utc::now().timestamp_millis();

        let outcome = uploader.upload(&request()).await.unwrap();

        assert!(outcome.success);
        assert!(outcome.video_id.is_demo());
        let millis: i64 = outcome.video_id.as_str()["demo_".len()..].parse().unwrap();
        assert!(millis >= before);
    }

    #[tokio::test]
    async fn test_demo_health() {
        let uploader: Box<dyn VideoUploader> = Box::new(DemoUploader::default());
        assert_eq!(uploader.name(), "demo");
        assert!(uploader.health_check().await.is_ok());
    }
}
