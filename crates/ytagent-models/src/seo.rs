//! SEO content request/response models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::video::VideoId;

/// Input to SEO content generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoContentRequest {
    /// Category key; unknown keys use the tech profile
    #[serde(default = "default_category")]
    pub category: String,

    /// Language code, passed through to the tag list untouched
    #[serde(default = "default_language")]
    pub language: String,

    /// Name of the uploaded file, if any (not used for generation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file_name: Option<String>,
}

pub(crate) fn default_category() -> String {
    "tech".to_string()
}

pub(crate) fn default_language() -> String {
    "en".to_string()
}

impl SeoContentRequest {
    pub fn new(category: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            language: language.into(),
            video_file_name: None,
        }
    }

    pub fn with_video_file_name(mut self, name: impl Into<String>) -> Self {
        self.video_file_name = Some(name.into());
        self
    }
}

impl Default for SeoContentRequest {
    fn default() -> Self {
        Self::new(default_category(), default_language())
    }
}

/// Generated SEO bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoContent {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub thumbnail_prompt: String,
}

/// Response of the upload route: the SEO bundle plus the uploader's result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(flatten)]
    pub content: SeoContent,

    pub video_id: VideoId,

    /// Schedule time exactly as submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}
