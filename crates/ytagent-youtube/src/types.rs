//! Upload request/response types.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use ytagent_models::{Category, SeoContent, VideoId};

use crate::error::{UploadError, UploadResult};

/// Where the video comes from.
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// File posted with the form
    File { file_name: String, bytes: Bytes },
    /// Remote video URL
    Url(String),
}

impl VideoSource {
    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            VideoSource::File { file_name, bytes } => {
                format!("file '{}' ({} bytes)", file_name, bytes.len())
            }
            VideoSource::Url(url) => format!("url '{}'", url),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            VideoSource::File { file_name, .. } => Some(file_name),
            VideoSource::Url(_) => None,
        }
    }
}

/// Video visibility on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    #[default]
    Public,
    Private,
    Unlisted,
}

impl PrivacyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyStatus::Public => "public",
            PrivacyStatus::Private => "private",
            PrivacyStatus::Unlisted => "unlisted",
        }
    }
}

impl fmt::Display for PrivacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrivacyStatus {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(PrivacyStatus::Public),
            "private" => Ok(PrivacyStatus::Private),
            "unlisted" => Ok(PrivacyStatus::Unlisted),
            _ => Err(UploadError::InvalidPrivacy(s.to_string())),
        }
    }
}

/// Parse a submitted schedule time.
///
/// Accepts RFC 3339 or a bare `YYYY-MM-DDTHH:MM[:SS]` value. A bare value
/// carries no offset and is read as UTC; the form page sends the browser's
/// local time already converted to RFC 3339.
pub fn parse_schedule_time(raw: &str) -> UploadResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(UploadError::InvalidSchedule(raw.to_string()))
}

/// Everything the uploader needs for one video.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub source: VideoSource,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Platform category id (e.g. "28" for Science & Technology)
    pub category_id: String,
    pub privacy_status: PrivacyStatus,
    pub publish_at: Option<DateTime<Utc>>,
    /// Collected from the form; the Data API has no field for it
    pub monetization: bool,
}

impl UploadRequest {
    /// Build a request from generated content and the submitted category key.
    pub fn new(source: VideoSource, content: &SeoContent, category_key: &str) -> Self {
        Self {
            source,
            title: content.title.clone(),
            description: content.description.clone(),
            tags: content.tags.clone(),
            category_id: Category::platform_category_id_for_key(category_key).to_string(),
            privacy_status: PrivacyStatus::default(),
            publish_at: None,
            monetization: false,
        }
    }

    pub fn with_privacy(mut self, privacy: PrivacyStatus) -> Self {
        self.privacy_status = privacy;
        self
    }

    pub fn with_publish_at(mut self, publish_at: Option<DateTime<Utc>>) -> Self {
        self.publish_at = publish_at;
        self
    }

    pub fn with_monetization(mut self, monetization: bool) -> Self {
        self.monetization = monetization;
        self
    }

    /// Privacy actually sent: scheduled videos must be private until
    /// `publishAt`.
    pub fn effective_privacy(&self) -> PrivacyStatus {
        if self.publish_at.is_some() {
            PrivacyStatus::Private
        } else {
            self.privacy_status
        }
    }

    /// Video resource body for `videos.insert` (`part=snippet,status`).
    pub fn to_video_resource(&self) -> VideoResource {
        VideoResource {
            snippet: VideoSnippet {
                title: self.title.clone(),
                description: self.description.clone(),
                tags: self.tags.clone(),
                category_id: self.category_id.clone(),
            },
            status: VideoStatus {
                privacy_status: self.effective_privacy(),
                publish_at: self.publish_at,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResource {
    pub snippet: VideoSnippet,
    pub status: VideoStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub privacy_status: PrivacyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<DateTime<Utc>>,
}

/// Successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub video_id: VideoId,
    pub success: bool,
}
