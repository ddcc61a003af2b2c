//! Upload form handler.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use ytagent_models::{SeoContentRequest, UploadResponse};
use ytagent_youtube::{parse_schedule_time, UploadError, UploadRequest, VideoSource};

use crate::error::{ApiError, ApiResult};
use crate::handlers::seo::generate_content;
use crate::metrics;
use crate::middleware::RequestId;
use crate::security::{sanitize_file_name, validate_video_url};
use crate::state::AppState;

/// Fields posted by the upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub video: Option<(String, Bytes)>,
    pub video_url: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub monetization: bool,
    /// Schedule time as typed; echoed back untouched.
    pub schedule_time: Option<String>,
    /// The same instant converted to UTC by the page.
    pub schedule_time_utc: Option<String>,
}

impl UploadForm {
    /// Read every part of the form. Empty files and blank text count as absent.
    pub async fn from_multipart(multipart: &mut Multipart) -> ApiResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "video" => {
                    let file_name = sanitize_file_name(field.file_name().unwrap_or_default());
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        form.video = Some((file_name, bytes));
                    }
                }
                "videoUrl" => form.video_url = non_blank(field.text().await?),
                "category" => form.category = Some(field.text().await?),
                "language" => form.language = Some(field.text().await?),
                "monetization" => form.monetization = field.text().await? == "true",
                "scheduleTime" => form.schedule_time = non_blank(field.text().await?),
                "scheduleTimeUtc" => form.schedule_time_utc = non_blank(field.text().await?),
                other => warn!(field = %other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Pick the video source; a posted file wins over a URL.
    ///
    /// The URL is never fetched, so any non-blank string is accepted.
    pub fn source(&mut self) -> ApiResult<VideoSource> {
        if let Some((file_name, bytes)) = self.video.take() {
            return Ok(VideoSource::File { file_name, bytes });
        }

        match self.video_url.take() {
            Some(url) => {
                if let Err(reason) = validate_video_url(&url).into_result() {
                    warn!(url = %url, reason = %reason, "Accepting video URL that would not be fetchable");
                }
                Ok(VideoSource::Url(url))
            }
            None => Err(ApiError::bad_request("Please provide a video file or URL")),
        }
    }

    /// Publish instant, if a schedule time was given and can be read.
    ///
    /// The page's UTC value wins over the raw one, which is read as UTC.
    pub fn publish_at(&self) -> Option<DateTime<Utc>> {
        let raw = self
            .schedule_time_utc
            .as_deref()
            .or(self.schedule_time.as_deref())?;

        match parse_schedule_time(raw) {
            Ok(at) => Some(at),
            Err(e) => {
                warn!(error = %e, "Unreadable schedule time; uploading unscheduled");
                None
            }
        }
    }

    /// Content request; missing fields get the form's defaults.
    pub fn seo_request(&self, source: &VideoSource) -> SeoContentRequest {
        let mut request = SeoContentRequest::default();
        if let Some(category) = &self.category {
            request.category = category.clone();
        }
        if let Some(language) = &self.language {
            request.language = language.clone();
        }
        request.video_file_name = source.file_name().map(str::to_string);
        request
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Generate SEO content for a posted video and hand it to the uploader.
pub async fn upload_video(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut form = UploadForm::from_multipart(&mut multipart).await?;
    let source = form.source()?;
    let publish_at = form.publish_at();

    let source_kind = match &source {
        VideoSource::File { bytes, .. } => {
            metrics::record_upload_bytes(bytes.len());
            "file"
        }
        VideoSource::Url(_) => "url",
    };

    let seo_request = form.seo_request(&source);
    let content = generate_content(&seo_request);

    let upload = UploadRequest::new(source, &content, &seo_request.category)
        .with_privacy(state.youtube.default_privacy)
        .with_publish_at(publish_at)
        .with_monetization(form.monetization);

    let uploader = state.uploader.name();
    let result = match state.uploader.upload(&upload).await {
        Ok(outcome) if outcome.success => Ok(outcome),
        Ok(_) => Err(UploadError::Rejected(format!("{} uploader reported failure", uploader))),
        Err(e) => Err(e),
    };
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, uploader = %uploader, request_id = %request_id.as_str(), "Upload failed");
            metrics::record_upload(uploader, "failed", source_kind);
            return Err(e.into());
        }
    };
    metrics::record_upload(uploader, "success", source_kind);

    info!(
        request_id = %request_id.as_str(),
        video_id = %outcome.video_id,
        category = %seo_request.category,
        language = %seo_request.language,
        source = source_kind,
        scheduled = publish_at.is_some(),
        "Video processed"
    );

    Ok(Json(UploadResponse {
        content,
        video_id: outcome.video_id,
        scheduled_time: form.schedule_time,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_requires_file_or_url() {
        let mut form = UploadForm::default();
        let err = form.source().unwrap_err();
        assert_eq!(err.to_string(), "Please provide a video file or URL");
    }

    #[test]
    fn test_file_wins_over_url() {
        let mut form = UploadForm {
            video: Some(("clip.mp4".to_string(), Bytes::from_static(b"data"))),
            video_url: Some("https://example.com/v.mp4".to_string()),
            ..UploadForm::default()
        };
        assert!(matches!(form.source().unwrap(), VideoSource::File { .. }));
    }

    #[test]
    fn test_any_url_string_is_accepted() {
        for url in ["my-clip", "http://169.254.169.254/latest", "ftp://host/v.mp4"] {
            let mut form = UploadForm {
                video_url: Some(url.to_string()),
                ..UploadForm::default()
            };
            match form.source().unwrap() {
                VideoSource::Url(accepted) => assert_eq!(accepted, url),
                other => panic!("unexpected source {other:?}"),
            }
        }
    }

    #[test]
    fn test_publish_at() {
        let form = UploadForm::default();
        assert_eq!(form.publish_at(), None);

        let form = UploadForm {
            schedule_time: Some("tomorrow".to_string()),
            ..UploadForm::default()
        };
        assert_eq!(form.publish_at(), None);

        let form = UploadForm {
            schedule_time: Some("2030-01-01T10:00".to_string()),
            ..UploadForm::default()
        };
        assert_eq!(
            form.publish_at().unwrap().to_rfc3339(),
            "2030-01-01T10:00:00+00:00"
        );

        // Browser in UTC+2: the converted value is the one scheduled
        let form = UploadForm {
            schedule_time: Some("2030-01-01T10:00".to_string()),
            schedule_time_utc: Some("2030-01-01T08:00:00.000Z".to_string()),
            ..UploadForm::default()
        };
        assert_eq!(
            form.publish_at().unwrap().to_rfc3339(),
            "2030-01-01T08:00:00+00:00"
        );
    }

    #[test]
    fn test_seo_request_defaults() {
        let form = UploadForm::default();
        let source = VideoSource::Url("https://example.com/v.mp4".to_string());
        let request = form.seo_request(&source);
        assert_eq!(request.category, "tech");
        assert_eq!(request.language, "en");
        assert!(request.video_file_name.is_none());

        let form = UploadForm {
            category: Some("gaming".to_string()),
            language: Some("ja".to_string()),
            ..UploadForm::default()
        };
        let source = VideoSource::File {
            file_name: "run.mp4".to_string(),
            bytes: Bytes::from_static(b"x"),
        };
        let request = form.seo_request(&source);
        assert_eq!(request.category, "gaming");
        assert_eq!(request.language, "ja");
        assert_eq!(request.video_file_name.as_deref(), Some("run.mp4"));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  ".to_string()), None);
        assert_eq!(non_blank("x".to_string()), Some("x".to_string()));
    }
}
