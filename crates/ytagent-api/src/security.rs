//! Security utilities for input validation and sanitization.
//!
//! This module provides:
//! - Video URL classification (logged, never enforced: the URL is not fetched)
//! - Uploaded file name sanitization

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use url::Url;

/// Maximum URL length to prevent DoS attacks.
const MAX_URL_LENGTH: usize = 2048;

/// Maximum length kept from an uploaded file name.
pub const MAX_FILE_NAME_LENGTH: usize = 255;

/// Blocked URL patterns (sensitive endpoints).
static BLOCKED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Internal IP ranges
        r"^https?://127\.",
        r"^https?://localhost",
        r"^https?://0\.0\.0\.0",
        r"^https?://10\.",
        r"^https?://172\.(1[6-9]|2[0-9]|3[0-1])\.",
        r"^https?://192\.168\.",
        r"^https?://169\.254\.",
        r"^https?://\[::1\]",
        r"^https?://\[fd",
        r"^https?://\[fe80",
        // Cloud metadata endpoints
        r"^https?://metadata\.",
        r"^https?://metadata\.google\.internal",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Result of URL validation.
#[derive(Debug)]
pub enum UrlValidationResult {
    /// URL is valid and allowed.
    Valid(String),
    /// URL is malformed or uses an unsupported protocol.
    Invalid(String),
    /// URL matches a blocked pattern (e.g., internal IPs).
    Blocked(String),
    /// URL exceeds maximum length.
    TooLong,
}

impl UrlValidationResult {
    /// Convert to Result for easy error handling.
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Valid(url) => Ok(url),
            Self::Invalid(msg) | Self::Blocked(msg) => Err(msg),
            Self::TooLong => Err(format!(
                "URL exceeds maximum length of {} characters",
                MAX_URL_LENGTH
            )),
        }
    }
}

/// Classify a submitted video URL.
///
/// Any public http(s) host is valid; loopback, private ranges and cloud
/// metadata hosts are blocked.
pub fn validate_video_url(url: &str) -> UrlValidationResult {
    if url.len() > MAX_URL_LENGTH {
        return UrlValidationResult::TooLong;
    }

    let url = url.trim();
    if url.is_empty() {
        return UrlValidationResult::Invalid("URL cannot be empty".to_string());
    }

    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => return UrlValidationResult::Invalid(format!("Invalid URL format: {}", e)),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return UrlValidationResult::Invalid(format!(
                "Invalid protocol '{}'. Only HTTP and HTTPS are allowed.",
                scheme
            ))
        }
    }

    if parsed.host_str().is_none() {
        return UrlValidationResult::Invalid("URL must have a valid domain".to_string());
    }

    // Match against the normalized form so case and userinfo tricks don't slip by
    let normalized = format!(
        "{}://{}",
        parsed.scheme(),
        parsed.host_str().unwrap_or_default().to_lowercase()
    );
    if BLOCKED_PATTERNS.iter().any(|p| p.is_match(&normalized)) {
        warn!(url = %url, "Blocked URL pattern detected");
        return UrlValidationResult::Blocked(
            "URL appears to target an internal or restricted endpoint".to_string(),
        );
    }

    UrlValidationResult::Valid(url.to_string())
}

/// Reduce an uploaded file name to its last path component without control
/// characters.
pub fn sanitize_file_name(input: &str) -> String {
    let base = input
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_FILE_NAME_LENGTH)
        .collect();

    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "video".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(matches!(
            validate_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            UrlValidationResult::Valid(_)
        ));
        assert!(matches!(
            validate_video_url("https://cdn.example.com/videos/clip.mp4"),
            UrlValidationResult::Valid(_)
        ));
    }

    #[test]
    fn test_blocked_internal_ips() {
        for url in [
            "http://127.0.0.1/video.mp4",
            "http://localhost/video.mp4",
            "http://LOCALHOST:8080/video.mp4",
            "http://192.168.1.1/video.mp4",
            "http://169.254.169.254/latest/meta-data/",
            "http://user@10.0.0.5/video.mp4",
            "http://[::1]/video.mp4",
        ] {
            assert!(
                matches!(validate_video_url(url), UrlValidationResult::Blocked(_)),
                "{url} should be blocked"
            );
        }
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            validate_video_url("ftp://example.com/video.mp4"),
            UrlValidationResult::Invalid(_)
        ));
        assert!(matches!(
            validate_video_url("not a url"),
            UrlValidationResult::Invalid(_)
        ));
        assert!(matches!(validate_video_url("   "), UrlValidationResult::Invalid(_)));
    }

    #[test]
    fn test_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(validate_video_url(&url), UrlValidationResult::TooLong));
        assert!(validate_video_url(&url).into_result().is_err());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("holiday.mp4"), "holiday.mp4");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\clip.mov"), "clip.mov");
        assert_eq!(sanitize_file_name("bad\u{0}name.mp4"), "badname.mp4");
        assert_eq!(sanitize_file_name(""), "video");
        assert_eq!(sanitize_file_name("dir/.."), "video");
    }
}
