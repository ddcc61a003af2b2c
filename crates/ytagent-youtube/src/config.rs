//! Upload configuration.

use crate::types::PrivacyStatus;

/// OAuth client settings and upload defaults.
#[derive(Debug, Clone, Default)]
pub struct YouTubeConfig {
    /// OAuth client id
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// OAuth redirect URI
    pub redirect_uri: Option<String>,
    /// Privacy applied to unscheduled uploads
    pub default_privacy: PrivacyStatus,
}

impl YouTubeConfig {
    /// Create config from environment variables.
    ///
    /// The redirect URI is derived from `NEXTAUTH_URL` as
    /// `<url>/api/auth/callback/google`.
    pub fn from_env() -> Self {
        Self {
            client_id: non_empty_var("GOOGLE_CLIENT_ID"),
            client_secret: non_empty_var("GOOGLE_CLIENT_SECRET"),
            redirect_uri: non_empty_var("NEXTAUTH_URL")
                .map(|base| redirect_uri_for(&base)),
            default_privacy: std::env::var("YOUTUBE_DEFAULT_PRIVACY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Whether OAuth client credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn redirect_uri_for(base: &str) -> String {
    format!("{}/api/auth/callback/google", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = YouTubeConfig::default();
        assert!(!config.has_credentials());
        assert_eq!(config.default_privacy, PrivacyStatus::Public);
    }

    #[test]
    fn test_redirect_uri() {
        assert_eq!(
            redirect_uri_for("http://localhost:3000/"),
            "http://localhost:3000/api/auth/callback/google"
        );
    }
}
