//! SEO content handlers.

use axum::Json;
use serde::Serialize;
use tracing::info;
use ytagent_models::{Category, Language, SeoContent, SeoContentRequest};

use crate::metrics;

/// Generate content and record it. Any category or language is accepted.
pub(crate) fn generate_content(request: &SeoContentRequest) -> SeoContent {
    let known = Category::from_key(&request.category);
    metrics::record_seo_generated(
        known.map(|c| c.as_str()).unwrap_or("unknown"),
        known.is_none(),
    );

    ytagent_seo::generate(request)
}

/// Generate SEO content without uploading.
pub async fn generate_seo(Json(request): Json<SeoContentRequest>) -> Json<SeoContent> {
    let content = generate_content(&request);

    info!(
        category = %request.category,
        language = %request.language,
        title = %content.title,
        "Generated SEO content"
    );

    Json(content)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub key: &'static str,
    pub label: &'static str,
    pub platform_category_id: &'static str,
}

#[derive(Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Form options.
#[derive(Serialize)]
pub struct OptionsResponse {
    pub categories: Vec<CategoryOption>,
    pub languages: Vec<LanguageOption>,
}

/// List the category and language options offered by the form.
pub async fn list_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        categories: Category::ALL
            .iter()
            .map(|c| CategoryOption {
                key: c.as_str(),
                label: c.display_name(),
                platform_category_id: c.platform_category_id(),
            })
            .collect(),
        languages: Language::ALL
            .iter()
            .map(|l| LanguageOption {
                code: l.code(),
                label: l.display_name(),
            })
            .collect(),
    })
}
