//! Upload form page.

use std::sync::LazyLock;

use axum::response::Html;
use ytagent_models::{Category, Language};

const TEMPLATE: &str = include_str!("../../static/index.html");

/// Rendered once; the option lists are static.
static PAGE: LazyLock<String> = LazyLock::new(|| {
    let categories: String = Category::ALL
        .iter()
        .map(|c| {
            let selected = if *c == Category::default() { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                c.as_str(),
                selected,
                c.display_name()
            )
        })
        .collect();

    let languages: String = Language::ALL
        .iter()
        .map(|l| {
            let selected = if *l == Language::En { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                l.code(),
                selected,
                l.display_name()
            )
        })
        .collect();

    TEMPLATE
        .replace("{{CATEGORY_OPTIONS}}", &categories)
        .replace("{{LANGUAGE_OPTIONS}}", &languages)
});

/// Serve the upload form.
pub async fn index() -> Html<&'static str> {
    Html(PAGE.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lists_every_option() {
        for category in Category::ALL {
            assert!(PAGE.contains(&format!("value=\"{}\"", category.as_str())));
        }
        for language in Language::ALL {
            assert!(PAGE.contains(&format!("value=\"{}\"", language.code())));
        }
        assert!(!PAGE.contains("{{"));
    }
}
