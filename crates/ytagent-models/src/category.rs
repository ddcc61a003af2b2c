//! Video category keys.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hosting-platform category id used when a category key is not recognized
/// ("People & Blogs").
pub const DEFAULT_PLATFORM_CATEGORY_ID: &str = "22";

/// Content category selected on the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Tech,
    Vlog,
    Shorts,
    Gaming,
    Tutorial,
    Entertainment,
    Education,
}

impl Category {
    /// All categories, in form display order.
    pub const ALL: &'static [Category] = &[
        Category::Tech,
        Category::Vlog,
        Category::Shorts,
        Category::Gaming,
        Category::Tutorial,
        Category::Entertainment,
        Category::Education,
    ];

    /// Resolve an exact category key.
    ///
    /// Keys are matched case-sensitively; `"Tech"` is not a known key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tech" => Some(Category::Tech),
            "vlog" => Some(Category::Vlog),
            "shorts" => Some(Category::Shorts),
            "gaming" => Some(Category::Gaming),
            "tutorial" => Some(Category::Tutorial),
            "entertainment" => Some(Category::Entertainment),
            "education" => Some(Category::Education),
            _ => None,
        }
    }

    /// Resolve a key, falling back to [`Category::Tech`].
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Vlog => "vlog",
            Category::Shorts => "shorts",
            Category::Gaming => "gaming",
            Category::Tutorial => "tutorial",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
        }
    }

    /// Label shown in the form's category select.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Vlog => "Vlog",
            Category::Shorts => "Shorts",
            Category::Gaming => "Gaming",
            Category::Tutorial => "Tutorial",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
        }
    }

    /// YouTube Data API category id for this content category.
    pub fn platform_category_id(&self) -> &'static str {
        match self {
            // Science & Technology
            Category::Tech => "28",
            // People & Blogs
            Category::Vlog => "22",
            // Entertainment
            Category::Shorts | Category::Entertainment => "24",
            // Gaming
            Category::Gaming => "20",
            // Education
            Category::Tutorial | Category::Education => "27",
        }
    }

    /// Platform category id for a raw key, `"22"` when the key is unknown.
    pub fn platform_category_id_for_key(key: &str) -> &'static str {
        Self::from_key(key)
            .map(|c| c.platform_category_id())
            .unwrap_or(DEFAULT_PLATFORM_CATEGORY_ID)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryParseError(String);
