//! Shared data models for the YouTube upload agent.
//!
//! This crate provides Serde-serializable types for:
//! - Content categories and their platform category ids
//! - Form languages
//! - SEO content requests and generated bundles
//! - Video identifiers

pub mod category;
pub mod language;
pub mod seo;
pub mod video;

// Re-export common types
pub use category::{Category, CategoryParseError, DEFAULT_PLATFORM_CATEGORY_ID};
pub use language::{Language, LanguageParseError};
pub use seo::{SeoContent, SeoContentRequest, UploadResponse};
pub use video::VideoId;
