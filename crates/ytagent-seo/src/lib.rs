//! Category-driven SEO content generation.
//!
//! Maps a `(category, language)` pair to a title, description, tag list,
//! hashtag list and thumbnail prompt using static per-category tables.
//! Unknown categories use the tech profile; generation never fails.

pub mod generator;
pub mod profiles;

pub use generator::{capitalize, generate, generate_with_rng, title_candidates, TAG_SUFFIXES};
pub use profiles::{profile, profile_for_key, CategoryProfile};
