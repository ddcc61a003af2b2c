//! SEO content generation.
//!
//! Everything except the title is a deterministic function of the category
//! and language. The title is one of five templates picked uniformly at
//! random.

use rand::Rng;
use tracing::debug;
use ytagent_models::{Category, SeoContent, SeoContentRequest};

use crate::profiles::{profile, CategoryProfile};

/// Tags appended after the language code, in order.
pub const TAG_SUFFIXES: [&str; 4] = ["2024", "viral", "trending", "new"];

/// Number of title templates.
pub const TITLE_TEMPLATE_COUNT: usize = 5;

/// Generate SEO content using the thread-local RNG for the title pick.
pub fn generate(request: &SeoContentRequest) -> SeoContent {
    generate_with_rng(request, &mut rand::rng())
}

/// Generate SEO content with a caller-supplied RNG.
pub fn generate_with_rng<R: Rng>(request: &SeoContentRequest, rng: &mut R) -> SeoContent {
    let raw = request.category.as_str();
    let known = Category::from_key(raw);
    let resolved = known.unwrap_or_default();
    let profile = profile(resolved);

    debug!(
        category = %raw,
        profile = %resolved,
        fallback = known.is_none(),
        language = %request.language,
        "Generating SEO content"
    );

    let titles = title_candidates(raw);
    let title = titles[rng.random_range(0..TITLE_TEMPLATE_COUNT)].clone();

    SeoContent {
        title,
        description: describe(raw, profile),
        tags: build_tags(profile, &request.language),
        hashtags: profile.hashtags.iter().map(|h| h.to_string()).collect(),
        thumbnail_prompt: profile.thumbnail_prompt.to_string(),
    }
}

/// The five possible titles for a raw category key.
///
/// Unknown keys are echoed back as typed, with only the first letter raised.
pub fn title_candidates(category: &str) -> [String; TITLE_TEMPLATE_COUNT] {
    let cat = capitalize(category);
    [
        format!("{cat} Content You Need to See"),
        format!("Amazing {cat} - Must Watch!"),
        format!("The Ultimate {cat} Experience"),
        format!("{cat} That Will Blow Your Mind"),
        format!("Top {cat} Content of 2024"),
    ]
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn build_tags(profile: &CategoryProfile, language: &str) -> Vec<String> {
    profile
        .tags
        .iter()
        .copied()
        .chain(std::iter::once(language))
        .chain(TAG_SUFFIXES)
        .map(str::to_string)
        .collect()
}

/// Description for the resolved profile. `raw` is the category key as
/// submitted; the tech template interpolates it even on fallback.
fn describe(raw: &str, profile: &CategoryProfile) -> String {
    let k = profile.keywords;

    match profile.category {
        Category::Tech => format!(
            "Discover the latest in {} and {}! This video covers cutting-edge {} techniques and {} innovations that you need to know.\n\
             \n\
             🔔 Subscribe for more {raw} content!\n\
             💬 Comment your thoughts below\n\
             👍 Like if you enjoyed this video\n\
             \n\
             Keywords: {}\n\
             \n\
             #{raw} #technology #innovation #2024 #trending",
            k[0],
            k[1],
            k[2],
            k[3],
            k.iter().take(8).copied().collect::<Vec<_>>().join(", "),
        ),
        Category::Vlog => format!(
            "Join me in this amazing {} where I share my {} and {} experiences! Get an exclusive look at my {} in this personal journey.\n\
             \n\
             🔔 Subscribe to follow my journey!\n\
             💬 Let me know what you think\n\
             👍 Drop a like if you enjoyed\n\
             \n\
             #{raw} #dailyvlog #lifestyle #2024",
            k[0], k[2], k[3], k[5],
        ),
        Category::Shorts => format!(
            "Quick and entertaining {raw} content that you can't miss! Perfect for a fast dose of {} and {} entertainment.\n\
             \n\
             #shorts #viral #trending #2024",
            k[4], k[5],
        ),
        Category::Gaming => format!(
            "Epic {} featuring intense action and {} moments! Watch as we dive deep into this {} with expert {}.\n\
             \n\
             🎮 Subscribe for daily gaming content!\n\
             💬 Comment your favorite moment\n\
             👍 Like and share with fellow gamers\n\
             \n\
             #gaming #gameplay #gamer #2024",
            k[1], k[4], k[2], k[9],
        ),
        Category::Tutorial => format!(
            "Learn {} do this with our comprehensive {}! Perfect for {} and anyone looking to master {} techniques.\n\
             \n\
             📚 Step-by-step instructions\n\
             💡 Pro tips and tricks included\n\
             🔔 Subscribe for more tutorials!\n\
             \n\
             #tutorial #howto #learn #guide #2024",
            k[1], k[2], k[5], k[7],
        ),
        Category::Entertainment => format!(
            "{} and {} content that will make you {}! Pure {} at its finest.\n\
             \n\
             🔔 Subscribe for daily laughs!\n\
             👍 Like if this made you smile\n\
             💬 Share your favorite part\n\
             \n\
             #entertainment #funny #comedy #viral #2024",
            k[2], k[3], k[5], k[0],
        ),
        Category::Education => format!(
            "Expand your {} with this {} content! Learn about {} and interesting {} explained in an easy-to-understand way.\n\
             \n\
             📖 Educational content for curious minds\n\
             🔔 Subscribe to keep learning!\n\
             💬 Ask questions in the comments\n\
             \n\
             #education #learning #knowledge #2024",
            k[2], k[3], k[8], k[9],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::profile_for_key;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn seeded(category: &str, language: &str) -> SeoContent {
        let mut rng = StdRng::seed_from_u64(7);
        generate_with_rng(&SeoContentRequest::new(category, language), &mut rng)
    }

    #[test]
    fn test_known_categories_use_their_tables() {
        for category in Category::ALL {
            let content = seeded(category.as_str(), "en");
            let p = profile(*category);
            assert_eq!(content.thumbnail_prompt, p.thumbnail_prompt);
            assert_eq!(content.hashtags, p.hashtags);
        }
    }

    #[test]
    fn test_gaming_scenario() {
        let content = seeded("gaming", "en");
        assert_eq!(
            content.hashtags,
            ["#Gaming", "#Gameplay", "#Gamer", "#LetsPlay", "#VideoGames"]
        );
        assert!(content.tags.ends_with(&[
            "en".to_string(),
            "2024".to_string(),
            "viral".to_string(),
            "trending".to_string(),
            "new".to_string(),
        ]));
        assert!(content.thumbnail_prompt.starts_with("Epic gaming scene"));
        assert!(content
            .description
            .starts_with("Epic gameplay featuring intense action and playthrough moments!"));
        assert!(content.description.contains("with expert gaming tips."));
    }

    #[test]
    fn test_unknown_category_falls_back_to_tech() {
        let content = seeded("unknown_xyz", "fr");
        let tech = profile(Category::Tech);

        assert_eq!(content.thumbnail_prompt, tech.thumbnail_prompt);
        assert_eq!(content.hashtags, tech.hashtags);
        assert_eq!(&content.tags[..10], tech.tags);
        assert_eq!(content.tags[10], "fr");
        assert!(content.title.contains("Unknown_xyz"));

        // The tech template still echoes the submitted key.
        assert!(content.description.contains("Subscribe for more unknown_xyz content!"));
        assert!(content.description.ends_with("#unknown_xyz #technology #innovation #2024 #trending"));
    }

    #[test]
    fn test_tag_layout() {
        for key in ["tech", "vlog", "shorts", "education", "nope"] {
            let content = seeded(key, "ko");
            let p = profile_for_key(key);
            assert_eq!(content.tags.len(), p.tags.len() + 1 + TAG_SUFFIXES.len());
            assert!(content.tags.ends_with(&TAG_SUFFIXES.map(String::from)));
            assert_eq!(content.tags[p.tags.len()], "ko");
        }
    }

    #[test]
    fn test_tags_are_not_deduplicated() {
        // "viral" is both a shorts tag and a fixed suffix.
        let content = seeded("shorts", "en");
        assert_eq!(content.tags.iter().filter(|t| *t == "viral").count(), 2);
    }

    #[test]
    fn test_title_is_one_of_five() {
        let candidates = title_candidates("vlog");
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let content = generate_with_rng(&SeoContentRequest::new("vlog", "en"), &mut rng);
            assert!(candidates.contains(&content.title));
            seen.insert(content.title);
        }

        assert_eq!(seen.len(), TITLE_TEMPLATE_COUNT);
    }

    #[test]
    fn test_title_candidates() {
        assert_eq!(
            title_candidates("tech"),
            [
                "Tech Content You Need to See",
                "Amazing Tech - Must Watch!",
                "The Ultimate Tech Experience",
                "Tech That Will Blow Your Mind",
                "Top Tech Content of 2024",
            ]
        );
    }

    #[test]
    fn test_only_title_varies() {
        let request = SeoContentRequest::new("tutorial", "hi");
        let a = generate_with_rng(&request, &mut StdRng::seed_from_u64(1));
        let b = generate(&request);
        assert_eq!(a.description, b.description);
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.hashtags, b.hashtags);
        assert_eq!(a.thumbnail_prompt, b.thumbnail_prompt);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("gaming"), "Gaming");
        assert_eq!(capitalize("unknown_xyz"), "Unknown_xyz");
        assert_eq!(capitalize("eDUCATION"), "EDUCATION");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éte"), "Éte");
    }

    #[test]
    fn test_tech_description() {
        let content = seeded("tech", "en");
        assert_eq!(
            content.description,
            "Discover the latest in technology and software! This video covers cutting-edge coding techniques and programming innovations that you need to know.\n\
             \n\
             🔔 Subscribe for more tech content!\n\
             💬 Comment your thoughts below\n\
             👍 Like if you enjoyed this video\n\
             \n\
             Keywords: technology, software, coding, programming, development, innovation, digital, tech review\n\
             \n\
             #tech #technology #innovation #2024 #trending"
        );
    }

    #[test]
    fn test_shorts_description() {
        let content = seeded("shorts", "en");
        assert_eq!(
            content.description,
            "Quick and entertaining shorts content that you can't miss! Perfect for a fast dose of trending and short form entertainment.\n\
             \n\
             #shorts #viral #trending #2024"
        );
    }

    #[test]
    fn test_file_name_does_not_affect_output() {
        let plain = SeoContentRequest::new("education", "en");
        let named = plain.clone().with_video_file_name("lecture.mp4");
        let a = generate_with_rng(&plain, &mut StdRng::seed_from_u64(3));
        let b = generate_with_rng(&named, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
