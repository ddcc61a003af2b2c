//! Static per-category profiles.

use ytagent_models::Category;

/// Keywords, tags, hashtags and thumbnail direction for one category.
#[derive(Debug)]
pub struct CategoryProfile {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub hashtags: &'static [&'static str],
    pub thumbnail_prompt: &'static str,
}

static TECH: CategoryProfile = CategoryProfile {
    category: Category::Tech,
    keywords: &[
        "technology", "software", "coding", "programming", "development",
        "innovation", "digital", "tech review", "gadgets", "AI",
    ],
    tags: &[
        "technology", "tech", "software", "innovation", "digital",
        "gadgets", "techreview", "coding", "programming", "development",
    ],
    hashtags: &["#Technology", "#Tech", "#Innovation", "#Digital", "#Software"],
    thumbnail_prompt: "High-tech futuristic design with bold text overlay, vibrant blue and purple gradient, modern gadgets or code in background, professional and sleek aesthetic",
};

static VLOG: CategoryProfile = CategoryProfile {
    category: Category::Vlog,
    keywords: &[
        "vlog", "daily vlog", "lifestyle", "daily life", "personal",
        "day in the life", "behind the scenes", "journey", "experience", "story",
    ],
    tags: &[
        "vlog", "dailyvlog", "lifestyle", "dayinthelife", "behindthescenes",
        "vlogger", "daily", "life", "personal", "journey",
    ],
    hashtags: &["#Vlog", "#DailyVlog", "#Lifestyle", "#DayInTheLife", "#Vlogger"],
    thumbnail_prompt: "Bright and colorful lifestyle shot with expressive face, warm natural lighting, candid moment, high contrast with bold text, inviting and personal vibe",
};

static SHORTS: CategoryProfile = CategoryProfile {
    category: Category::Shorts,
    keywords: &[
        "shorts", "short video", "quick", "viral", "trending",
        "short form", "bite-sized", "clip", "fast", "snappy",
    ],
    tags: &[
        "shorts", "shortvideo", "viral", "trending", "quick",
        "shortform", "youtubeshorts", "viralshorts", "trendingshorts", "clip",
    ],
    hashtags: &["#Shorts", "#YouTubeShorts", "#Viral", "#Trending", "#ShortVideo"],
    thumbnail_prompt: "Eye-catching vertical design with bold colors, dynamic action shot, large text with high contrast, energetic and attention-grabbing composition",
};

static GAMING: CategoryProfile = CategoryProfile {
    category: Category::Gaming,
    keywords: &[
        "gaming", "gameplay", "game", "gamer", "playthrough",
        "walkthrough", "lets play", "game review", "esports", "gaming tips",
    ],
    tags: &[
        "gaming", "gameplay", "gamer", "playthrough", "letsplay",
        "walkthrough", "gamereview", "esports", "videogames", "games",
    ],
    hashtags: &["#Gaming", "#Gameplay", "#Gamer", "#LetsPlay", "#VideoGames"],
    thumbnail_prompt: "Epic gaming scene with character action shot, vibrant neon colors, game logo prominent, intense expression, dark background with glowing effects",
};

static TUTORIAL: CategoryProfile = CategoryProfile {
    category: Category::Tutorial,
    keywords: &[
        "tutorial", "how to", "guide", "learn", "step by step",
        "beginner", "tips", "tricks", "education", "teach",
    ],
    tags: &[
        "tutorial", "howto", "guide", "learn", "education",
        "tips", "tricks", "stepbystep", "beginner", "teaching",
    ],
    hashtags: &["#Tutorial", "#HowTo", "#Learn", "#Guide", "#Education"],
    thumbnail_prompt: "Clean educational layout with step numbers, bright background, before/after comparison, clear title text, professional and trustworthy design",
};

static ENTERTAINMENT: CategoryProfile = CategoryProfile {
    category: Category::Entertainment,
    keywords: &[
        "entertainment", "fun", "funny", "comedy", "hilarious",
        "laugh", "entertaining", "humor", "amusing", "viral",
    ],
    tags: &[
        "entertainment", "funny", "comedy", "fun", "humor",
        "hilarious", "entertaining", "laugh", "viral", "amusing",
    ],
    hashtags: &["#Entertainment", "#Funny", "#Comedy", "#Fun", "#Viral"],
    thumbnail_prompt: "Expressive reaction face with bright colors, bold text, high energy composition, funny or surprising expression, yellow and red accents",
};

static EDUCATION: CategoryProfile = CategoryProfile {
    category: Category::Education,
    keywords: &[
        "education", "learning", "knowledge", "educational", "teach",
        "lesson", "academic", "informative", "science", "facts",
    ],
    tags: &[
        "education", "learning", "educational", "knowledge", "teach",
        "lesson", "informative", "science", "facts", "academic",
    ],
    hashtags: &["#Education", "#Learning", "#Knowledge", "#Educational", "#Science"],
    thumbnail_prompt: "Professional educational design with icons or diagrams, clean white/blue background, bold readable text, academic but approachable aesthetic",
};

/// Profile for a known category.
pub fn profile(category: Category) -> &'static CategoryProfile {
    match category {
        Category::Tech => &TECH,
        Category::Vlog => &VLOG,
        Category::Shorts => &SHORTS,
        Category::Gaming => &GAMING,
        Category::Tutorial => &TUTORIAL,
        Category::Entertainment => &ENTERTAINMENT,
        Category::Education => &EDUCATION,
    }
}

/// Profile for a raw category key; unknown keys get the tech profile.
pub fn profile_for_key(key: &str) -> &'static CategoryProfile {
    profile(Category::resolve(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_is_complete() {
        for category in Category::ALL {
            let p = profile(*category);
            assert_eq!(p.category, *category);
            assert_eq!(p.keywords.len(), 10, "{category} keywords");
            assert_eq!(p.tags.len(), 10, "{category} tags");
            assert_eq!(p.hashtags.len(), 5, "{category} hashtags");
            assert!(p.hashtags.iter().all(|h| h.starts_with('#')));
            assert!(!p.thumbnail_prompt.is_empty());
        }
    }

    #[test]
    fn test_unknown_key_uses_tech() {
        assert_eq!(profile_for_key("unknown_xyz").category, Category::Tech);
        assert_eq!(profile_for_key("education").category, Category::Education);
    }
}
