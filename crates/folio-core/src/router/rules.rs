//! Local keyword rules, evaluated in the order [`default_rules`] returns them.

use crate::knowledge::PortfolioProfile;

/// Substrings that signal a request for social/profile links.
///
/// `" x "` keeps its surrounding spaces so words containing "x" do not match;
/// the other tokens are plain substrings.
pub const SOCIAL_KEYWORDS: [&str; 12] = [
    "link", "social", "github", "youtube", "facebook", "instagram", "twitter", " x ", "tiktok",
    "discord", "dev.to", "devpost",
];

const SKILL_KEYWORDS: [&str; 1] = ["skill"];
const ABOUT_KEYWORDS: [&str; 2] = ["about", "who is"];
const EXPERIENCE_KEYWORDS: [&str; 2] = ["experience", "hackathon"];

/// A guard (any keyword is a substring of the normalized question) paired with a canned answer.
#[derive(Clone)]
pub struct KeywordRule {
    name: &'static str,
    keywords: &'static [&'static str],
    render: fn(&PortfolioProfile) -> String,
}

impl KeywordRule {
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        render: fn(&PortfolioProfile) -> String,
    ) -> Self {
        Self {
            name,
            keywords,
            render,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// `normalized` must already be lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }

    pub fn render(&self, profile: &PortfolioProfile) -> String {
        (self.render)(profile)
    }
}

impl std::fmt::Debug for KeywordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordRule")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .finish()
    }
}

/// links, skills, about, experience.
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("links", &SOCIAL_KEYWORDS, render_links),
        KeywordRule::new("skills", &SKILL_KEYWORDS, render_skills),
        KeywordRule::new("about", &ABOUT_KEYWORDS, render_about),
        KeywordRule::new("experience", &EXPERIENCE_KEYWORDS, render_experience),
    ]
}

fn render_links(profile: &PortfolioProfile) -> String {
    let mut text = format!("Sure! Here are {}'s official links:\n", profile.first_name());
    for link in &profile.links {
        text.push_str(&format!("• {}: {}\n", link.platform, link.url));
    }
    text
}

fn render_skills(profile: &PortfolioProfile) -> String {
    format!(
        "{}'s skills include: {}.",
        profile.first_name(),
        profile.skills.join(", ")
    )
}

fn render_about(profile: &PortfolioProfile) -> String {
    profile.about.clone()
}

fn render_experience(profile: &PortfolioProfile) -> String {
    format!(
        "{} has: {}.",
        profile.first_name(),
        profile.experience.join(". ")
    )
}
