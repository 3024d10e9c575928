use serde::{Deserialize, Serialize};
use std::path::Path;

/// Failure to load a profile file.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid profile JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the links section. Order in [`PortfolioProfile::links`] is listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// Portfolio facts served by the local keyword rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProfile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub links: Vec<SocialLink>,
}

impl PortfolioProfile {
    /// The compiled-in profile.
    pub fn builtin() -> Self {
        Self {
            name: "Hala Kabir".to_string(),
            title: "Youngest Certified Professional AI, Blockchain & Chatbot Developer".to_string(),
            tagline: "Building AI-powered applications, teaching Python globally, and innovating with cloud and blockchain".to_string(),
            about: "I am Hala Kabir, the youngest certified professional AI, blockchain, and chatbot developer. I have completed advanced certifications and fellowship programs in AI and blockchain with top positions. Alongside building real-world AI applications, I am now teaching Python to millions of children and beginners around the world through social media platforms such as YouTube and Facebook.".to_string(),
            skills: [
                "Artificial Intelligence",
                "Generative AI",
                "Machine Learning",
                "Large Language Models (LLMs)",
                "Blockchain Development",
                "Chatbot Development",
                "Python Programming",
                "Web & App Development",
                "Google Cloud & Cloud Run",
                "Teaching & Technical Content Creation",
                "Hackathon Development",
                "Startup & Product Building",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            experience: [
                "Participated in 5–7 national and international hackathons during 2025",
                "Participated in MUX Hackathon 2026",
                "Built and shipped multiple AI-powered applications",
                "Actively teaching Python through live sessions and tutorial series",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            links: vec![
                SocialLink::new("github", "https://github.com/halakabir234-hub"),
                SocialLink::new(
                    "linkedin",
                    "https://www.linkedin.com/in/afia-mother-of-a-young-coder-48519138b/",
                ),
                SocialLink::new("youtube", "https://www.youtube.com/@LearnwithHala-r2v"),
                SocialLink::new("facebook", "https://www.facebook.com/profile.php?id=61562563944122"),
                SocialLink::new("instagram", "https://www.instagram.com/halalearns/"),
                SocialLink::new("website", "https://halakabir.dev"),
                SocialLink::new("x", "https://x.com/AfiaOld58450"),
                SocialLink::new("tiktok", "https://www.tiktok.com/@your-username"),
                SocialLink::new("devto", "https://dev.to/halakabir234-hub"),
                SocialLink::new("devpost", "https://devpost.com/halakabir234-hub"),
                SocialLink::new("discord", "https://discord.gg/8VBnGjyh"),
            ],
        }
    }

    /// Loads a profile from a JSON file with the same shape as the serialized struct.
    pub fn load_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ProfileError::Json {
            path: display,
            source,
        })
    }

    /// Loads `path` when given, falling back to [`Self::builtin`] if it is absent or unreadable.
    pub fn load_or_builtin(path: Option<&str>) -> Self {
        match path.filter(|p| !p.is_empty()) {
            Some(p) => match Self::load_json_path(p) {
                Ok(profile) => {
                    tracing::info!(target: "folio::profile", "Loaded portfolio profile from {}", p);
                    profile
                }
                Err(e) => {
                    tracing::warn!(target: "folio::profile", "{}; using builtin profile", e);
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    /// First word of `name`, used in canned answers ("Hala's skills ...").
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
