//! folio-core: portfolio diary core library (shared types, config, knowledge store, router).
//!
//! The gateway and the search collaborators depend on this crate for a single,
//! consistent public API.

mod knowledge;
mod router;
mod search;
mod shared;

// Shared types and configuration
pub use shared::{AnswerResponse, AskRequest, CoreConfig, SearchConfig, DEFAULT_HITS_PER_PAGE};

// Knowledge Store
pub use knowledge::{PortfolioProfile, ProfileError, SocialLink};

// Search collaborator seam
pub use search::{SearchBackend, SearchError, SearchHit};

// Question router
pub use router::{
    default_rules, Answer, AnswerStatus, KeywordRule, QuestionRouter, ERROR_PREFIX, NO_NOTES_ANSWER,
    SEARCH_RULE_NAME, SOCIAL_KEYWORDS,
};
