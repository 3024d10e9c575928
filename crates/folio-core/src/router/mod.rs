//! Question router: keyword cascade over the Knowledge Store, search fallback last.

mod rules;

pub use rules::{default_rules, KeywordRule, SOCIAL_KEYWORDS};

use crate::knowledge::PortfolioProfile;
use crate::search::{SearchBackend, SearchHit};
use crate::shared::DEFAULT_HITS_PER_PAGE;
use std::sync::Arc;

/// Rule name reported when the question falls through to the collaborator.
pub const SEARCH_RULE_NAME: &str = "search";

/// Answer when the collaborator returns zero hits.
pub const NO_NOTES_ANSWER: &str =
    "My diary couldn’t find any specific notes on that, but Hala is an expert in AI and Blockchain! 📖";

/// Prefix of the answer when the collaborator call fails.
pub const ERROR_PREFIX: &str = "Error searching diary: ";

/// Outcome class of one answer; the gateway maps it to an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStatus {
    Ok,
    SearchFailed,
}

impl AnswerStatus {
    pub fn http_status(&self) -> u16 {
        match self {
            AnswerStatus::Ok => 200,
            AnswerStatus::SearchFailed => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub status: AnswerStatus,
    /// Name of the rule that produced the answer.
    pub rule: &'static str,
}

impl Answer {
    fn ok(rule: &'static str, text: String) -> Self {
        Self {
            text,
            status: AnswerStatus::Ok,
            rule,
        }
    }
}

/// Routes one question to the first matching keyword rule, or to the search collaborator.
pub struct QuestionRouter {
    profile: Arc<PortfolioProfile>,
    rules: Vec<KeywordRule>,
    search: Arc<dyn SearchBackend>,
    hits_per_page: u32,
}

impl QuestionRouter {
    pub fn new(profile: Arc<PortfolioProfile>, search: Arc<dyn SearchBackend>) -> Self {
        Self {
            profile,
            rules: default_rules(),
            search,
            hits_per_page: DEFAULT_HITS_PER_PAGE,
        }
    }

    pub fn with_hits_per_page(mut self, hits_per_page: u32) -> Self {
        self.hits_per_page = hits_per_page;
        self
    }

    pub fn profile(&self) -> &PortfolioProfile {
        &self.profile
    }

    pub fn search_backend_name(&self) -> &str {
        self.search.name()
    }

    /// Names of the local rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Answers from the first local rule that matches, without touching the collaborator.
    pub fn answer_locally(&self, question: &str) -> Option<Answer> {
        self.match_rule(&question.to_lowercase())
    }

    /// Answers one question. Local rules are tried in order; the first match wins.
    pub async fn answer(&self, question: &str) -> Answer {
        let normalized = question.to_lowercase();
        if let Some(answer) = self.match_rule(&normalized) {
            tracing::info!(target: "folio::ask", rule = answer.rule, "Answered from knowledge store");
            return answer;
        }
        self.answer_from_search(&normalized).await
    }

    /// `normalized` must already be lowercased.
    fn match_rule(&self, normalized: &str) -> Option<Answer> {
        self.rules
            .iter()
            .find(|rule| rule.matches(normalized))
            .map(|rule| Answer::ok(rule.name(), rule.render(&self.profile)))
    }

    async fn answer_from_search(&self, query: &str) -> Answer {
        match self.search.search(query, self.hits_per_page).await {
            Ok(hits) if hits.is_empty() => {
                tracing::info!(target: "folio::ask", backend = self.search.name(), "No hits");
                Answer::ok(SEARCH_RULE_NAME, NO_NOTES_ANSWER.to_string())
            }
            Ok(hits) => {
                tracing::info!(
                    target: "folio::ask",
                    backend = self.search.name(),
                    hits = hits.len(),
                    "Answered from search"
                );
                Answer::ok(SEARCH_RULE_NAME, combine_hits(&hits))
            }
            Err(e) => {
                tracing::warn!(target: "folio::ask", backend = self.search.name(), "Search failed: {}", e);
                Answer {
                    text: format!("{}{}", ERROR_PREFIX, e),
                    status: AnswerStatus::SearchFailed,
                    rule: SEARCH_RULE_NAME,
                }
            }
        }
    }
}

/// Space-joins the content of every hit that has one, in collaborator order.
fn combine_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .filter_map(|hit| hit.content.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Canned collaborator that records the queries it receives.
    struct StubSearch {
        result: fn() -> Result<Vec<SearchHit>, SearchError>,
        calls: AtomicUsize,
        last: Mutex<Option<(String, u32)>>,
    }

    impl StubSearch {
        fn new(result: fn() -> Result<Vec<SearchHit>, SearchError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }
    }

    #[async_trait::async_trait]
    impl SearchBackend for StubSearch {
        fn name(&self) -> &str {
            "stub"
        }

        async fn search(&self, query: &str, hits_per_page: u32) -> Result<Vec<SearchHit>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((query.to_string(), hits_per_page));
            (self.result)()
        }
    }

    fn router_with(stub: &Arc<StubSearch>) -> QuestionRouter {
        let search: Arc<dyn SearchBackend> = stub.clone();
        QuestionRouter::new(Arc::new(PortfolioProfile::builtin()), search)
    }

    fn no_hits() -> Result<Vec<SearchHit>, SearchError> {
        Ok(Vec::new())
    }

    #[tokio::test]
    async fn links_rule_lists_every_link_in_order() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("What are your social links?").await;
        assert_eq!(answer.rule, "links");
        assert_eq!(answer.status, AnswerStatus::Ok);

        let lines: Vec<&str> = answer.text.lines().collect();
        assert_eq!(lines[0], "Sure! Here are Hala's official links:");
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[1], "• github: https://github.com/halakabir234-hub");
        assert_eq!(lines[11], "• discord: https://discord.gg/8VBnGjyh");
        assert!(answer.text.ends_with('\n'));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn naming_one_platform_still_lists_all() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let youtube = router.answer("Do you have a YouTube channel").await;
        let social = router.answer("social").await;
        assert_eq!(youtube.text, social.text);
        assert!(youtube.text.contains("• tiktok: "));
    }

    #[tokio::test]
    async fn x_token_needs_surrounding_spaces() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        assert_eq!(router.answer("are you on x too").await.rule, "links");
        // "x" inside a word is not a platform mention
        let answer = router.answer("explain xyz").await;
        assert_eq!(answer.rule, SEARCH_RULE_NAME);
    }

    #[tokio::test]
    async fn skills_rule_formats_sentence() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("what skills do you have").await;
        let expected = format!(
            "Hala's skills include: {}.",
            PortfolioProfile::builtin().skills.join(", ")
        );
        assert_eq!(answer.text, expected);
        assert_eq!(answer.rule, "skills");
    }

    #[tokio::test]
    async fn who_is_returns_about_verbatim() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("who is hala").await;
        assert_eq!(answer.text, PortfolioProfile::builtin().about);
        assert_eq!(router.answer("WHO IS HALA").await.text, answer.text);
    }

    #[tokio::test]
    async fn experience_rule_joins_bullets() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("what hackathon experience do you have").await;
        let expected = format!("Hala has: {}.", PortfolioProfile::builtin().experience.join(". "));
        assert_eq!(answer.text, expected);
        assert_eq!(answer.rule, "experience");
    }

    #[tokio::test]
    async fn about_precedes_experience() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("tell me about your hackathon experience").await;
        assert_eq!(answer.rule, "about");
    }

    #[tokio::test]
    async fn links_precede_skills() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("what are your skills and links").await;
        assert_eq!(answer.rule, "links");
    }

    #[tokio::test]
    async fn local_answers_are_stable() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        for question in ["github?", "skills", "about", "experience"] {
            let first = router.answer(question).await;
            let second = router.answer(question).await;
            assert_eq!(first, second);
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn zero_hits_yields_no_notes_message() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("Favourite Colour").await;
        assert_eq!(answer.text, NO_NOTES_ANSWER);
        assert_eq!(answer.status, AnswerStatus::Ok);
        assert_eq!(
            stub.last.lock().unwrap().clone(),
            Some(("favourite colour".to_string(), 5))
        );
    }

    #[tokio::test]
    async fn hits_are_space_joined_skipping_missing_content() {
        let stub = StubSearch::new(|| {
            Ok(vec![
                SearchHit::with_content("First note."),
                SearchHit::default(),
                SearchHit::with_content("Second note."),
            ])
        });
        let router = router_with(&stub).with_hits_per_page(3);

        let answer = router.answer("diary entry from march").await;
        assert_eq!(answer.text, "First note. Second note.");
        assert_eq!(answer.status, AnswerStatus::Ok);
        assert_eq!(stub.last.lock().unwrap().as_ref().map(|l| l.1), Some(3));
    }

    #[tokio::test]
    async fn hits_without_content_give_empty_answer() {
        let stub = StubSearch::new(|| Ok(vec![SearchHit::default()]));
        let router = router_with(&stub);

        let answer = router.answer("anything").await;
        assert_eq!(answer.text, "");
        assert_eq!(answer.status, AnswerStatus::Ok);
    }

    #[tokio::test]
    async fn search_failure_is_server_error() {
        let stub = StubSearch::new(|| Err(SearchError::Transport("connection refused".to_string())));
        let router = router_with(&stub);

        let answer = router.answer("favourite food").await;
        assert_eq!(answer.status, AnswerStatus::SearchFailed);
        assert_eq!(answer.status.http_status(), 500);
        assert_eq!(answer.text, "Error searching diary: connection refused");
    }

    #[tokio::test]
    async fn empty_question_falls_through_to_search() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        let answer = router.answer("").await;
        assert_eq!(answer.rule, SEARCH_RULE_NAME);
        assert_eq!(stub.last.lock().unwrap().clone(), Some((String::new(), 5)));
    }

    #[test]
    fn answer_locally_skips_search() {
        let stub = StubSearch::new(no_hits);
        let router = router_with(&stub);

        assert_eq!(router.answer_locally("Skill set?").map(|a| a.rule), Some("skills"));
        assert!(router.answer_locally("weather today").is_none());
        assert_eq!(router.rule_names(), ["links", "skills", "about", "experience"]);
    }
}
