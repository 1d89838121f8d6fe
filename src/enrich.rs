//! AI/GIF enrichment with a hard fail-soft contract.
//!
//! Every operation resolves to a value: failures are caught here, logged as
//! warnings, and replaced with the documented fallback. No error ever
//! crosses this boundary, so a dead network or missing key can degrade the
//! README but never block it.
use crate::services::{GifSearcher, TextGenerator};

// Prompt templates loaded at compile time
const EMOJI_PROMPT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/emoji.md"));
const GIF_QUERY_PROMPT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/gif_query.md"));
const OVERVIEW_PROMPT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/overview.md"));

/// Per-call result carrier: either the generated value or the documented
/// fallback. Callers only ever see the chosen value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(String),
    Fallback(String),
}

impl Outcome {
    pub fn value(&self) -> &str {
        match self {
            Outcome::Generated(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Outcome::Generated(value) | Outcome::Fallback(value) => value,
        }
    }

    #[cfg(test)]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

/// Joined output of the three enrichment branches.
///
/// Produced at most once per invocation; empty strings mean the branch fell
/// back (or, for `gif_url`, matched nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResult {
    pub emoji: String,
    pub gif_url: String,
    pub overview: String,
}

/// Enrichment operations over injected service transports.
pub struct EnrichmentClient<T, G> {
    text: T,
    gifs: G,
}

impl<T: TextGenerator, G: GifSearcher> EnrichmentClient<T, G> {
    pub fn new(text: T, gifs: G) -> Self {
        EnrichmentClient { text, gifs }
    }

    /// Ask for 1-2 emoji characters representing the project. Falls back to
    /// an empty string, which assembly renders as a bare title.
    pub fn suggest_emoji(&self, project_name: &str, description: &str) -> Outcome {
        let prompt = fill_prompt(EMOJI_PROMPT, project_name, description);
        match self.text.generate(&prompt) {
            Ok(text) => Outcome::Generated(text),
            Err(err) => {
                tracing::warn!(error = %err, "emoji suggestion failed, continuing without");
                Outcome::Fallback(String::new())
            }
        }
    }

    /// Derive a 2-4 word GIF search phrase. Falls back to the project name
    /// so the search step always has a usable query.
    pub fn derive_gif_query(&self, project_name: &str, description: &str) -> Outcome {
        let prompt = fill_prompt(GIF_QUERY_PROMPT, project_name, description);
        match self.text.generate(&prompt) {
            Ok(text) => Outcome::Generated(text),
            Err(err) => {
                tracing::warn!(error = %err, "GIF query derivation failed, using project name");
                Outcome::Fallback(project_name.to_string())
            }
        }
    }

    /// Search for one "g"-rated GIF and take its original-resolution URL.
    /// Zero matches and transport failures both resolve to an empty string.
    pub fn search_gif(&self, query: &str) -> Outcome {
        match self.gifs.search(query) {
            Ok(Some(url)) => Outcome::Generated(url),
            Ok(None) => {
                tracing::debug!(query, "GIF search matched nothing");
                Outcome::Fallback(String::new())
            }
            Err(err) => {
                tracing::warn!(error = %err, query, "GIF search failed, continuing without");
                Outcome::Fallback(String::new())
            }
        }
    }

    /// Run the two-step GIF branch: derive a query, then search with it.
    /// The search is attempted even when derivation fell back.
    pub fn fetch_gif(&self, project_name: &str, description: &str) -> Outcome {
        let query = self.derive_gif_query(project_name, description);
        tracing::info!(query = query.value(), "using search query for GIF");
        self.search_gif(query.value())
    }

    /// Ask for a 2-3 sentence technical description. Falls back to the
    /// user-supplied description unchanged.
    pub fn describe_project_type(&self, project_name: &str, description: &str) -> Outcome {
        let prompt = fill_prompt(OVERVIEW_PROMPT, project_name, description);
        match self.text.generate(&prompt) {
            Ok(text) => Outcome::Generated(text),
            Err(err) => {
                tracing::warn!(error = %err, "project description generation failed, using input description");
                Outcome::Fallback(description.to_string())
            }
        }
    }
}

fn fill_prompt(template: &str, project_name: &str, description: &str) -> String {
    template
        .replace("{project_name}", project_name)
        .replace("{description}", description)
        .trim()
        .to_string()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn emoji_falls_back_to_empty_string() {
        let client = EnrichmentClient::new(FailingText, FailingGifs);
        let outcome = client.suggest_emoji("Task Tracker", "Organize your tasks");
        assert!(outcome.is_fallback());
        assert_eq!(outcome.value(), "");
    }

    #[test]
    fn gif_query_falls_back_to_project_name() {
        let client = EnrichmentClient::new(FailingText, FailingGifs);
        let outcome = client.derive_gif_query("Task Tracker", "Organize your tasks");
        assert_eq!(outcome, Outcome::Fallback("Task Tracker".to_string()));
    }

    #[test]
    fn description_falls_back_to_input_description() {
        let client = EnrichmentClient::new(FailingText, FailingGifs);
        let outcome = client.describe_project_type("Task Tracker", "Organize your tasks");
        assert_eq!(outcome, Outcome::Fallback("Organize your tasks".to_string()));
    }

    #[test]
    fn failed_derivation_still_searches_with_project_name() {
        let gifs = RecordingGifs::returning(Some("https://g.test/a.gif".to_string()));
        let client = EnrichmentClient::new(FailingText, gifs);
        let outcome = client.fetch_gif("Task Tracker", "Organize your tasks");
        assert_eq!(outcome, Outcome::Generated("https://g.test/a.gif".to_string()));

        let EnrichmentClient { gifs, .. } = client;
        assert_eq!(*gifs.seen.lock().unwrap(), vec!["Task Tracker"]);
    }

    #[test]
    fn derived_query_feeds_the_search() {
        let gifs = RecordingGifs::returning(None);
        let client = EnrichmentClient::new(FixedText("weather forecast"), gifs);
        let outcome = client.fetch_gif("Weather App", "Forecasts on demand");
        assert_eq!(outcome, Outcome::Fallback(String::new()));

        let EnrichmentClient { gifs, .. } = client;
        assert_eq!(*gifs.seen.lock().unwrap(), vec!["weather forecast"]);
    }

    #[test]
    fn zero_results_and_search_failure_both_yield_empty_url() {
        let no_match = EnrichmentClient::new(
            FixedText("weather forecast"),
            RecordingGifs::returning(None),
        );
        assert_eq!(no_match.search_gif("weather forecast").value(), "");

        let broken = EnrichmentClient::new(FixedText("weather forecast"), FailingGifs);
        assert_eq!(broken.search_gif("weather forecast").value(), "");
    }

    #[test]
    fn prompts_interpolate_both_fields() {
        let prompt = fill_prompt(EMOJI_PROMPT, "Task Tracker", "Organize your tasks");
        assert!(prompt.contains("\"Task Tracker\""));
        assert!(prompt.contains("\"Organize your tasks\""));
    }
}
