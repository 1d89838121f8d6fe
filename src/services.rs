//! External service transports for text generation and GIF search.
//!
//! The enrichment layer only sees the two traits here, so tests can swap in
//! fakes and the soft-failure policy stays independent of any one provider.
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::time::Instant;
use ureq::Agent;

const GEMINI_GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const GIPHY_SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";

/// Prompt-in, trimmed-text-out contract of the generative text service.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Media-search contract: `Ok(None)` means the query matched nothing, which
/// callers treat separately from a transport failure.
pub trait GifSearcher {
    fn search(&self, query: &str) -> Result<Option<String>>;
}

/// API keys injected into the service clients.
///
/// Absence is not validated up front: a missing key surfaces as a per-call
/// error, which the enrichment layer soft-catches like any other failure.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub gemini_api_key: Option<String>,
    pub giphy_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Credentials {
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            giphy_api_key: env::var("GIPHY_API_KEY").ok(),
        }
    }
}

/// Gemini `generateContent` client.
pub struct GeminiText {
    agent: Agent,
    api_key: Option<String>,
}

impl GeminiText {
    pub fn new(api_key: Option<String>) -> Self {
        GeminiText {
            agent: Agent::new_with_defaults(),
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl TextGenerator for GeminiText {
    fn generate(&self, prompt: &str) -> Result<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is not set"))?;

        let start = Instant::now();
        let mut response = self
            .agent
            .post(GEMINI_GENERATE_URL)
            .query("key", key)
            .send_json(serde_json::json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .context("send text generation request")?;
        let body: GenerateContentResponse = response
            .body_mut()
            .read_json()
            .context("decode text generation response")?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| anyhow!("text generation response had no candidate text"))?;

        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            prompt_bytes = prompt.len(),
            response_bytes = text.len(),
            "text generation complete"
        );
        Ok(text)
    }
}

/// Giphy search client, pinned to one result at the "g" rating tier.
pub struct GiphySearch {
    agent: Agent,
    api_key: Option<String>,
}

impl GiphySearch {
    pub fn new(api_key: Option<String>) -> Self {
        GiphySearch {
            agent: Agent::new_with_defaults(),
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct GiphySearchResponse {
    #[serde(default)]
    data: Vec<GiphyGif>,
}

#[derive(Deserialize)]
struct GiphyGif {
    images: GiphyImages,
}

#[derive(Deserialize)]
struct GiphyImages {
    original: GiphyRendition,
}

#[derive(Deserialize)]
struct GiphyRendition {
    url: String,
}

impl GifSearcher for GiphySearch {
    fn search(&self, query: &str) -> Result<Option<String>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GIPHY_API_KEY is not set"))?;

        let mut response = self
            .agent
            .get(GIPHY_SEARCH_URL)
            .query("api_key", key)
            .query("q", query)
            .query("limit", "1")
            .query("rating", "g")
            .call()
            .context("send GIF search request")?;
        let body: GiphySearchResponse = response
            .body_mut()
            .read_json()
            .context("decode GIF search response")?;

        Ok(body.data.into_iter().next().map(|gif| gif.images.original.url))
    }
}
