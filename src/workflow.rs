//! Command orchestration: enrich, assemble, write.
//!
//! One linear pipeline per invocation. The three enrichment branches fan
//! out on scoped threads and are all joined before assembly, so the output
//! file is written exactly once, after every branch has settled.
use crate::assemble::assemble;
use crate::enrich::{EnrichmentClient, EnrichmentResult, Outcome};
use crate::request::ReadmeRequest;
use crate::services::{GifSearcher, TextGenerator};
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::thread;

/// Generate the README for one request and write it to `README.md` in the
/// current working directory, overwriting any existing file.
///
/// Enrichment failures degrade to fallbacks inside the client; the only
/// fatal path out of here is the filesystem write.
pub fn run_init<T, G>(request: &ReadmeRequest, client: &EnrichmentClient<T, G>) -> Result<()>
where
    T: TextGenerator + Sync,
    G: GifSearcher + Sync,
{
    let enrichment = if request.enrichment_enabled {
        println!("🤖 Generating AI-enhanced README...");
        Some(enrich(request, client))
    } else {
        println!("Generating README...");
        None
    };

    let document = assemble(request, enrichment.as_ref());

    let out_path = env::current_dir()
        .context("resolve current directory")?
        .join("README.md");
    fs::write(&out_path, &document)
        .with_context(|| format!("write {}", out_path.display()))?;

    tracing::info!(
        path = %out_path.display(),
        bytes = document.len(),
        enriched = request.enrichment_enabled,
        "README written"
    );
    if request.enrichment_enabled {
        println!("✨ AI-enhanced README.md has been generated successfully!");
    } else {
        println!("README.md has been generated successfully!");
    }
    Ok(())
}

/// Fan out the three enrichment branches and join them all.
///
/// The GIF branch runs its two steps sequentially inside one worker; the
/// branches otherwise proceed independently and may settle in any order.
pub fn enrich<T, G>(request: &ReadmeRequest, client: &EnrichmentClient<T, G>) -> EnrichmentResult
where
    T: TextGenerator + Sync,
    G: GifSearcher + Sync,
{
    let name = request.project_name.as_str();
    let description = request.description.as_str();

    thread::scope(|scope| {
        let emoji = scope.spawn(|| client.suggest_emoji(name, description));
        let gif = scope.spawn(|| client.fetch_gif(name, description));
        let overview = scope.spawn(|| client.describe_project_type(name, description));

        EnrichmentResult {
            emoji: settle(emoji, String::new, "emoji"),
            gif_url: settle(gif, String::new, "gif"),
            overview: settle(overview, || description.to_string(), "overview"),
        }
    })
}

/// Join one branch. A panicked worker is treated like any other enrichment
/// failure and degrades to the branch's fallback value.
fn settle(
    handle: thread::ScopedJoinHandle<'_, Outcome>,
    fallback: impl FnOnce() -> String,
    branch: &str,
) -> String {
    match handle.join() {
        Ok(outcome) => outcome.into_value(),
        Err(_) => {
            tracing::warn!(branch, "enrichment worker panicked, using fallback");
            fallback()
        }
    }
}
