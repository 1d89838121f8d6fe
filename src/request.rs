//! Immutable input bundle built from parsed CLI flags.
use crate::cli::InitArgs;

/// Default badge list for the AI-enhanced variant.
const DEFAULT_BADGES_ENRICHED: &str = "BuildStatus";
/// Default badge list for the plain variant.
const DEFAULT_BADGES_PLAIN: &str = "Build Status";

/// Everything document assembly needs, fixed at parse time.
///
/// Fields are never mutated after construction; the whole struct lives for
/// exactly one invocation.
#[derive(Debug, Clone)]
pub struct ReadmeRequest {
    pub project_name: String,
    pub description: String,
    pub license: String,
    pub install_command: String,
    pub usage_example: String,
    pub contributing_text: String,
    /// Badge names in flag order, duplicates preserved. An empty `--badges`
    /// value yields one empty entry, which renders as a degenerate badge.
    pub badge_names: Vec<String>,
    pub include_table_of_contents: bool,
    pub enrichment_enabled: bool,
}

impl ReadmeRequest {
    pub fn from_args(args: InitArgs) -> Self {
        let enrichment_enabled = !args.no_ai;
        let badges = args.badges.unwrap_or_else(|| {
            if enrichment_enabled {
                DEFAULT_BADGES_ENRICHED.to_string()
            } else {
                DEFAULT_BADGES_PLAIN.to_string()
            }
        });
        ReadmeRequest {
            project_name: args.project_name,
            description: args.description,
            license: args.license,
            install_command: args.install,
            usage_example: args.usage,
            contributing_text: args.contributing,
            badge_names: split_badges(&badges),
            include_table_of_contents: args.table_of_contents,
            enrichment_enabled,
        }
    }
}

/// Split a comma-separated badge list.
///
/// Mirrors a naive string split: order preserved, no trimming, no
/// de-duplication, and an empty input produces a single empty entry.
fn split_badges(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
