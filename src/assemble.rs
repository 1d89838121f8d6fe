//! Deterministic README assembly.
//!
//! Pure string construction: fixed section order, optional sections gated
//! by the request and enrichment values, literal interpolation throughout.
//! User-supplied text is never escaped or sanitized, so markdown in a flag
//! value passes through unmodified.
use crate::enrich::EnrichmentResult;
use crate::request::ReadmeRequest;

const TOC_ENRICHED: &str = "## Table of Contents\n\n\
- [Overview](#overview)\n\
- [Features](#features)\n\
- [License](#license)\n\
- [Installation](#installation)\n\
- [Usage](#usage)\n\
- [Contributing](#contributing)";

const TOC_PLAIN: &str = "## Table of Contents\n\n\
- [License](#license)\n\
- [Installation](#installation)\n\
- [Usage](#usage)\n\
- [Contributing](#contributing)";

/// Build the final README text.
///
/// `enrichment` is `None` for the plain variant: AI/GIF sections are
/// omitted and the request description doubles as the document body.
/// Calling twice with the same inputs yields byte-identical output.
pub fn assemble(request: &ReadmeRequest, enrichment: Option<&EnrichmentResult>) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(title_line(request, enrichment));
    sections.push(badge_line(&request.badge_names));

    if request.include_table_of_contents {
        let toc = if enrichment.is_some() {
            TOC_ENRICHED
        } else {
            TOC_PLAIN
        };
        sections.push(toc.to_string());
    }

    match enrichment {
        Some(enrichment) => {
            sections.push(format!("## Overview\n\n{}", enrichment.overview));
            if !enrichment.gif_url.is_empty() {
                sections.push(format!("![Project Demo]({})", enrichment.gif_url));
            }
            sections.push(format!("## Features\n\n{}", request.description));
        }
        None => sections.push(request.description.clone()),
    }

    sections.push(format!(
        "## License\n\nThis project is licensed under the {} License.",
        request.license
    ));

    let fence_tag = if enrichment.is_some() { "bash" } else { "" };
    sections.push(format!(
        "## Installation\n\n```{fence_tag}\n{}\n```",
        request.install_command
    ));
    sections.push(format!(
        "## Usage\n\n```{fence_tag}\n{}\n```",
        request.usage_example
    ));
    sections.push(format!("## Contributing\n\n{}", request.contributing_text));

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

fn title_line(request: &ReadmeRequest, enrichment: Option<&EnrichmentResult>) -> String {
    match enrichment {
        Some(enrichment) if !enrichment.emoji.is_empty() => {
            format!("# {} {}", enrichment.emoji, request.project_name)
        }
        _ => format!("# {}", request.project_name),
    }
}

/// One shields.io image reference per badge name, joined by single spaces.
/// An empty name renders as a degenerate badge rather than being skipped.
fn badge_line(badge_names: &[String]) -> String {
    badge_names
        .iter()
        .map(|badge| format!("![{badge}](https://img.shields.io/badge/{badge}-blue)"))
        .collect::<Vec<_>>()
        .join(" ")
}
