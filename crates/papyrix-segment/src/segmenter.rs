//! Section segmentation: carve a document's lines into labeled chunks.
//!
//! Boundary discovery walks the outline's section titles in document
//! order, delegating every lookup to the matcher with a forward-only
//! scan position, so a repeated heading can never match behind an
//! already consumed boundary. Titles that cannot be located and spans
//! that hold only whitespace are dropped, with the reason logged.

use tracing::debug;

use crate::matcher::{find_best_match, MatcherConfig};
use crate::models::{SectionChunk, SimplifiedMetadata, DOCUMENT_HEADER_LABEL};

/// Segment a document into ordered, labeled section chunks.
///
/// `lines` is the raw text with original line terminators; `section_titles`
/// is the outline's section list, matched as given. Every emitted chunk
/// carries the document title and the flattened authors string from
/// `metadata`. Pure function: identical inputs give identical output.
pub fn segment_document(
    document_title: &str,
    lines: &[String],
    section_titles: &[String],
    metadata: &SimplifiedMetadata,
    config: &MatcherConfig,
) -> Vec<SectionChunk> {
    let mut chunks = Vec::new();
    let mut previous_match_line = 0usize;

    // Preamble before the first located section.
    if let Some(first_title) = section_titles.first() {
        if let Some(first_line) = find_best_match(first_title, lines, previous_match_line, config)
        {
            if first_line > 0 {
                let header_text: String = lines[..first_line].concat();
                if header_text.trim().is_empty() {
                    debug!(
                        document = %document_title,
                        reason = "empty_span",
                        "Header span dropped"
                    );
                } else {
                    chunks.push(SectionChunk {
                        section_title: DOCUMENT_HEADER_LABEL.to_string(),
                        document_title: document_title.to_string(),
                        authors: metadata.authors.clone(),
                        content: header_text,
                    });
                }
            }
            previous_match_line = first_line;
        }
    }

    for (i, section_title) in section_titles.iter().enumerate() {
        let Some(start) = find_best_match(section_title, lines, previous_match_line, config)
        else {
            // The scan position stays put, so the next title's span will
            // absorb whatever text this one would have covered. Known
            // quirk, kept on purpose.
            debug!(
                document = %document_title,
                section = %section_title,
                reason = "not_found",
                "Section dropped"
            );
            continue;
        };

        let next_start = section_titles
            .get(i + 1)
            .and_then(|next_title| find_best_match(next_title, lines, start, config));

        let end = next_start.unwrap_or(lines.len());
        let section_text: String = lines[start..end].concat();

        if section_text.trim().is_empty() {
            debug!(
                document = %document_title,
                section = %section_title,
                reason = "empty_span",
                "Section dropped"
            );
        } else {
            chunks.push(SectionChunk {
                section_title: section_title.clone(),
                document_title: document_title.to_string(),
                authors: metadata.authors.clone(),
                content: section_text,
            });
        }

        previous_match_line = next_start.unwrap_or(start);
    }

    chunks
}
