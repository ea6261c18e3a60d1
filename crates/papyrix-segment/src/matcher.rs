//! Approximate title-to-line matching.
//!
//! Section titles coming back from the extraction service are paraphrased
//! and re-cased; they rarely match the raw text verbatim. The matcher
//! scans forward through the line buffer, scoring each trimmed line
//! against the wanted title, and keeps the first line whose score is
//! maximal at or above the acceptance threshold.

use serde::{Deserialize, Serialize};

/// Similarity scoring function used by [`find_best_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    /// Edit-distance ratio: Levenshtein distance normalized over the
    /// longer string.
    NormalizedLevenshtein,
    /// Jaro-Winkler, more forgiving of divergence away from the prefix.
    JaroWinkler,
}

impl SimilarityMetric {
    /// Score two strings on a 0–100 scale.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let ratio = match self {
            SimilarityMetric::NormalizedLevenshtein => strsim::normalized_levenshtein(a, b),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
        };
        ratio * 100.0
    }
}

/// Configuration for title matching.
///
/// The defaults trade recall for precision: a heading paraphrased beyond
/// the threshold stays unmatched rather than risking a wrong boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum 0–100 score a line must reach to be accepted.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_metric")]
    pub metric: SimilarityMetric,
}

fn default_min_score() -> f64 {
    90.0
}

fn default_metric() -> SimilarityMetric {
    SimilarityMetric::NormalizedLevenshtein
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            metric: default_metric(),
        }
    }
}

/// Find the line best matching `title`, scanning `lines[start_line..]`.
///
/// Lines are trimmed before scoring. The best candidate is replaced only
/// by a strictly greater score, so ties resolve to the first occurrence
/// in scan order. The returned index is always `>= start_line`.
///
/// An empty title never matches. `None` is the normal "not found"
/// outcome, not an error; the segmenter decides what to do with it.
pub fn find_best_match(
    title: &str,
    lines: &[String],
    start_line: usize,
    config: &MatcherConfig,
) -> Option<usize> {
    if title.is_empty() {
        return None;
    }

    let mut best_match = None;
    let mut best_score = 0.0_f64;

    for (i, line) in lines.iter().enumerate().skip(start_line) {
        let score = config.metric.score(title, line.trim());
        if score > best_score && score >= config.min_score {
            best_score = score;
            best_match = Some(i);
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_verbatim_title_matches_exact_line() {
        let lines = lines(&["A Study of Chunking\n", "Introduction\n", "body text\n"]);
        let found = find_best_match("Introduction", &lines, 0, &MatcherConfig::default());
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_empty_title_never_matches() {
        let lines = lines(&["Introduction\n"]);
        assert_eq!(find_best_match("", &lines, 0, &MatcherConfig::default()), None);
    }

    #[test]
    fn test_below_threshold_is_not_found() {
        let lines = lines(&["Results\n", "Discussion\n"]);
        let found = find_best_match("Methodology", &lines, 0, &MatcherConfig::default());
        assert_eq!(found, None);
    }

    #[test]
    fn test_scan_is_forward_only() {
        let lines = lines(&["Introduction\n", "body\n", "Introduction\n"]);
        let found = find_best_match("Introduction", &lines, 1, &MatcherConfig::default());
        assert_eq!(found, Some(2));
    }

    #[test]
    fn test_start_line_past_end_is_not_found() {
        let lines = lines(&["Introduction\n"]);
        assert_eq!(
            find_best_match("Introduction", &lines, lines.len(), &MatcherConfig::default()),
            None
        );
    }

    #[test]
    fn test_tie_breaks_to_first_occurrence() {
        let lines = lines(&["Introduction\n", "Introduction\n"]);
        let found = find_best_match("Introduction", &lines, 0, &MatcherConfig::default());
        assert_eq!(found, Some(0));
    }

    #[test]
    fn test_strictly_better_later_candidate_wins() {
        // Line 0 scores ~91.7, line 1 scores 100.
        let lines = lines(&["Introductio\n", "Introduction\n"]);
        let found = find_best_match("Introduction", &lines, 0, &MatcherConfig::default());
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_paraphrased_title_within_threshold_matches() {
        // One trailing character of drift: score ~92.3.
        let lines = lines(&["some text\n", "Introduction\n", "more text\n"]);
        let found = find_best_match("Introductions", &lines, 0, &MatcherConfig::default());
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_lines_are_trimmed_before_scoring() {
        let lines = lines(&["   Introduction   \n"]);
        let found = find_best_match("Introduction", &lines, 0, &MatcherConfig::default());
        assert_eq!(found, Some(0));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let lines = lines(&["Intro\n"]);
        let strict = MatcherConfig::default();
        assert_eq!(find_best_match("Introduction", &lines, 0, &strict), None);

        let lax = MatcherConfig {
            min_score: 40.0,
            ..MatcherConfig::default()
        };
        assert_eq!(find_best_match("Introduction", &lines, 0, &lax), Some(0));
    }

    #[test]
    fn test_jaro_winkler_metric_is_selectable() {
        let config = MatcherConfig {
            metric: SimilarityMetric::JaroWinkler,
            ..MatcherConfig::default()
        };
        let lines = lines(&["unrelated\n", "Introduction\n"]);
        assert_eq!(find_best_match("Introduction", &lines, 0, &config), Some(1));
    }

    #[test]
    fn test_score_scale_endpoints() {
        let metric = SimilarityMetric::NormalizedLevenshtein;
        assert_eq!(metric.score("abc", "abc"), 100.0);
        assert_eq!(metric.score("abc", "xyz"), 0.0);
    }
}
