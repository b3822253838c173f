//! Greedy word-wrap against the static font metrics.
//!
//! Mirrors what the page-description backend's own text splitter does:
//! words are packed left to right, a word that would cross the limit
//! starts the next line, and a single word wider than the limit gets a
//! line of its own rather than being broken mid-word.

use crate::layout::font_metrics::FontMetricTable;

/// Splits `text` into lines no wider than `max_width_pt` at `font_size_pt`.
///
/// Empty or whitespace-only input yields no lines; callers that need a
/// visible blank line render one themselves.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let space_width = metrics.space_width * font_size_pt;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    for word in text.split_whitespace() {
        let word_width = metrics.measure_pt(word, font_size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        if current_width + space_width + word_width <= max_width_pt {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Number of wrapped lines, for pagination estimates.
pub fn line_count(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_pt: f32,
) -> usize {
    wrap_text(text, metrics, font_size_pt, max_width_pt).len()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{get_metrics, MetricFont};

    #[test]
    fn test_empty_text_yields_no_lines() {
        let metrics = get_metrics(MetricFont::Helvetica);
        assert!(wrap_text("", metrics, 10.0, 500.0).is_empty());
        assert!(wrap_text("   ", metrics, 10.0, 500.0).is_empty());
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let metrics = get_metrics(MetricFont::Helvetica);
        let lines = wrap_text("Senior Engineer", metrics, 10.0, 500.0);
        assert_eq!(lines, vec!["Senior Engineer"]);
    }

    #[test]
    fn test_long_text_wraps_and_preserves_all_words() {
        let metrics = get_metrics(MetricFont::Helvetica);
        let text = "Led the migration of a monolithic billing platform onto \
                    event-driven services handling forty thousand requests per second";
        let lines = wrap_text(text, metrics, 10.0, 200.0);
        assert!(lines.len() > 1, "should need multiple lines at 200pt");
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_no_line_exceeds_the_limit() {
        let metrics = get_metrics(MetricFont::TimesRoman);
        let text = "Designed implemented and operated the ingestion pipeline for clickstream data";
        for line in wrap_text(text, metrics, 10.0, 150.0) {
            assert!(
                metrics.measure_pt(&line, 10.0) <= 150.0 + 1e-3,
                "line `{line}` is wider than the limit"
            );
        }
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let metrics = get_metrics(MetricFont::Helvetica);
        let lines = wrap_text("a Supercalifragilisticexpialidocious b", metrics, 10.0, 40.0);
        assert_eq!(
            lines,
            vec!["a", "Supercalifragilisticexpialidocious", "b"]
        );
    }

    #[test]
    fn test_line_count_matches_wrap() {
        let metrics = get_metrics(MetricFont::Helvetica);
        let text = "one two three four five six seven eight nine ten";
        assert_eq!(
            line_count(text, metrics, 10.0, 80.0),
            wrap_text(text, metrics, 10.0, 80.0).len()
        );
    }
}
