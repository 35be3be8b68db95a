//! Greedy word wrapping for wheel labels.
//!
//! The measuring side lives with the caller: `fits` answers whether a
//! candidate line fits the slice, so this module never sees font or cell
//! metrics.

/// Lines longer than this get hard-truncated when the label overflows.
const ELLIPSIS_THRESHOLD: usize = 3;
/// Characters kept from the last line before the ellipsis.
const TRUNCATED_PREFIX: usize = 10;
pub const ELLIPSIS: &str = "...";

pub const DEFAULT_MAX_LINES: usize = 2;

/// Wrap `label` into at most `max_lines` lines, never splitting a word.
///
/// A word that does not fit even on its own still gets its own line.
/// An empty label yields a single empty line. A `max_lines` of zero is
/// treated as one.
pub fn wrap<F>(label: &str, max_lines: usize, fits: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let max_lines = max_lines.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if fits(&candidate) {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        return vec![String::new()];
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            if last.chars().count() > ELLIPSIS_THRESHOLD {
                let prefix: String = last.chars().take(TRUNCATED_PREFIX).collect();
                *last = format!("{}{}", prefix.trim_end(), ELLIPSIS);
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow(width: usize) -> impl Fn(&str) -> bool {
        move |line: &str| line.chars().count() <= width
    }

    #[test]
    fn test_short_label_stays_on_one_line() {
        assert_eq!(wrap("DevOps Pipeline", 2, narrow(40)), vec!["DevOps Pipeline"]);
    }

    #[test]
    fn test_wraps_onto_second_line() {
        assert_eq!(
            wrap("Python Data Visualization", 2, narrow(12)),
            vec!["Python Data", "Visualization"]
        );
    }

    #[test]
    fn test_overflow_truncates_with_ellipsis() {
        let lines = wrap("AI-Powered Python Analytics Dashboard", 2, narrow(10));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "AI-Powered");
        assert!(lines.iter().all(|l| !l.is_empty()));

        let last = &lines[1];
        assert!(last.ends_with(ELLIPSIS));
        let content = last.trim_end_matches(ELLIPSIS);
        assert!(!content.is_empty());
        assert!(content.chars().count() <= TRUNCATED_PREFIX);
    }

    #[test]
    fn test_never_splits_words() {
        let label = "Secure Frontend Application with Security Integration";
        let words: Vec<&str> = label.split_whitespace().collect();
        let lines = wrap(label, 10, narrow(8));

        for line in &lines {
            for word in line.split_whitespace() {
                assert!(words.contains(&word), "{word:?} is not a whole word");
            }
        }
        assert_eq!(lines.join(" "), label);
    }

    #[test]
    fn test_oversized_word_gets_own_line() {
        assert_eq!(
            wrap("a Supercalifragilistic b", 3, narrow(5)),
            vec!["a", "Supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_short_last_line_keeps_no_ellipsis() {
        // Third line is dropped but the kept second line is within the threshold
        let lines = wrap("Observability UX x", 2, narrow(2));
        assert_eq!(lines, vec!["Observability", "UX"]);
    }

    #[test]
    fn test_empty_label_is_single_empty_line() {
        assert_eq!(wrap("", 2, narrow(10)), vec![String::new()]);
        assert_eq!(wrap("   \t ", 2, narrow(10)), vec![String::new()]);
    }

    #[test]
    fn test_zero_max_lines_behaves_as_one() {
        let lines = wrap("FinOps and DevOps Collaboration Platform", 0, narrow(10));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(ELLIPSIS));
    }

    #[test]
    fn test_collapses_repeated_whitespace() {
        assert_eq!(wrap("  UX   Research  ", 2, narrow(40)), vec!["UX Research"]);
    }
}
