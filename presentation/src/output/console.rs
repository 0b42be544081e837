//! Console output formatter for validator results

use colored::Colorize;
use qa_application::RunSummary;
use qa_domain::{ScoreRecord, WeightVector};

const ANSWER_PREVIEW_CHARS: usize = 48;

/// Formats validator results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one iteration's per-peer scores
    pub fn format_scores(step: u64, record: &ScoreRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!("Step {} scores", step)));
        if record.is_empty() {
            output.push_str(&format!("  {}\n", "no peers queried".dimmed()));
            return output;
        }

        for (uid, entry) in record.iter() {
            let preview = match entry.answer.as_deref() {
                Some(text) => truncate(text, ANSWER_PREVIEW_CHARS).normal(),
                None => "(no answer)".red(),
            };
            output.push_str(&format!(
                "  {:>5}  {:.3}  {}\n",
                format!("#{}", uid).yellow(),
                entry.score,
                preview
            ));
        }
        output.push_str(&format!(
            "  {} {:.3}\n",
            "mean:".cyan().bold(),
            record.mean()
        ));

        output
    }

    /// Format an emitted weight vector
    pub fn format_weights(weights: &WeightVector, submitted: bool) -> String {
        let mut output = String::new();

        let status = if submitted {
            "submitted".green()
        } else {
            "submission failed".red()
        };
        output.push_str(&Self::section_header(&format!("Weights ({})", status)));

        for (uid, weight) in weights.iter() {
            output.push_str(&format!(
                "  {:>5}  {:.4}\n",
                format!("#{}", uid).yellow(),
                weight
            ));
        }

        output
    }

    /// Format the end-of-run summary
    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Validator Summary"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Iterations:".cyan().bold(),
            summary.iterations
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Failed:".cyan().bold(),
            summary.failed_iterations
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Unscored:".cyan().bold(),
            summary.skipped_scoring
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Weight emissions:".cyan().bold(),
            summary.weight_emissions
        ));
        output.push_str(&Self::footer());

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

/// Shorten `text` to at most `max` characters, on one line.
pub fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut short: String = flat.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_domain::{MembershipSnapshot, PeerIdentity, ReputationVector};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 40), "line one line two");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_format_scores_lists_every_peer() {
        plain();
        let mut record = ScoreRecord::new();
        record.insert(1, Some("Paris".to_string()), 1.0);
        record.insert(2, None, 0.0);

        let output = ConsoleFormatter::format_scores(7, &record);
        assert!(output.contains("Step 7 scores"));
        assert!(output.contains("#1"));
        assert!(output.contains("1.000"));
        assert!(output.contains("Paris"));
        assert!(output.contains("(no answer)"));
        assert!(output.contains("mean: 0.500"));
    }

    #[test]
    fn test_format_scores_empty() {
        plain();
        let output = ConsoleFormatter::format_scores(1, &ScoreRecord::new());
        assert!(output.contains("no peers queried"));
    }

    #[test]
    fn test_format_weights() {
        plain();
        let mut reputation = ReputationVector::new(0.0).unwrap();
        let mut record = ScoreRecord::new();
        record.insert(1, Some("a".to_string()), 1.0);
        reputation.update(&record);
        let snapshot = MembershipSnapshot::new(vec![
            PeerIdentity::new(1, "hk1", "http://a"),
            PeerIdentity::new(2, "hk2", "http://b"),
        ]);
        let weights = WeightVector::normalize(&reputation, &snapshot);

        let output = ConsoleFormatter::format_weights(&weights, true);
        assert!(output.contains("submitted"));
        assert!(output.contains("1.0000"));
        assert!(output.contains("0.0000"));

        let failed = ConsoleFormatter::format_weights(&weights, false);
        assert!(failed.contains("submission failed"));
    }

    #[test]
    fn test_format_summary() {
        plain();
        let summary = RunSummary {
            iterations: 30,
            failed_iterations: 2,
            skipped_scoring: 1,
            weight_emissions: 1,
        };
        let output = ConsoleFormatter::format_summary(&summary);
        assert!(output.contains("Validator Summary"));
        assert!(output.contains("Iterations: 30"));
        assert!(output.contains("Failed: 2"));
        assert!(output.contains("Weight emissions: 1"));
    }
}
