use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::Catalog;
use crate::insights;
use crate::metrics::Metric;
use crate::scoring::MatchResult;
use crate::snapshot::MetricSnapshot;

const BAR_WIDTH: usize = 10;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a 0-100 score as "NN%", colored by match quality:
/// >=80 excellent, >=60 good, >=40 moderate, below that poor.
pub fn format_score(score: u8, use_colors: bool) -> String {
    let plain = format!("{}%", score);
    if !use_colors {
        return plain;
    }
    if score >= 80 {
        plain.green().to_string()
    } else if score >= 60 {
        plain.cyan().to_string()
    } else if score >= 40 {
        plain.yellow().to_string()
    } else {
        plain.red().to_string()
    }
}

/// Render a score as a fixed-width block bar, e.g. `[████████··]`.
pub fn score_bar(score: u8) -> String {
    let filled = (usize::from(score) * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '·' });
    }
    bar.push(']');
    bar
}

/// Format ranked recommendations as a table: Index, Score, Bar, Sport, Reason
/// Index column: 2 chars + dot; score right-aligned, 4 chars wide.
pub fn format_recommendation_table(results: &[MatchResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No recommendations generated.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>4}", format!("{}%", result.score));
            let bar = score_bar(result.score);

            // index + score + bar + separators around the sport name
            let fixed_width =
                3 + 1 + 4 + separator.len() + bar.len() + separator.len() * 2 + result.name.len();
            let reason = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&result.reason, width - fixed_width)
                } else {
                    truncate_text(&result.reason, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                result.reason.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    format_score_padded(&score_padded, result.score),
                    separator,
                    bar,
                    separator,
                    result.name.bold(),
                    separator,
                    reason.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, bar, separator, result.name, separator,
                    reason
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_score_padded(padded: &str, score: u8) -> String {
    if score >= 80 {
        padded.green().to_string()
    } else if score >= 60 {
        padded.cyan().to_string()
    } else if score >= 40 {
        padded.yellow().to_string()
    } else {
        padded.red().to_string()
    }
}

/// Multi-line detail block for one ranked recommendation: reason, the
/// sport-specific insight, and training tips.
pub fn format_match_detail(result: &MatchResult, rank: usize, use_colors: bool) -> String {
    let insight = insights::explain(result, rank);
    if use_colors {
        format!(
            "{} {}\n  {}\n  Why this sport suits you: {}\n  Training tips: {}",
            format!("{}.", rank + 1).dimmed(),
            result.name.bold(),
            result.reason,
            insight.insight,
            insight.tips
        )
    } else {
        format!(
            "{}. {}\n  {}\n  Why this sport suits you: {}\n  Training tips: {}",
            rank + 1,
            result.name,
            result.reason,
            insight.insight,
            insight.tips
        )
    }
}

/// One-line summary naming the athlete's strongest available metrics.
pub fn format_summary(snapshot: &MetricSnapshot) -> String {
    format!(
        "Based on your physical attributes and performance metrics, these sports are your best \
         matches. Your strengths in {} make you particularly suited for these activities.",
        top_metrics(snapshot)
    )
}

/// Names of up to three available metrics, joined for prose.
fn top_metrics(snapshot: &MetricSnapshot) -> String {
    let names: Vec<String> = Metric::REQUIRED
        .iter()
        .filter(|&&metric| snapshot.resolve(metric) > 0.0)
        .take(3)
        .map(|m| m.display_name().to_lowercase())
        .collect();

    match names.as_slice() {
        [] => "various physical attributes".to_string(),
        [a] => a.clone(),
        [a, b] => format!("{} and {}", a, b),
        [a, b, c, ..] => format!("{}, {}, and {}", a, b, c),
    }
}

/// Per-required-metric availability report for the `check` subcommand.
pub fn format_sufficiency_report(snapshot: &MetricSnapshot, use_colors: bool) -> String {
    Metric::REQUIRED
        .iter()
        .map(|&metric| {
            let value = snapshot.resolve(metric);
            let name = format!("{:<22}", metric.display_name());
            if value > 0.0 {
                let reading = if metric.unit().is_empty() {
                    format!("{}", value)
                } else {
                    format!("{} {}", value, metric.unit())
                };
                if use_colors {
                    format!("{} {} {}", "✓".green(), name, reading)
                } else {
                    format!("✓ {} {}", name, reading)
                }
            } else if use_colors {
                format!("{} {} {}", "✗".red(), name, "not available".dimmed())
            } else {
                format!("✗ {} not available", name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dump the active sport catalogue, one sport per block.
pub fn format_catalog(catalog: &Catalog, use_colors: bool) -> String {
    catalog
        .sports
        .iter()
        .map(|sport| {
            let header = if use_colors {
                format!("{} ({})", sport.name.bold(), sport.icon)
            } else {
                format!("{} ({})", sport.name, sport.icon)
            };
            let criteria = sport
                .criteria
                .iter()
                .map(|c| {
                    format!(
                        "  {:<22} weight {:<3} min {:<6} optimal {}",
                        c.metric.display_name(),
                        c.weight,
                        c.min,
                        c.optimal
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{}", header, criteria)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> MatchResult {
        MatchResult {
            name: "Sprint Running".to_string(),
            score: 92,
            reason: "Strong Speed Index (100% match). Good Power Index (67% match)".to_string(),
            icon: "run".to_string(),
        }
    }

    fn sample_snapshot() -> MetricSnapshot {
        let mut snap = MetricSnapshot::new();
        snap.set(Metric::SpeedIndex, json!(9.5));
        snap.set(Metric::PowerIndex, json!(8.0));
        snap
    }

    #[test]
    fn test_format_score_plain() {
        assert_eq!(format_score(92, false), "92%");
        assert_eq!(format_score(0, false), "0%");
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0), "[··········]");
        assert_eq!(score_bar(100), "[██████████]");
        assert_eq!(score_bar(45), "[█████·····]");
    }

    #[test]
    fn test_table_empty() {
        let results: Vec<MatchResult> = vec![];
        assert_eq!(
            format_recommendation_table(&results, false),
            "No recommendations generated."
        );
    }

    #[test]
    fn test_table_contains_rank_score_and_name() {
        let output = format_recommendation_table(&[sample_result()], false);
        assert!(output.contains(" 1."));
        assert!(output.contains("92%"));
        assert!(output.contains("Sprint Running"));
    }

    #[test]
    fn test_match_detail_includes_insight_and_tips() {
        let output = format_match_detail(&sample_result(), 0, false);
        assert!(output.contains("Why this sport suits you:"));
        assert!(output.contains("top match"));
        assert!(output.contains("Training tips:"));
    }

    #[test]
    fn test_summary_with_no_data() {
        let summary = format_summary(&MetricSnapshot::new());
        assert!(summary.contains("various physical attributes"));
    }

    #[test]
    fn test_summary_lists_available_metrics() {
        let summary = format_summary(&sample_snapshot());
        assert!(summary.contains("speed index and power index"));
    }

    #[test]
    fn test_sufficiency_report_marks_missing() {
        let report = format_sufficiency_report(&sample_snapshot(), false);
        assert!(report.contains("✓ Speed Index"));
        assert!(report.contains("9.5 m/s"));
        assert!(report.lines().any(|l| l.starts_with("✗ VO2 Max")));
        assert_eq!(report.lines().count(), Metric::REQUIRED.len());
    }

    #[test]
    fn test_format_catalog_lists_all_sports() {
        let output = format_catalog(&Catalog::default(), false);
        assert!(output.contains("Sprint Running (run)"));
        assert!(output.contains("Martial Arts (fitness)"));
        assert!(output.contains("weight"));
    }

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text("épée épée", 6), "épé...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
