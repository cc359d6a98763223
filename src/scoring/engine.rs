use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, SportProfile};
use crate::metrics::Metric;
use crate::snapshot::MetricSnapshot;

/// How many recommendations a ranking returns.
pub const TOP_RECOMMENDATIONS: usize = 3;

/// Match-quality thresholds for reason fragments.
const STRONG_MATCH: f64 = 0.7;
const GOOD_MATCH: f64 = 0.4;

/// Missing metrics are listed by name up to this count; beyond it only the
/// count is reported.
const MISSING_LIST_LIMIT: usize = 3;

/// A ranked, explained sport recommendation for one athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub name: String,
    /// Weighted match score, 0-100.
    pub score: u8,
    pub reason: String,
    pub icon: String,
}

/// Required metrics are missing or empty; scoring was not attempted.
///
/// Surfaced to the end user verbatim. A hard failure here is deliberate:
/// recommendations from an incomplete profile would be misleading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_missing(.missing))]
pub struct DataInsufficientError {
    /// Required metrics that resolved to no value, in required-set order.
    pub missing: Vec<Metric>,
}

fn format_missing(missing: &[Metric]) -> String {
    if missing.len() > MISSING_LIST_LIMIT {
        format!("{} insights need to be generated first", missing.len())
    } else {
        let names: Vec<&str> = missing.iter().map(|m| m.display_name()).collect();
        format!("Please generate these insights first: {}", names.join(", "))
    }
}

/// Score every sport in the catalogue against the snapshot and return the
/// top recommendations, best first. Exact ties keep catalogue order.
///
/// # Errors
///
/// Fails with [`DataInsufficientError`] when any required metric resolves to
/// no positive value.
pub fn score_athlete(
    catalog: &Catalog,
    snapshot: &MetricSnapshot,
) -> Result<Vec<MatchResult>, DataInsufficientError> {
    let missing: Vec<Metric> = Metric::REQUIRED
        .iter()
        .copied()
        .filter(|&metric| snapshot.resolve(metric) <= 0.0)
        .collect();
    if !missing.is_empty() {
        return Err(DataInsufficientError { missing });
    }

    let mut results: Vec<MatchResult> = catalog
        .sports
        .iter()
        .map(|sport| score_sport(sport, snapshot))
        .collect();

    // Stable sort: profiles earlier in the catalogue rank higher on ties.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(TOP_RECOMMENDATIONS);
    Ok(results)
}

/// Compute how well one athlete snapshot matches one sport profile.
///
/// Metrics that resolve to 0 are skipped as unknown rather than counted
/// against the sport.
pub fn score_sport(sport: &SportProfile, snapshot: &MetricSnapshot) -> MatchResult {
    let mut total_score = 0.0;
    let mut total_weight = 0.0;
    let mut matched_stats = 0u32;
    let mut fragments: Vec<String> = Vec::new();

    for criterion in &sport.criteria {
        let value = snapshot.resolve(criterion.metric);
        if value <= 0.0 {
            continue;
        }
        matched_stats += 1;

        let match_score = criterion_match(value, criterion.min, criterion.optimal);
        total_score += match_score * criterion.weight;
        total_weight += criterion.weight;

        let percent = (match_score * 100.0).round() as u32;
        if match_score > STRONG_MATCH {
            fragments.push(format!(
                "Strong {} ({}% match)",
                criterion.metric.display_name(),
                percent
            ));
        } else if match_score > GOOD_MATCH {
            fragments.push(format!(
                "Good {} ({}% match)",
                criterion.metric.display_name(),
                percent
            ));
        }
    }

    let score = if total_weight > 0.0 {
        (total_score / total_weight * 100.0).round() as u8
    } else {
        0
    };

    let reason = if matched_stats == 0 {
        "Insufficient data to make accurate recommendation".to_string()
    } else if fragments.is_empty() {
        "Basic physical attributes match this sport".to_string()
    } else {
        fragments.truncate(2);
        fragments.join(". ")
    };

    MatchResult {
        name: sport.name.clone(),
        score,
        reason,
        icon: sport.icon.clone(),
    }
}

/// Normalized [0,1] fit of one metric value against one criterion.
///
/// Saturates at `optimal`; interpolates linearly between `min` and
/// `optimal`; below `min` gives partial credit capped under 0.5.
fn criterion_match(value: f64, min: f64, optimal: f64) -> f64 {
    if value >= optimal {
        1.0
    } else if value >= min {
        (value - min) / (optimal - min)
    } else {
        (value / min).max(0.0) * 0.5
    }
}
