use serde::{Deserialize, Serialize};

use crate::metrics::Metric;

/// One metric expectation inside a sport profile.
///
/// `weight` sets how much the metric matters for the sport; `min` is the
/// threshold below which only partial credit is given; `optimal` is the
/// value at which the metric is a perfect match (no bonus beyond it).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    pub metric: Metric,
    pub weight: f64,
    pub min: f64,
    pub optimal: f64,
}

/// A sport's ideal metric profile.
///
/// Criterion order is observable: reason fragments are reported in the order
/// criteria are listed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SportProfile {
    pub name: String,
    pub icon: String,
    pub criteria: Vec<Criterion>,
}

/// The sport catalogue. Loaded once at startup, immutable afterwards.
///
/// Example YAML:
/// ```yaml
/// sports:
///   - name: Sprint Running
///     icon: run
///     criteria:
///       - { metric: speed_index, weight: 5, min: 8, optimal: 10 }
///       - { metric: power_index, weight: 4, min: 6, optimal: 9 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub sports: Vec<SportProfile>,
}

fn profile(name: &str, icon: &str, criteria: &[(Metric, f64, f64, f64)]) -> SportProfile {
    SportProfile {
        name: name.to_string(),
        icon: icon.to_string(),
        criteria: criteria
            .iter()
            .map(|&(metric, weight, min, optimal)| Criterion {
                metric,
                weight,
                min,
                optimal,
            })
            .collect(),
    }
}

impl Default for Catalog {
    /// The ten built-in sport profiles.
    fn default() -> Self {
        use Metric::*;
        Catalog {
            sports: vec![
                profile(
                    "Sprint Running",
                    "run",
                    &[
                        (SpeedIndex, 5.0, 8.0, 10.0),
                        (PowerIndex, 4.0, 6.0, 9.0),
                        (PowerToWeightRatio, 4.0, 4.0, 6.0),
                        (NeuromuscularIndexes, 3.0, 70.0, 90.0),
                        (FatigueIndex, 3.0, 60.0, 85.0),
                        (FlexibilityIndex, 2.0, 30.0, 60.0),
                    ],
                ),
                profile(
                    "Swimming",
                    "water",
                    &[
                        (Vo2max, 5.0, 50.0, 65.0),
                        (PowerIndex, 3.0, 5.0, 8.0),
                        (FatigueIndex, 4.0, 70.0, 90.0),
                        (FlexibilityIndex, 5.0, 60.0, 90.0),
                        (NeuromuscularIndexes, 3.0, 60.0, 80.0),
                    ],
                ),
                profile(
                    "Basketball",
                    "basketball",
                    &[
                        (JumpingIndex, 5.0, 60.0, 80.0),
                        (SpeedIndex, 4.0, 7.0, 9.0),
                        (PowerIndex, 3.0, 6.0, 8.0),
                        (NeuromuscularIndexes, 4.0, 70.0, 85.0),
                        (FatigueIndex, 3.0, 65.0, 80.0),
                    ],
                ),
                profile(
                    "Weightlifting",
                    "barbell",
                    &[
                        (PowerIndex, 5.0, 8.0, 10.0),
                        (GripIndex, 4.0, 50.0, 70.0),
                        (PowerToWeightRatio, 3.0, 3.5, 5.0),
                        (NeuromuscularIndexes, 4.0, 75.0, 95.0),
                        (Bmi, 2.0, 25.0, 30.0),
                    ],
                ),
                profile(
                    "Long-Distance Running",
                    "walk",
                    &[
                        (Vo2max, 5.0, 55.0, 70.0),
                        (FatigueIndex, 5.0, 75.0, 95.0),
                        (Bmi, 3.0, 18.0, 22.0),
                        (PowerToWeightRatio, 4.0, 3.0, 4.5),
                        (FlexibilityIndex, 2.0, 40.0, 70.0),
                    ],
                ),
                profile(
                    "Soccer/Football",
                    "football",
                    &[
                        (SpeedIndex, 4.0, 7.0, 9.0),
                        (FatigueIndex, 4.0, 70.0, 90.0),
                        (Vo2max, 4.0, 50.0, 65.0),
                        (PowerIndex, 3.0, 6.0, 8.0),
                        (FlexibilityIndex, 3.0, 50.0, 75.0),
                        (NeuromuscularIndexes, 4.0, 65.0, 85.0),
                    ],
                ),
                profile(
                    "Gymnastics",
                    "body",
                    &[
                        (FlexibilityIndex, 5.0, 70.0, 95.0),
                        (PowerToWeightRatio, 5.0, 4.0, 6.0),
                        (NeuromuscularIndexes, 4.0, 75.0, 95.0),
                        (GripIndex, 3.0, 40.0, 60.0),
                        (Bmi, 3.0, 18.0, 23.0),
                    ],
                ),
                profile(
                    "Cycling",
                    "bicycle",
                    &[
                        (Vo2max, 5.0, 55.0, 75.0),
                        (PowerToWeightRatio, 5.0, 4.0, 7.0),
                        (FatigueIndex, 4.0, 70.0, 90.0),
                        (PowerIndex, 4.0, 7.0, 9.0),
                        (NeuromuscularIndexes, 3.0, 65.0, 85.0),
                    ],
                ),
                profile(
                    "Tennis",
                    "tennisball",
                    &[
                        (SpeedIndex, 4.0, 6.0, 8.0),
                        (PowerIndex, 3.0, 5.0, 8.0),
                        (NeuromuscularIndexes, 4.0, 65.0, 85.0),
                        (FatigueIndex, 3.0, 65.0, 85.0),
                        (FlexibilityIndex, 4.0, 60.0, 80.0),
                        (GripIndex, 4.0, 45.0, 65.0),
                    ],
                ),
                profile(
                    "Martial Arts",
                    "fitness",
                    &[
                        (FlexibilityIndex, 5.0, 65.0, 90.0),
                        (NeuromuscularIndexes, 5.0, 70.0, 90.0),
                        (PowerIndex, 4.0, 6.0, 8.0),
                        (SpeedIndex, 4.0, 6.0, 8.0),
                        (FatigueIndex, 3.0, 65.0, 85.0),
                        (GripIndex, 3.0, 40.0, 60.0),
                    ],
                ),
            ],
        }
    }
}
