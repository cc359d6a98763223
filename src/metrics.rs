use serde::{Deserialize, Serialize};

/// The closed set of athlete metric identifiers the engine understands.
///
/// Values are produced by external stat-generation processes and arrive in a
/// [`crate::snapshot::MetricSnapshot`]; the engine never computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Bmi,
    Vo2max,
    PowerToWeightRatio,
    SpeedIndex,
    FatigueIndex,
    GripIndex,
    FlexibilityIndex,
    JumpingIndex,
    NeuromuscularIndexes,
    PowerIndex,
    Somatotype,
}

impl Metric {
    /// Every known metric, in display order.
    pub const ALL: [Metric; 11] = [
        Metric::Bmi,
        Metric::Vo2max,
        Metric::PowerToWeightRatio,
        Metric::SpeedIndex,
        Metric::FatigueIndex,
        Metric::GripIndex,
        Metric::FlexibilityIndex,
        Metric::JumpingIndex,
        Metric::NeuromuscularIndexes,
        Metric::PowerIndex,
        Metric::Somatotype,
    ];

    /// Metrics that must resolve to a positive value before recommendations
    /// can be generated. Somatotype is a classification, not a number, and
    /// is excluded.
    pub const REQUIRED: [Metric; 10] = [
        Metric::Bmi,
        Metric::Vo2max,
        Metric::PowerToWeightRatio,
        Metric::SpeedIndex,
        Metric::FatigueIndex,
        Metric::GripIndex,
        Metric::FlexibilityIndex,
        Metric::JumpingIndex,
        Metric::NeuromuscularIndexes,
        Metric::PowerIndex,
    ];

    /// Wire identifier, matching the snapshot keys.
    pub const fn id(self) -> &'static str {
        match self {
            Metric::Bmi => "bmi",
            Metric::Vo2max => "vo2max",
            Metric::PowerToWeightRatio => "power_to_weight_ratio",
            Metric::SpeedIndex => "speed_index",
            Metric::FatigueIndex => "fatigue_index",
            Metric::GripIndex => "grip_index",
            Metric::FlexibilityIndex => "flexibility_index",
            Metric::JumpingIndex => "jumping_index",
            Metric::NeuromuscularIndexes => "neuromuscular_indexes",
            Metric::PowerIndex => "power_index",
            Metric::Somatotype => "somatotype",
        }
    }

    /// Human-readable name used in reasons and error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Metric::Bmi => "BMI",
            Metric::Vo2max => "VO2 Max",
            Metric::PowerToWeightRatio => "Power to Weight Ratio",
            Metric::SpeedIndex => "Speed Index",
            Metric::FatigueIndex => "Fatigue Index",
            Metric::GripIndex => "Grip Index",
            Metric::FlexibilityIndex => "Flexibility Index",
            Metric::JumpingIndex => "Jumping Index",
            Metric::NeuromuscularIndexes => "Neuromuscular Indexes",
            Metric::PowerIndex => "Power Index",
            Metric::Somatotype => "Somatotype",
        }
    }

    /// Unit string for display. Empty when the metric is unitless.
    pub const fn unit(self) -> &'static str {
        match self {
            Metric::Bmi => "kg/m²",
            Metric::Vo2max => "ml/kg/min",
            Metric::PowerToWeightRatio => "W/kg",
            Metric::SpeedIndex => "m/s",
            Metric::FatigueIndex => "%",
            Metric::GripIndex => "kg",
            Metric::FlexibilityIndex | Metric::JumpingIndex => "cm",
            _ => "",
        }
    }

    /// Icon tag carried through to the display layer.
    pub const fn icon(self) -> &'static str {
        match self {
            Metric::Bmi => "calculator",
            Metric::Vo2max => "pulse",
            Metric::PowerToWeightRatio => "barbell",
            Metric::SpeedIndex => "stopwatch",
            Metric::FatigueIndex => "battery-half",
            Metric::GripIndex => "hand-right",
            Metric::FlexibilityIndex => "fitness",
            Metric::JumpingIndex => "trending-up",
            Metric::NeuromuscularIndexes => "flash",
            Metric::PowerIndex => "speedometer",
            Metric::Somatotype => "body",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Metric::Bmi => "Body Mass Index",
            Metric::Vo2max => "Maximum oxygen uptake during exercise",
            Metric::PowerToWeightRatio => "Power output relative to body weight",
            Metric::SpeedIndex => "Overall measure of athletic speed",
            Metric::FatigueIndex => "Measure of resistance to fatigue",
            Metric::GripIndex => "Measure of hand and forearm strength",
            Metric::FlexibilityIndex => "Measure of overall body flexibility",
            Metric::JumpingIndex => "Measure of jumping ability",
            Metric::NeuromuscularIndexes => {
                "Measurements of neuromuscular coordination and efficiency"
            }
            Metric::PowerIndex => "Overall measure of athletic power output",
            Metric::Somatotype => "Body type classification (endomorph, mesomorph, ectomorph)",
        }
    }

    /// Ordered field names a structured per-metric value may nest its reading
    /// under (e.g. a power_to_weight_ratio record exposing `power_to_weight`).
    /// Checked before the generic `value`/`data`/`result` candidates.
    pub const fn candidate_fields(self) -> &'static [&'static str] {
        match self {
            Metric::Bmi => &["bmi"],
            Metric::Vo2max => &["vo2max"],
            Metric::PowerToWeightRatio => &["power_to_weight", "ptw"],
            Metric::SpeedIndex => &["speed"],
            Metric::FatigueIndex => &["fatigue"],
            Metric::GripIndex => &["grip_strength", "grip"],
            Metric::FlexibilityIndex => &["flexibility"],
            Metric::JumpingIndex => &["jumping_power", "jump"],
            Metric::NeuromuscularIndexes => &["neuromuscular_efficiency"],
            Metric::PowerIndex => &["power"],
            Metric::Somatotype => &[],
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_excludes_somatotype() {
        assert_eq!(Metric::REQUIRED.len(), 10);
        assert!(!Metric::REQUIRED.contains(&Metric::Somatotype));
    }

    #[test]
    fn test_serde_ids_match_wire_ids() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.id()));
            let parsed: Metric = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut names: Vec<_> = Metric::ALL.iter().map(|m| m.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Metric::ALL.len());
    }
}
