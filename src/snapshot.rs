use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metrics::Metric;

/// Keys never treated as metric readings when scanning an unknown object.
const EXCLUDED_SCAN_KEYS: [&str; 2] = ["athlete_id", "id"];

/// An athlete's current metric readings at scoring time.
///
/// Assembled by the caller from stat records. Each metric identifier maps to
/// a plain number, a numeric string, or a structured object nesting the
/// reading under a metric-specific field. The engine reads it, never writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSnapshot(Map<String, Value>);

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Option<&Value> {
        self.0.get(metric.id())
    }

    pub fn set(&mut self, metric: Metric, value: Value) {
        self.0.insert(metric.id().to_string(), value);
    }

    /// Resolve a single numeric reading for a metric.
    ///
    /// Total and deterministic: malformed or absent values yield 0, which
    /// downstream code treats as "unknown", not as a failure. The result is
    /// never negative.
    ///
    /// Resolution order:
    /// 1. a direct number (or numeric string) under the identifier;
    /// 2. inside an object under the identifier, the metric's candidate
    ///    fields, then the generic `value`/`data`/`result` fields;
    /// 3. the first remaining finite number in that object, skipping
    ///    identifier/timestamp/date fields;
    /// 4. the metric's candidate fields at the top level of the snapshot
    ///    (flat records store e.g. `neuromuscular_efficiency` directly).
    pub fn resolve(&self, metric: Metric) -> f64 {
        let value = self.resolve_raw(metric);
        if value.is_finite() {
            value.max(0.0)
        } else {
            0.0
        }
    }

    fn resolve_raw(&self, metric: Metric) -> f64 {
        if let Some(value) = self.0.get(metric.id()) {
            if let Some(n) = as_number(value) {
                return n;
            }
            if let Value::Object(fields) = value {
                if let Some(n) = candidate_field(fields, metric) {
                    return n;
                }
                if let Some(n) = first_plausible_number(fields) {
                    return n;
                }
            }
        }
        for field in metric.candidate_fields() {
            if let Some(n) = self.0.get(*field).and_then(as_number) {
                return n;
            }
        }
        0.0
    }
}

/// Numeric value of a JSON number or numeric string, if finite.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn candidate_field(fields: &Map<String, Value>, metric: Metric) -> Option<f64> {
    for key in metric.candidate_fields() {
        if let Some(n) = fields.get(*key).and_then(as_number) {
            return Some(n);
        }
    }
    let id = metric.id();
    let stripped = id.strip_suffix("_index").unwrap_or(id);
    for key in [stripped, "value", "data", "result"] {
        if let Some(n) = fields.get(key).and_then(as_number) {
            return Some(n);
        }
    }
    None
}

fn first_plausible_number(fields: &Map<String, Value>) -> Option<f64> {
    fields.iter().find_map(|(key, value)| {
        if EXCLUDED_SCAN_KEYS.contains(&key.as_str())
            || key.contains("timestamp")
            || key.contains("date")
        {
            return None;
        }
        match value {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: Value) -> MetricSnapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_direct_number() {
        let snap = snapshot(json!({ "bmi": 22.5 }));
        assert_eq!(snap.resolve(Metric::Bmi), 22.5);
    }

    #[test]
    fn test_numeric_string() {
        let snap = snapshot(json!({ "vo2max": " 58.2 " }));
        assert_eq!(snap.resolve(Metric::Vo2max), 58.2);
    }

    #[test]
    fn test_non_numeric_string_is_zero() {
        let snap = snapshot(json!({ "vo2max": "pending" }));
        assert_eq!(snap.resolve(Metric::Vo2max), 0.0);
    }

    #[test]
    fn test_nested_candidate_field() {
        let snap = snapshot(json!({
            "power_to_weight_ratio": { "power_to_weight": 4.8 }
        }));
        assert_eq!(snap.resolve(Metric::PowerToWeightRatio), 4.8);
    }

    #[test]
    fn test_nested_candidate_field_order() {
        // power_to_weight is tried before ptw
        let snap = snapshot(json!({
            "power_to_weight_ratio": { "ptw": 3.0, "power_to_weight": 4.8 }
        }));
        assert_eq!(snap.resolve(Metric::PowerToWeightRatio), 4.8);
    }

    #[test]
    fn test_nested_generic_value_field() {
        let snap = snapshot(json!({ "grip_index": { "value": 55 } }));
        assert_eq!(snap.resolve(Metric::GripIndex), 55.0);
    }

    #[test]
    fn test_nested_scan_skips_identifiers_and_dates() {
        let snap = snapshot(json!({
            "speed_index": {
                "athlete_id": 42,
                "created_date": 20240101,
                "measured_timestamp": 1700000000,
                "reading": 8.4
            }
        }));
        assert_eq!(snap.resolve(Metric::SpeedIndex), 8.4);
    }

    #[test]
    fn test_nested_object_without_numbers_is_zero() {
        let snap = snapshot(json!({
            "somatotype": { "classification": "mesomorph" }
        }));
        assert_eq!(snap.resolve(Metric::Somatotype), 0.0);
    }

    #[test]
    fn test_flat_record_backing_field() {
        // DB rows store the efficiency column directly
        let snap = snapshot(json!({ "neuromuscular_efficiency": 82 }));
        assert_eq!(snap.resolve(Metric::NeuromuscularIndexes), 82.0);
    }

    #[test]
    fn test_absent_and_null_are_zero() {
        let snap = snapshot(json!({ "bmi": null }));
        assert_eq!(snap.resolve(Metric::Bmi), 0.0);
        assert_eq!(snap.resolve(Metric::PowerIndex), 0.0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        let snap = snapshot(json!({ "fatigue_index": -12.0 }));
        assert_eq!(snap.resolve(Metric::FatigueIndex), 0.0);
    }

    #[test]
    fn test_resolve_is_total_over_odd_shapes() {
        let snap = snapshot(json!({
            "bmi": [1, 2, 3],
            "vo2max": true,
            "grip_index": { "nested": { "deeper": 1 } },
            "speed_index": "NaN"
        }));
        for metric in Metric::ALL {
            let value = snap.resolve(metric);
            assert!(value >= 0.0 && value.is_finite(), "{metric}: {value}");
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut snap = MetricSnapshot::new();
        snap.set(Metric::Bmi, json!(21.0));
        assert_eq!(snap.get(Metric::Bmi), Some(&json!(21.0)));
        assert_eq!(snap.resolve(Metric::Bmi), 21.0);
    }
}
