use serde::Serialize;

use super::{Interval, Metric};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}

/// Parameters of one range control: its extent, step, tick marks and initial value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    pub metric: Metric,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub marks: Vec<SliderMark>,
    pub value: Interval,
}

impl SliderSpec {
    /// Percentage metrics get a fixed 0..100% control; the rest span the
    /// observed bounds widened outward to whole numbers.
    pub fn for_metric(metric: Metric, observed: Interval) -> Self {
        if metric.is_percentage() {
            return Self::new(metric, 0, 100, 1, 10, "%");
        }
        let min = observed.lo.floor() as i64;
        let max = observed.hi.ceil() as i64;
        match metric {
            Metric::NetAdd => Self::new(metric, min, max, 2, 2, ""),
            Metric::Aging => Self::new(metric, min, max, 1, 12, ""),
            _ => Self::new(metric, min, max, 1, 10, ""),
        }
    }

    fn new(metric: Metric, min: i64, max: i64, step: i64, mark_every: usize, suffix: &str) -> Self {
        let marks = (min..=max)
            .step_by(mark_every)
            .map(|value| SliderMark { value, label: format!("{value}{suffix}") })
            .collect();
        Self {
            metric,
            label: metric.label(),
            min,
            max,
            step,
            marks,
            value: Interval::new(min as f64, max as f64),
        }
    }
}
