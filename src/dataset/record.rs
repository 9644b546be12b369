use std::sync::Arc;

use geo::Point;

use super::{Level, LocationKeys, Metric, MetricValues};

/// A single site row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub location: LocationKeys,
    pub position: Point<f64>,  // (lon, lat)
    pub metrics: MetricValues,
    pub display: Vec<Option<Arc<str>>>,  // Indexed by `Schema::display_columns`
}

impl Record {
    #[inline]
    pub fn latitude(&self) -> f64 { self.position.y() }

    #[inline]
    pub fn longitude(&self) -> f64 { self.position.x() }

    #[inline]
    pub fn key(&self, level: Level) -> Option<&str> {
        self.location.get(level).map(|value| value.as_ref())
    }

    #[inline]
    pub fn metric(&self, metric: Metric) -> f64 { self.metrics.get(metric) }

    pub fn display(&self, index: usize) -> Option<&str> {
        self.display.get(index)?.as_deref()
    }
}
