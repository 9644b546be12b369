use serde::Serialize;

use crate::dataset::{Interval, Metric};
use super::color::{Rgb, VIRIDIS_NAME, viridis};

/// Linear map from a data domain onto a numeric range.
///
/// A degenerate domain (all values equal) maps everything to the top of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: Interval,
    pub range: Interval,
}

impl LinearScale {
    pub fn new(domain: Interval, range: Interval) -> Self { Self { domain, range } }

    /// Position of `value` within the domain, clamped to [0, 1].
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if !(span > 0.0) { return 1.0 }
        ((value - self.domain.lo) / span).clamp(0.0, 1.0)
    }

    pub fn map(&self, value: f64) -> f64 {
        self.range.lo + self.normalize(value) * self.range.span()
    }
}

/// Marker size legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeScale {
    pub metric: Metric,
    #[serde(flatten)]
    pub scale: LinearScale,
}

/// Continuous color legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    pub metric: Metric,
    pub domain: Interval,
    pub palette: &'static str,
}

impl ColorScale {
    pub fn viridis(metric: Metric, domain: Interval) -> Self {
        Self { metric, domain, palette: VIRIDIS_NAME }
    }

    pub fn color(&self, value: f64) -> Rgb {
        viridis(LinearScale::new(self.domain, Interval::new(0.0, 1.0)).normalize(value))
    }
}
