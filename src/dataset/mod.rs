mod dataset;
mod level;
mod metric;
mod record;
mod slider;

pub use dataset::{Dataset, Schema, Source};
pub use level::{Level, LocationKeys};
pub use metric::{Interval, Metric, MetricValues, coerce_numeric};
pub use record::Record;
pub use slider::{SliderMark, SliderSpec};

pub(crate) use dataset::distinct_values;
