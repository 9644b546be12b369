#![doc = "Sitescope: cascading filters and map scenes over a static site table"]
pub mod config;
pub mod dataset;
mod error;
pub mod filter;
mod io;
pub mod view;

#[doc(inline)]
pub use config::DashboardConfig;

#[doc(inline)]
pub use dataset::{Dataset, Interval, Level, Metric, Record, Source};

#[doc(inline)]
pub use error::LoadError;

#[doc(inline)]
pub use filter::{FilterOutcome, FilterState, RowSet, Selections, cascade, filter_rows, options_for};

#[doc(inline)]
pub use view::{Renderer, Scene, render};
