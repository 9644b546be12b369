mod resolver;
mod state;

pub use resolver::{FilterOutcome, LevelOptions, RowSet, cascade, filter_rows, options_for};
pub use state::{FilterState, Selections};
