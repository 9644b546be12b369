use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Fatal errors raised while building a [`Dataset`](crate::Dataset).
///
/// All variants are fatal and only raised at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("[dataset::load] Failed to open {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[dataset::load] Source is not a readable table: {0}")]
    Table(#[from] PolarsError),

    #[error("[dataset::load] Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("[config] Invalid dashboard configuration: {0}")]
    Config(#[from] serde_json::Error),
}
