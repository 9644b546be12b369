pub mod options;
pub mod render;
pub mod summary;

use std::path::Path;

use anyhow::{Context, Result};
use sitescope::{DashboardConfig, Dataset, Level, Selections};

use crate::cli::{Cli, SelectionArgs};

pub(crate) fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    match &cli.config {
        Some(path) => DashboardConfig::read_from_file(path)
            .with_context(|| format!("[config] Failed to load {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

pub(crate) fn load_dataset(path: &Path, config: &DashboardConfig) -> Result<Dataset> {
    Dataset::read_csv(path, config)
        .with_context(|| format!("[dataset] Failed to load {}", path.display()))
}

pub(crate) fn selections(args: &SelectionArgs) -> Selections {
    let mut selections = Selections::new();
    for level in Level::order() {
        selections.set(level, args.get(level));
    }
    selections
}
