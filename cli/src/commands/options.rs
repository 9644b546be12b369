use anyhow::Result;

use crate::cli::{Cli, OptionsArgs};
use super::{load_config, load_dataset, selections};

pub fn run(cli: &Cli, args: &OptionsArgs) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = load_dataset(&args.data, &config)?;

    let selections = selections(&args.selections);
    let values = sitescope::options_for(&dataset, args.level, &selections);
    tracing::info!(level = %args.level, count = values.len(), "resolved options");

    for value in values {
        println!("{value}");
    }
    Ok(())
}
