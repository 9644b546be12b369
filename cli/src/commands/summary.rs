use anyhow::Result;
use sitescope::Selections;

use crate::cli::{Cli, SummaryArgs};
use super::{load_config, load_dataset};

pub fn run(cli: &Cli, args: &SummaryArgs) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = load_dataset(&args.data, &config)?;

    println!("rows: {}", dataset.len());
    for options in sitescope::cascade(&dataset, &Selections::new()) {
        println!("level {} ({}): {} values", options.level, config.columns.level(options.level), options.values.len());
    }
    for slider in dataset.sliders() {
        println!(
            "range {} ({}): observed {}, control [{}, {}] step {}",
            slider.metric, slider.label, dataset.bounds(slider.metric), slider.min, slider.max, slider.step,
        );
    }
    Ok(())
}
