use std::path::PathBuf;

use sitescope::{Interval, Level, Metric};

/// Site dashboard CLI: each invocation is one snapshot of the filter controls
#[derive(clap::Parser, Debug)]
#[command(name = "sitescope", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Dashboard configuration (JSON column mapping, tooltip and scene options)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Describe the dataset: rows, filter levels and range controls
    Summary(SummaryArgs),

    /// List the options of one cascading filter level
    Options(OptionsArgs),

    /// Filter the dataset and write the map scene
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Input site table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,
}

/// One optional selection per hierarchical level.
#[derive(clap::Args, Debug, Default)]
pub struct SelectionArgs {
    /// Selected region (province)
    #[arg(long)]
    pub region: Option<String>,

    /// Selected subregion (district)
    #[arg(long)]
    pub subregion: Option<String>,

    /// Selected sub-subregion (sub-district)
    #[arg(long)]
    pub subsubregion: Option<String>,

    /// Selected cell block
    #[arg(long)]
    pub cell_block: Option<String>,
}

impl SelectionArgs {
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Region => self.region.as_deref(),
            Level::Subregion => self.subregion.as_deref(),
            Level::Subsubregion => self.subsubregion.as_deref(),
            Level::CellBlock => self.cell_block.as_deref(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct OptionsArgs {
    /// Input site table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Level to list, e.g. region, subregion, subsubregion, cell_block
    #[arg(short, long)]
    pub level: Level,

    #[command(flatten)]
    pub selections: SelectionArgs,
}

/// Narrowest preview that still leaves room inside the margins.
const MIN_SVG_WIDTH: i64 = 64;

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum SceneFormat { Json, Geojson, Svg }

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Input site table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    #[command(flatten)]
    pub selections: SelectionArgs,

    /// Range filter as METRIC=LO..HI (inclusive); unspecified sliders stay at their initial
    /// extent (observed bounds, or 0..100 for percentages, which drops values outside it)
    #[arg(short, long = "range", value_parser = parse_range)]
    pub ranges: Vec<(Metric, Interval)>,

    /// Output scene file, defaults to "./scene.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<SceneFormat>,

    /// SVG preview width in pixels
    #[arg(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(MIN_SVG_WIDTH..))]
    pub width: u32,
}

fn parse_range(s: &str) -> Result<(Metric, Interval), String> {
    let (name, bounds) = s.split_once('=')
        .ok_or_else(|| format!("expected METRIC=LO..HI, got '{s}'"))?;
    let (lo, hi) = bounds.split_once("..")
        .ok_or_else(|| format!("expected LO..HI, got '{bounds}'"))?;
    let lo = lo.trim().parse::<f64>().map_err(|e| format!("invalid lower bound '{lo}': {e}"))?;
    let hi = hi.trim().parse::<f64>().map_err(|e| format!("invalid upper bound '{hi}': {e}"))?;
    Ok((name.parse()?, Interval::new(lo, hi)))
}
