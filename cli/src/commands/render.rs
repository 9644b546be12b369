use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use sitescope::{FilterState, Renderer};
use tracing::info;

use crate::cli::{Cli, RenderArgs, SceneFormat};
use super::{load_config, load_dataset, selections};

const SVG_MARGIN: f64 = 10.0;

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = load_dataset(&args.data, &config)?;
    let out_path: PathBuf = args.output.clone().unwrap_or("./scene.json".into());

    let mut state = FilterState::initial(&dataset);
    state.selections = selections(&args.selections);
    for &(metric, range) in &args.ranges {
        state.ranges.insert(metric, range);
    }

    let outcome = sitescope::filter_rows(&dataset, &state);
    let scene = Renderer::new(&config).render(&outcome);
    if scene.is_empty() {
        info!("no rows matched the current filters");
    }

    let format = args.format.unwrap_or_else(|| infer_format(&out_path));
    info!(points = scene.len(), path = %out_path.display(), ?format, "writing scene");
    match format {
        SceneFormat::Json => fs::write(&out_path, scene.to_json()?)
            .with_context(|| format!("[render] Failed to write {}", out_path.display()))?,
        SceneFormat::Geojson => {
            let json = serde_json::to_string_pretty(&scene.to_geojson())?;
            fs::write(&out_path, json)
                .with_context(|| format!("[render] Failed to write {}", out_path.display()))?
        }
        SceneFormat::Svg => scene.write_svg(&out_path, args.width as f64, SVG_MARGIN)?,
    }

    println!("{} of {} sites -> {}", scene.len(), dataset.len(), out_path.display());
    Ok(())
}

fn infer_format(path: &Path) -> SceneFormat {
    match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("svg") => SceneFormat::Svg,
        Some("geojson") => SceneFormat::Geojson,
        _ => SceneFormat::Json,
    }
}
