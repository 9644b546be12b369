//! Scene preview: equirectangular projection of the point bounds.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use geo::{Coord, Rect};

use crate::view::Scene;
use super::{Frame, escape_xml, write_svg_close, write_svg_open, write_svg_styles};

/// Minimum extent in degrees so a single site still gets a drawable frame.
const MIN_SPAN_DEG: f64 = 0.01;

/// Space reserved above the map for the title.
const TITLE_HEIGHT: f64 = 28.0;

pub(crate) fn write_scene<W: Write>(writer: &mut W, scene: &Scene, width: f64, margin: f64) -> Result<()> {
    let window = scene.bounds().map_or_else(
        || Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }),
        pad_bounds,
    );
    let frame = Frame::fit(window, width, margin, TITLE_HEIGHT);

    write_svg_open(writer, &frame, &scene.title)?;
    write_svg_styles(writer)?;
    writeln!(writer, r#"<text class="{class}" x="{margin}" y="{y}">{title}</text>"#,
        class = if scene.empty { "title empty" } else { "title" },
        y = margin + TITLE_HEIGHT * 0.6,
        title = escape_xml(&scene.title),
    )?;

    // Larger markers first so small ones stay visible on top.
    let mut order: Vec<usize> = (0..scene.points.len()).collect();
    order.sort_by(|&a, &b| scene.points[b].size.total_cmp(&scene.points[a].size));

    for point in order.into_iter().map(|i| &scene.points[i]) {
        let center = frame.project(point.longitude, point.latitude);
        let mut tooltip = escape_xml(&point.tooltip.title);
        for entry in &point.tooltip.fields {
            tooltip.push_str(&format!("\n{}: {}", escape_xml(&entry.label), escape_xml(&entry.value)));
        }
        writeln!(
            writer,
            r#"<circle class="site" cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}"><title>{tooltip}</title></circle>"#,
            cx = center.x,
            cy = center.y,
            r = point.size / 2.0,
            fill = point.color,
        )?;
    }

    write_svg_close(writer)
}

/// Render `scene` into an in-memory SVG document.
pub(crate) fn scene_to_svg_string(scene: &Scene, width: f64, margin: f64) -> Result<String> {
    let mut buffer = Vec::new();
    write_scene(&mut buffer, scene, width, margin)?;
    String::from_utf8(buffer).context("[io::svg] SVG output is not valid UTF-8")
}

pub(crate) fn write_scene_file(path: &Path, scene: &Scene, width: f64, margin: f64) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_scene(&mut writer, scene, width, margin)?;
    writer.flush().with_context(|| format!("[io::svg] Failed to flush {}", path.display()))
}

fn pad_bounds(bounds: Rect<f64>) -> Rect<f64> {
    let center = bounds.center();
    let half_w = bounds.width().max(MIN_SPAN_DEG) / 2.0;
    let half_h = bounds.height().max(MIN_SPAN_DEG) / 2.0;
    Rect::new(
        Coord { x: center.x - half_w, y: center.y - half_h },
        Coord { x: center.x + half_w, y: center.y + half_h },
    )
}
