use tracing::debug;

use crate::{
    DashboardConfig,
    config::{FieldFormat, FieldSource, SceneOptions, TooltipField},
    dataset::{Interval, Level, Metric, Record, Schema},
    filter::{FilterOutcome, RowSet},
};
use super::{BaseLayer, ColorScale, LinearScale, MapView, Scene, ScenePoint, SizeScale, Tooltip, TooltipEntry};

/// Tooltip field bound to a column that exists in the dataset.
#[derive(Debug, Clone, Copy)]
enum Resolved {
    Level(Level),
    Metric(Metric),
    Display(usize),
}

/// Maps filtered rows to a [`Scene`].
#[derive(Debug, Clone)]
pub struct Renderer<'c> {
    options: &'c SceneOptions,
    tooltip: &'c [TooltipField],
}

impl<'c> Renderer<'c> {
    pub fn new(config: &'c DashboardConfig) -> Self {
        Self { options: &config.scene, tooltip: &config.tooltip }
    }

    pub fn render(&self, outcome: &FilterOutcome<'_>) -> Scene {
        match outcome {
            FilterOutcome::Rows(rows) => self.render_rows(rows),
            FilterOutcome::NoRows => self.render_empty(),
        }
    }

    pub fn render_empty(&self) -> Scene {
        debug!("no rows matched; rendering empty scene");
        Scene::empty(&self.options.empty_title, &self.options.base_style)
    }

    pub fn render_rows(&self, rows: &RowSet<'_>) -> Scene {
        if rows.is_empty() { return self.render_empty() }
        let options = self.options;

        let magnitude = Interval::enclosing(rows.iter().map(|r| r.metric(options.magnitude)))
            .unwrap_or(Interval::new(0.0, 0.0));
        let intensity = Interval::enclosing(rows.iter().map(|r| r.metric(options.intensity)))
            .unwrap_or(Interval::new(0.0, 0.0));

        let sizes = SizeScale {
            metric: options.magnitude,
            scale: LinearScale::new(magnitude, Interval::new(options.min_marker_px, options.max_marker_px)),
        };
        let colors = ColorScale::viridis(options.intensity, intensity);
        let fields = self.resolve_fields(rows.schema());

        let points: Vec<ScenePoint> = rows.iter()
            .map(|record| ScenePoint {
                latitude: record.latitude(),
                longitude: record.longitude(),
                size: sizes.scale.map(record.metric(options.magnitude)),
                color: colors.color(record.metric(options.intensity)),
                magnitude: record.metric(options.magnitude),
                intensity: record.metric(options.intensity),
                tooltip: self.tooltip_for(record, &fields),
            })
            .collect();

        let mut scene = Scene {
            empty: false,
            title: options.title.clone(),
            base_layer: BaseLayer { style: options.base_style.clone() },
            view: None,
            points,
            size_scale: Some(sizes),
            color_scale: Some(colors),
        };
        scene.view = scene.bounds().map(|bounds| {
            let center = bounds.center();
            MapView { latitude: center.y, longitude: center.x, zoom: options.zoom, scroll_zoom: options.scroll_zoom }
        });

        debug!(points = scene.len(), "rendered scene");
        scene
    }

    /// Drop tooltip fields whose column is missing from the dataset.
    fn resolve_fields(&self, schema: &Schema) -> Vec<(&'c TooltipField, Resolved)> {
        self.tooltip.iter()
            .filter_map(|field| {
                let resolved = match &field.source {
                    FieldSource::Level(level) => schema.has_level(*level).then_some(Resolved::Level(*level)),
                    FieldSource::Metric(metric) => schema.has_metric(*metric).then_some(Resolved::Metric(*metric)),
                    FieldSource::Display(name) => schema.display_index(name).map(Resolved::Display),
                };
                resolved.map(|resolved| (field, resolved))
            })
            .collect()
    }

    fn tooltip_for(&self, record: &Record, fields: &[(&TooltipField, Resolved)]) -> Tooltip {
        let fields = fields.iter()
            .map(|&(field, resolved)| {
                let value = match resolved {
                    Resolved::Level(level) => format_text(record.key(level), field.format),
                    Resolved::Metric(metric) => format_number(record.metric(metric), field.format),
                    Resolved::Display(index) => format_text(record.display(index), field.format),
                };
                TooltipEntry { label: field.label.clone(), value }
            })
            .collect();
        Tooltip {
            title: record.key(self.options.hover_title).unwrap_or_default().to_string(),
            fields,
        }
    }
}

/// Render `outcome` with the scene settings of `config`.
pub fn render(outcome: &FilterOutcome<'_>, config: &DashboardConfig) -> Scene {
    Renderer::new(config).render(outcome)
}

fn format_number(value: f64, format: FieldFormat) -> String {
    match format {
        FieldFormat::Decimals(places) => format!("{value:.places$}"),
        FieldFormat::Raw if value.fract() == 0.0 && value.abs() < 1e15 => format!("{}", value as i64),
        FieldFormat::Raw => value.to_string(),
    }
}

/// Text cells are shown as read; a decimal format applies only when the cell is numeric.
fn format_text(value: Option<&str>, format: FieldFormat) -> String {
    let Some(text) = value else { return String::new() };
    match format {
        FieldFormat::Decimals(_) => text.trim().parse::<f64>()
            .map_or_else(|_| text.to_string(), |number| format_number(number, format)),
        FieldFormat::Raw => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_raw_or_fixed() {
        assert_eq!(format_number(12.0, FieldFormat::Raw), "12");
        assert_eq!(format_number(-3.0, FieldFormat::Raw), "-3");
        assert_eq!(format_number(12.5, FieldFormat::Raw), "12.5");
        assert_eq!(format_number(45.256, FieldFormat::Decimals(2)), "45.26");
        assert_eq!(format_number(30.0, FieldFormat::Decimals(2)), "30.00");
    }

    #[test]
    fn text_formats_only_numeric_cells() {
        assert_eq!(format_text(Some("100/50"), FieldFormat::Decimals(2)), "100/50");
        assert_eq!(format_text(Some("7.125"), FieldFormat::Decimals(1)), "7.1");
        assert_eq!(format_text(None, FieldFormat::Raw), "");
    }
}
