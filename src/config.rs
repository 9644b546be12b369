//! Dashboard configuration: column mapping, tooltip layout and scene encodings.
//!
//! Every field has a default matching the sales-targeting table the dashboard was
//! built for, so a JSON file only needs to name what differs.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LoadError, dataset::{Level, Metric}};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub columns: ColumnMap,
    pub tooltip: Vec<TooltipField>,
    pub scene: SceneOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            tooltip: default_tooltip(),
            scene: SceneOptions::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read_from_file(path: &Path) -> Result<Self, LoadError> {
        debug!(path = %path.display(), "reading dashboard config");
        let json = fs::read_to_string(path)
            .map_err(|source| LoadError::Unreadable { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }

    /// Display-only columns referenced by the tooltip, in first-use order.
    pub fn display_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for field in &self.tooltip {
            if let FieldSource::Display(name) = &field.source {
                if !columns.contains(name) { columns.push(name.clone()) }
            }
        }
        columns
    }
}

/// Mapping from semantic fields to source column headers.
/// Entries missing from `levels` or `metrics` fall back to the default header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub levels: BTreeMap<Level, String>,
    pub latitude: String,
    pub longitude: String,
    pub metrics: BTreeMap<Metric, String>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            levels: Level::order().into_iter()
                .map(|level| (level, default_level_column(level).to_string()))
                .collect(),
            latitude: "Latitude".to_string(),
            longitude: "Longitude".to_string(),
            metrics: Metric::order().into_iter()
                .map(|metric| (metric, default_metric_column(metric).to_string()))
                .collect(),
        }
    }
}

impl ColumnMap {
    pub fn level(&self, level: Level) -> &str {
        self.levels.get(&level).map_or(default_level_column(level), String::as_str)
    }

    pub fn metric(&self, metric: Metric) -> &str {
        self.metrics.get(&metric).map_or(default_metric_column(metric), String::as_str)
    }
}

fn default_level_column(level: Level) -> &'static str {
    match level {
        Level::Region => "Province",
        Level::Subregion => "District",
        Level::Subsubregion => "Sub-district",
        Level::CellBlock => "Happy Block",
    }
}

fn default_metric_column(metric: Metric) -> &'static str {
    match metric {
        Metric::NetAdd => "Net Add",
        Metric::PotentialScore => "Potential Score",
        Metric::PortUtilization => "%Port_Utilize",
        Metric::MarketShareTrue => "Market Share True (%)",
        Metric::MarketShareAis => "Market Share AIS (%)",
        Metric::MarketShare3bb => "Market Share 3BB (%)",
        Metric::MarketShareNt => "Market Share NT (%)",
        Metric::Aging => "L2_Aging",
        Metric::PortUse => "Port Use",
    }
}

/// Where a tooltip value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    Level(Level),
    Metric(Metric),
    /// Raw text column kept only for display.
    Display(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    /// Values as read (integral metrics without a fractional part).
    #[default]
    Raw,
    /// Fixed number of decimal places.
    Decimals(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipField {
    pub label: String,
    pub source: FieldSource,
    #[serde(default)]
    pub format: FieldFormat,
}

impl TooltipField {
    fn new(label: &str, source: FieldSource, format: FieldFormat) -> Self {
        Self { label: label.to_string(), source, format }
    }
}

/// Default tooltip layout; percentage metrics carry two decimals.
pub fn default_tooltip() -> Vec<TooltipField> {
    use FieldFormat::{Decimals, Raw};
    use FieldSource::{Display, Level as L, Metric as M};
    vec![
        TooltipField::new("Sub-District", L(Level::Subsubregion), Raw),
        TooltipField::new("Household", Display("Household".into()), Raw),
        TooltipField::new("Happy Block", L(Level::CellBlock), Raw),
        TooltipField::new("L2", Display("L2".into()), Raw),
        TooltipField::new("Port Capacity", Display("Port Capacity".into()), Raw),
        TooltipField::new("Port Available", Display("Port Available".into()), Raw),
        TooltipField::new("Port Use", M(Metric::PortUse), Raw),
        TooltipField::new("%Port_Utilize", M(Metric::PortUtilization), Decimals(2)),
        TooltipField::new("Net Add", M(Metric::NetAdd), Raw),
        TooltipField::new("Market Share True (%)", M(Metric::MarketShareTrue), Decimals(2)),
        TooltipField::new("Market Share AIS (%)", M(Metric::MarketShareAis), Decimals(2)),
        TooltipField::new("Market Share 3BB (%)", M(Metric::MarketShare3bb), Decimals(2)),
        TooltipField::new("Market Share NT (%)", M(Metric::MarketShareNt), Decimals(2)),
        TooltipField::new("Competitor Speed", Display("Competitor Speed".into()), Raw),
        TooltipField::new("True Speed", Display("True Speed".into()), Raw),
        TooltipField::new("L2_Aging", M(Metric::Aging), Raw),
    ]
}

/// Visual encodings and titles of the rendered scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Metric driving marker size.
    pub magnitude: Metric,
    /// Metric driving marker color.
    pub intensity: Metric,
    /// Level whose value titles each tooltip.
    pub hover_title: Level,
    pub title: String,
    pub empty_title: String,
    pub base_style: String,
    pub zoom: f64,
    pub scroll_zoom: bool,
    pub min_marker_px: f64,
    pub max_marker_px: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            magnitude: Metric::PortUse,
            intensity: Metric::PotentialScore,
            hover_title: Level::Subsubregion,
            title: "Potential Score and Sales Insights".to_string(),
            empty_title: "No data available".to_string(),
            base_style: "open-street-map".to_string(),
            zoom: 6.0,
            scroll_zoom: true,
            min_marker_px: 4.0,
            max_marker_px: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json_str(r#"{
            "columns": { "levels": { "region": "Region" }, "latitude": "lat" },
            "scene": { "zoom": 9.0 }
        }"#).unwrap();

        assert_eq!(config.columns.level(Level::Region), "Region");
        assert_eq!(config.columns.level(Level::Subregion), "District");
        assert_eq!(config.columns.latitude, "lat");
        assert_eq!(config.columns.longitude, "Longitude");
        assert_eq!(config.columns.metric(Metric::Aging), "L2_Aging");
        assert_eq!(config.scene.zoom, 9.0);
        assert_eq!(config.scene.magnitude, Metric::PortUse);
    }

    #[test]
    fn tooltip_sources_deserialize() {
        let config = DashboardConfig::from_json_str(r#"{
            "tooltip": [
                { "label": "Area", "source": { "level": "subsubregion" } },
                { "label": "Share", "source": { "metric": "market_share_true" }, "format": { "decimals": 2 } },
                { "label": "L2", "source": { "display": "L2" }, "format": "raw" }
            ]
        }"#).unwrap();

        assert_eq!(config.tooltip.len(), 3);
        assert_eq!(config.tooltip[0].source, FieldSource::Level(Level::Subsubregion));
        assert_eq!(config.tooltip[1].format, FieldFormat::Decimals(2));
        assert_eq!(config.display_columns(), vec!["L2".to_string()]);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = DashboardConfig::from_json_str("{ \"scene\": 3 }").unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn json_round_trip() {
        let config = DashboardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DashboardConfig::from_json_str(&json).unwrap(), config);
    }
}
