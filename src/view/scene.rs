use std::path::Path;

use anyhow::{Context, Result};
use geo::{BoundingRect, MultiPoint, Point, Rect};
use serde::Serialize;
use serde_json::Value;

use crate::io;
use super::{ColorScale, Rgb, SizeScale};

/// Renderable description of the map display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Set when no rows matched; `points` is then empty.
    pub empty: bool,
    pub title: String,
    pub base_layer: BaseLayer,
    pub view: Option<MapView>,
    pub points: Vec<ScenePoint>,
    pub size_scale: Option<SizeScale>,
    pub color_scale: Option<ColorScale>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseLayer {
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub scroll_zoom: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Marker diameter in pixels.
    pub size: f64,
    pub color: Rgb,
    pub magnitude: f64,
    pub intensity: f64,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub fields: Vec<TooltipEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipEntry {
    pub label: String,
    pub value: String,
}

impl Tooltip {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.iter().find(|entry| entry.label == label).map(|entry| entry.value.as_str())
    }
}

impl Scene {
    /// Scene shown when nothing matches: base layer only, no points.
    pub fn empty(title: &str, base_style: &str) -> Self {
        Self {
            empty: true,
            title: title.to_string(),
            base_layer: BaseLayer { style: base_style.to_string() },
            view: None,
            points: Vec::new(),
            size_scale: None,
            color_scale: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize { self.points.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.empty }

    /// Bounding box of the points in (lon, lat), or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.points.iter()
            .map(|point| Point::new(point.longitude, point.latitude))
            .collect::<MultiPoint<f64>>()
            .bounding_rect()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("[Scene::to_json] Failed to serialize scene")
    }

    /// Points as a GeoJSON FeatureCollection carrying encodings and tooltips.
    pub fn to_geojson(&self) -> Value {
        io::geojson::scene_to_geojson(self)
    }

    /// Standalone SVG preview, `width` pixels wide.
    pub fn to_svg_string(&self, width: f64, margin: f64) -> Result<String> {
        io::svg::scene_to_svg_string(self, width, margin)
    }

    pub fn write_svg(&self, path: &Path, width: f64, margin: f64) -> Result<()> {
        io::svg::write_scene_file(path, self, width, margin)
    }
}
