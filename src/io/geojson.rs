use serde_json::{Map, Value, json};

use crate::view::Scene;

/// Export scene points as a GeoJSON FeatureCollection.
/// Each feature carries its encodings plus the tooltip fields as properties.
pub(crate) fn scene_to_geojson(scene: &Scene) -> Value {
    let features: Vec<Value> = scene.points.iter()
        .map(|point| {
            let mut properties = Map::new();
            properties.insert("title".to_string(), json!(point.tooltip.title));
            properties.insert("size".to_string(), json!(point.size));
            properties.insert("color".to_string(), json!(point.color.to_string()));
            properties.insert("magnitude".to_string(), json!(point.magnitude));
            properties.insert("intensity".to_string(), json!(point.intensity));
            for entry in &point.tooltip.fields {
                properties.insert(entry.label.clone(), json!(entry.value));
            }

            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [point.longitude, point.latitude] },
                "properties": properties,
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "title": scene.title,
        "empty": scene.empty,
        "features": features,
    })
}
