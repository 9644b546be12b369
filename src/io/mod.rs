//! Format-specific reading and writing.
//!
//! - `csv` - source tables for the dataset store
//! - `svg` - standalone scene previews
//! - `geojson` - scene export as a point FeatureCollection

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod svg;

pub(crate) use csv::*;
