use std::{path::Path, sync::Arc};

use ahash::{AHashMap, AHashSet};
use geo::Point;
use polars::{frame::DataFrame, prelude::DataType};
use tracing::{debug, info, warn};

use crate::{DashboardConfig, LoadError, io};
use super::{Interval, Level, LocationKeys, Metric, MetricValues, Record, SliderSpec, coerce_numeric};

/// Where a dataset is read from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Path(&'a Path),
    Text(&'a str),
    Bytes(&'a [u8]),
}

/// Columns that were actually present in the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    levels: [bool; Level::COUNT],
    metrics: [bool; Metric::COUNT],
    display: Vec<Arc<str>>,
}

impl Schema {
    /// A level is disabled when its optional column is missing.
    #[inline]
    pub fn has_level(&self, level: Level) -> bool { self.levels[level.index()] }

    #[inline]
    pub fn has_metric(&self, metric: Metric) -> bool { self.metrics[metric.index()] }

    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        Level::order().into_iter().filter(|&level| self.has_level(level))
    }

    pub fn display_columns(&self) -> &[Arc<str>] { &self.display }

    pub fn display_index(&self, name: &str) -> Option<usize> {
        self.display.iter().position(|column| column.as_ref() == name)
    }
}

/// The immutable, normalized site table.
///
/// Built once at startup and only ever read afterwards; every filtering
/// operation borrows records rather than editing them.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Schema,
    records: Vec<Record>,
    bounds: [Interval; Metric::COUNT],
}

impl Dataset {
    pub fn load(source: Source<'_>, config: &DashboardConfig) -> Result<Self, LoadError> {
        let df = match source {
            Source::Path(path) => io::read_csv(path)?,
            Source::Text(text) => io::read_csv_string(text)?,
            Source::Bytes(bytes) => io::read_csv_bytes(bytes)?,
        };
        Self::from_frame(&df, config)
    }

    pub fn read_csv(path: &Path, config: &DashboardConfig) -> Result<Self, LoadError> {
        info!(path = %path.display(), "loading dataset");
        Self::load(Source::Path(path), config)
    }

    /// Normalize a raw table into records.
    ///
    /// Numeric cells that fail to parse are zero-filled; rows are never dropped.
    pub fn from_frame(df: &DataFrame, config: &DashboardConfig) -> Result<Self, LoadError> {
        let columns = &config.columns;
        let mut missing = Vec::new();

        let mut levels = Vec::with_capacity(Level::COUNT);
        for level in Level::order() {
            let name = columns.level(level);
            let values = read_text_column(df, name)?;
            match (&values, level.is_required()) {
                (None, true) => missing.push(name.to_string()),
                (None, false) => debug!(column = name, %level, "optional level column missing; level disabled"),
                _ => {}
            }
            levels.push(values);
        }

        let latitude = read_numeric_column(df, &columns.latitude)?;
        if latitude.is_none() { missing.push(columns.latitude.clone()) }
        let longitude = read_numeric_column(df, &columns.longitude)?;
        if longitude.is_none() { missing.push(columns.longitude.clone()) }

        let mut metrics = Vec::with_capacity(Metric::COUNT);
        for metric in Metric::order() {
            let name = columns.metric(metric);
            let values = read_numeric_column(df, name)?;
            match (&values, metric.is_required()) {
                (None, true) => missing.push(name.to_string()),
                (None, false) => debug!(column = name, %metric, "optional metric column missing"),
                _ => {}
            }
            metrics.push(values);
        }

        let mut display_names = Vec::new();
        let mut display = Vec::new();
        for name in config.display_columns() {
            match read_text_column(df, &name)? {
                Some(values) => {
                    display_names.push(Arc::<str>::from(name));
                    display.push(values);
                }
                None => debug!(column = %name, "display column missing; omitted from tooltips"),
            }
        }

        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(LoadError::MissingColumns(missing));
        };
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let blank = blank_rows(df)?;
        let skipped = blank.iter().filter(|&&b| b).count();
        if skipped > 0 {
            debug!(rows = skipped, "skipped blank rows");
        }

        let records: Vec<Record> = (0..df.height())
            .filter(|&i| !blank[i])
            .map(|i| Record {
                location: LocationKeys::new(std::array::from_fn(|l| {
                    levels[l].as_ref().and_then(|column| column[i].clone())
                })),
                position: Point::new(longitude[i], latitude[i]),
                metrics: MetricValues::new(std::array::from_fn(|m| {
                    metrics[m].as_ref().map_or(0.0, |column| column[i])
                })),
                display: display.iter().map(|column| column[i].clone()).collect(),
            })
            .collect();

        let bounds = std::array::from_fn(|m| {
            Interval::enclosing(records.iter().map(|record| record.metrics.get(Metric::order()[m])))
                .unwrap_or(Interval::new(0.0, 0.0))
        });

        let schema = Schema {
            levels: std::array::from_fn(|l| levels[l].is_some()),
            metrics: std::array::from_fn(|m| metrics[m].is_some()),
            display: display_names,
        };

        if records.is_empty() { warn!("dataset has no rows") }
        info!(rows = records.len(), levels = schema.levels().count(), "dataset loaded");

        Ok(Self { schema, records, bounds })
    }

    #[inline]
    pub fn schema(&self) -> &Schema { &self.schema }

    #[inline]
    pub fn records(&self) -> &[Record] { &self.records }

    #[inline]
    pub fn len(&self) -> usize { self.records.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Observed `[min, max]` of a metric; `[0, 0]` for an empty dataset.
    #[inline]
    pub fn bounds(&self, metric: Metric) -> Interval { self.bounds[metric.index()] }

    /// Distinct values of a level's column in order of first appearance.
    pub fn column_values(&self, level: Level) -> Vec<Arc<str>> {
        if !self.schema.has_level(level) { return Vec::new() }
        distinct_values(self.records.iter(), level)
    }

    /// Range controls for every ranged metric, derived from the observed bounds.
    pub fn sliders(&self) -> Vec<SliderSpec> {
        Metric::ranged().into_iter()
            .map(|metric| SliderSpec::for_metric(metric, self.bounds(metric)))
            .collect()
    }
}

/// Project `level` to its distinct non-empty values, keeping first-appearance order.
pub(crate) fn distinct_values<'a>(records: impl Iterator<Item = &'a Record>, level: Level) -> Vec<Arc<str>> {
    let mut seen: AHashSet<Arc<str>> = AHashSet::new();
    records
        .filter_map(|record| record.location.get(level))
        .filter(|value| seen.insert(Arc::clone(value)))
        .cloned()
        .collect()
}

/// Rows whose every cell is null or empty, such as blank lines in the source.
fn blank_rows(df: &DataFrame) -> Result<Vec<bool>, LoadError> {
    let mut blank = vec![true; df.height()];
    for column in df.get_columns() {
        let column = column.cast(&DataType::String)?;
        for (row, cell) in column.str()?.into_iter().enumerate() {
            if cell.is_some_and(|s| !s.trim().is_empty()) { blank[row] = false }
        }
    }
    Ok(blank)
}

/// Read a column as interned text. Empty cells become `None`.
fn read_text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<Arc<str>>>>, LoadError> {
    let Ok(column) = df.column(name) else { return Ok(None) };
    let column = column.cast(&DataType::String)?;

    let mut interned: AHashMap<&str, Arc<str>> = AHashMap::new();
    let values = column.str()?.into_iter()
        .map(|cell| {
            cell.filter(|s| !s.is_empty())
                .map(|s| Arc::clone(interned.entry(s).or_insert_with(|| Arc::from(s))))
        })
        .collect();
    Ok(Some(values))
}

/// Read a column as numbers, zero-filling cells that do not parse.
fn read_numeric_column(df: &DataFrame, name: &str) -> Result<Option<Vec<f64>>, LoadError> {
    let Ok(column) = df.column(name) else { return Ok(None) };
    let column = column.cast(&DataType::String)?;

    let mut coerced = 0usize;
    let values = column.str()?.into_iter()
        .map(|cell| {
            let unparsed = cell.map(str::trim)
                .is_some_and(|s| !s.is_empty() && !s.parse::<f64>().is_ok_and(f64::is_finite));
            if unparsed { coerced += 1 }
            coerce_numeric(cell)
        })
        .collect();
    if coerced > 0 {
        warn!(column = name, cells = coerced, "non-numeric cells normalized to zero");
    }
    Ok(Some(values))
}
