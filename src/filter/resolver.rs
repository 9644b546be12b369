use std::sync::Arc;

use tracing::debug;

use crate::dataset::{Dataset, Level, Record, Schema, distinct_values};
use super::{FilterState, Selections};

/// Options for one cascading dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOptions {
    pub level: Level,
    pub values: Vec<Arc<str>>,
}

/// Distinct values of `level` among rows matching every selected ancestor.
///
/// Ancestors without a selection do not constrain; selections at `level` or
/// below are ignored. Values keep their order of first appearance.
pub fn options_for(dataset: &Dataset, level: Level, ancestors: &Selections) -> Vec<Arc<str>> {
    let schema = dataset.schema();
    if !schema.has_level(level) { return Vec::new() }

    let constraints: Vec<(Level, &str)> = ancestors.active(schema)
        .filter(|&(ancestor, _)| ancestor < level)
        .collect();

    let rows = dataset.records().iter()
        .filter(|record| constraints.iter().all(|&(ancestor, value)| record.key(ancestor) == Some(value)));
    distinct_values(rows, level)
}

/// Option lists for every enabled level, top to bottom.
pub fn cascade(dataset: &Dataset, selections: &Selections) -> Vec<LevelOptions> {
    dataset.schema().levels()
        .map(|level| LevelOptions { level, values: options_for(dataset, level, selections) })
        .collect()
}

/// Rows of `dataset` matching `state`, in dataset order.
pub fn filter_rows<'a>(dataset: &'a Dataset, state: &FilterState) -> FilterOutcome<'a> {
    let rows = RowSet::all(dataset).refine(state);
    debug!(matched = rows.len(), total = dataset.len(), "filtered rows");
    rows.into_outcome()
}

/// An ordered subsequence of a dataset's records.
#[derive(Debug, Clone)]
pub struct RowSet<'a> {
    schema: &'a Schema,
    rows: Vec<&'a Record>,
}

impl<'a> RowSet<'a> {
    pub fn all(dataset: &'a Dataset) -> Self {
        Self { schema: dataset.schema(), rows: dataset.records().iter().collect() }
    }

    /// Keep only rows matching `state`. Refining twice by the same state is a no-op.
    pub fn refine(&self, state: &FilterState) -> Self {
        let rows = self.rows.iter()
            .copied()
            .filter(|record| state.matches(self.schema, record))
            .collect();
        Self { schema: self.schema, rows }
    }

    #[inline]
    pub fn schema(&self) -> &'a Schema { self.schema }

    #[inline]
    pub fn rows(&self) -> &[&'a Record] { &self.rows }

    #[inline]
    pub fn len(&self) -> usize { self.rows.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().copied()
    }

    pub fn into_outcome(self) -> FilterOutcome<'a> {
        if self.rows.is_empty() { FilterOutcome::NoRows } else { FilterOutcome::Rows(self) }
    }
}

/// Result of filtering. An empty match is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub enum FilterOutcome<'a> {
    Rows(RowSet<'a>),
    NoRows,
}

impl<'a> FilterOutcome<'a> {
    pub fn is_empty(&self) -> bool { matches!(self, FilterOutcome::NoRows) }

    pub fn len(&self) -> usize {
        match self {
            FilterOutcome::Rows(rows) => rows.len(),
            FilterOutcome::NoRows => 0,
        }
    }

    pub fn rows(&self) -> &[&'a Record] {
        match self {
            FilterOutcome::Rows(rows) => rows.rows(),
            FilterOutcome::NoRows => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DashboardConfig, dataset::{Metric, Source}};

    const CSV: &str = "\
Province,District,Sub-district,Happy Block,Latitude,Longitude,Net Add,Potential Score,%Port_Utilize,Market Share True (%),L2_Aging,Port Use
North,N1,A,HB1,13.7,100.5,4,80,55,30,0,12
North,N2,B,HB2,13.9,100.6,-2,65,10,45,5,3
South,S1,C,HB3,7.0,100.4,1,90,100,12,12,8
North,N1,D,HB4,13.8,100.7,0,70,20,10,13,5
";

    fn dataset() -> Dataset {
        Dataset::load(Source::Text(CSV), &DashboardConfig::default()).unwrap()
    }

    fn names(values: &[Arc<str>]) -> Vec<&str> {
        values.iter().map(|v| v.as_ref()).collect()
    }

    #[test]
    fn unset_ancestors_do_not_constrain() {
        let dataset = dataset();
        let options = options_for(&dataset, Level::Subregion, &Selections::new());
        assert_eq!(names(&options), vec!["N1", "N2", "S1"]);
    }

    #[test]
    fn options_follow_every_ancestor() {
        let dataset = dataset();
        let selections = Selections::new().with(Level::Region, "North").with(Level::Subregion, "N1");
        let options = options_for(&dataset, Level::Subsubregion, &selections);
        assert_eq!(names(&options), vec!["A", "D"]);
    }

    #[test]
    fn selections_at_or_below_level_are_ignored() {
        let dataset = dataset();
        let selections = Selections::new().with(Level::Subregion, "N2").with(Level::Subsubregion, "B");
        let options = options_for(&dataset, Level::Subregion, &selections);
        assert_eq!(names(&options), vec!["N1", "N2", "S1"]);
    }

    #[test]
    fn cascade_lists_every_level() {
        let dataset = dataset();
        let selections = Selections::new().with(Level::Region, "South");
        let cascade = cascade(&dataset, &selections);
        assert_eq!(cascade.len(), Level::COUNT);
        assert_eq!(names(&cascade[0].values), vec!["North", "South"]);
        assert_eq!(names(&cascade[1].values), vec!["S1"]);
        assert_eq!(names(&cascade[3].values), vec!["HB3"]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let dataset = dataset();
        let state = FilterState::default().with_range(Metric::Aging, 0.0, 12.0);
        let outcome = filter_rows(&dataset, &state);
        let aging: Vec<f64> = outcome.rows().iter().map(|r| r.metric(Metric::Aging)).collect();
        assert_eq!(aging, vec![0.0, 5.0, 12.0]);
    }

    #[test]
    fn initial_state_keeps_every_row() {
        let dataset = dataset();
        let outcome = filter_rows(&dataset, &FilterState::initial(&dataset));
        assert_eq!(outcome.len(), dataset.len());
    }

    #[test]
    fn unknown_value_yields_no_rows() {
        let dataset = dataset();
        let state = FilterState::default().with_selection(Level::Region, "East");
        assert!(filter_rows(&dataset, &state).is_empty());
    }

    #[test]
    fn refine_is_idempotent() {
        let dataset = dataset();
        let state = FilterState::initial(&dataset)
            .with_selection(Level::Region, "North")
            .with_range(Metric::PotentialScore, 65.0, 80.0);
        let once = RowSet::all(&dataset).refine(&state);
        let twice = once.refine(&state);
        assert_eq!(once.rows(), twice.rows());
        assert_eq!(once.len(), 3);
    }
}
