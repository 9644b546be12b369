use std::collections::BTreeMap;

use crate::dataset::{Dataset, Interval, Level, Metric, Record, Schema};

/// Zero-or-one selected value per hierarchical level.
///
/// An empty string is treated as no selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections([Option<String>; Level::COUNT]);

impl Selections {
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub fn get(&self, level: Level) -> Option<&str> {
        self.0[level.index()].as_deref()
    }

    /// Set a level's value, leaving descendant selections as they are.
    pub fn set(&mut self, level: Level, value: Option<&str>) {
        self.0[level.index()] = value.filter(|v| !v.is_empty()).map(str::to_owned);
    }

    /// Set a level's value and clear every level below it.
    pub fn select(&mut self, level: Level, value: Option<&str>) {
        self.set(level, value);
        for descendant in level.descendants() {
            self.0[descendant.index()] = None;
        }
    }

    pub fn with(mut self, level: Level, value: &str) -> Self {
        self.set(level, Some(value));
        self
    }

    /// Selections that actually constrain rows under `schema`, top to bottom.
    pub(crate) fn active<'a>(&'a self, schema: &'a Schema) -> impl Iterator<Item = (Level, &'a str)> + 'a {
        Level::order().into_iter()
            .filter(|&level| schema.has_level(level))
            .filter_map(|level| self.get(level).map(|value| (level, value)))
    }
}

/// Full snapshot of the dashboard controls at one interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub selections: Selections,
    pub ranges: BTreeMap<Metric, Interval>,
}

impl FilterState {
    /// Controls in their initial position: no selections, every slider at its full extent.
    ///
    /// Percentage sliders span a fixed `[0, 100]`, so rows outside it do not match.
    pub fn initial(dataset: &Dataset) -> Self {
        let ranges = dataset.sliders().into_iter()
            .map(|slider| (slider.metric, slider.value))
            .collect();
        Self { selections: Selections::new(), ranges }
    }

    pub fn with_selection(mut self, level: Level, value: &str) -> Self {
        self.selections.set(level, Some(value));
        self
    }

    pub fn with_range(mut self, metric: Metric, lo: f64, hi: f64) -> Self {
        self.ranges.insert(metric, Interval::new(lo, hi));
        self
    }

    /// Change one level the way a dropdown does: descendants are cleared.
    pub fn select(&mut self, level: Level, value: Option<&str>) {
        self.selections.select(level, value);
    }

    /// Row predicate: every active equality and every range present.
    pub(crate) fn matches(&self, schema: &Schema, record: &Record) -> bool {
        self.selections.active(schema).all(|(level, value)| record.key(level) == Some(value))
            && self.ranges.iter().all(|(&metric, range)| range.contains(record.metric(metric)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DashboardConfig, dataset::Source};

    #[test]
    fn empty_string_is_unset() {
        let mut selections = Selections::new();
        selections.set(Level::Region, Some(""));
        assert_eq!(selections.get(Level::Region), None);
    }

    #[test]
    fn select_clears_descendants_only() {
        let mut selections = Selections::new()
            .with(Level::Region, "North")
            .with(Level::Subregion, "N1")
            .with(Level::Subsubregion, "A");
        selections.select(Level::Subregion, Some("N2"));

        assert_eq!(selections.get(Level::Region), Some("North"));
        assert_eq!(selections.get(Level::Subregion), Some("N2"));
        assert_eq!(selections.get(Level::Subsubregion), None);
    }

    #[test]
    fn initial_percentages_are_bounded() {
        let csv = "\
Province,District,Sub-district,Latitude,Longitude,Net Add,Potential Score,%Port_Utilize,Market Share True (%),L2_Aging,Port Use
North,N1,A,13.7,100.5,4,80,55,30,6,12
North,N1,B,13.8,100.6,2,70,120,20,3,9
";
        let dataset = Dataset::load(Source::Text(csv), &DashboardConfig::default()).unwrap();
        let state = FilterState::initial(&dataset);
        assert_eq!(state.ranges[&Metric::PortUtilization], Interval::new(0.0, 100.0));

        let matched: Vec<_> = dataset.records().iter()
            .filter(|record| state.matches(dataset.schema(), record))
            .filter_map(|record| record.key(Level::Subsubregion))
            .collect();
        assert_eq!(matched, vec!["A"]);
    }

    #[test]
    fn set_keeps_stale_descendants() {
        let mut selections = Selections::new()
            .with(Level::Region, "North")
            .with(Level::Subregion, "N1");
        selections.set(Level::Region, Some("South"));
        assert_eq!(selections.get(Level::Subregion), Some("N1"));
    }
}
