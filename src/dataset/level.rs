use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

/// Hierarchical location levels, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Region,         // Highest-level key (province)
    Subregion,      // Subregion -> Region (district)
    Subsubregion,   // Subsubregion -> Subregion (sub-district)
    CellBlock,      // CellBlock -> Subsubregion, optional in the source
}

impl Level {
    pub const COUNT: usize = 4;

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Region => "region",
            Level::Subregion => "subregion",
            Level::Subsubregion => "subsubregion",
            Level::CellBlock => "cell_block",
        }
    }

    pub fn order() -> [Level; Level::COUNT] {
        [
            Level::Region,
            Level::Subregion,
            Level::Subsubregion,
            Level::CellBlock,
        ]
    }

    /// Position of this level in [`Level::order`].
    #[inline]
    pub fn index(self) -> usize { self as usize }

    /// Whether a source table must carry a column for this level.
    pub fn is_required(self) -> bool { !matches!(self, Level::CellBlock) }

    /// Levels strictly above this one, top to bottom.
    pub fn ancestors(self) -> impl Iterator<Item = Level> {
        Level::order().into_iter().take(self.index())
    }

    /// Levels strictly below this one, top to bottom.
    pub fn descendants(self) -> impl Iterator<Item = Level> {
        Level::order().into_iter().skip(self.index() + 1)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "region" | "province" => Ok(Level::Region),
            "subregion" | "district" => Ok(Level::Subregion),
            "subsubregion" | "sub_district" | "subdistrict" => Ok(Level::Subsubregion),
            "cell_block" | "cellblock" | "happy_block" => Ok(Level::CellBlock),
            other => Err(format!("unknown level '{other}'")),
        }
    }
}

/// Location keys of a single record, one optional value per level.
/// An empty source cell is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationKeys([Option<Arc<str>>; Level::COUNT]);

impl LocationKeys {
    pub fn new(keys: [Option<Arc<str>>; Level::COUNT]) -> Self { Self(keys) }

    #[inline]
    pub fn get(&self, level: Level) -> Option<&Arc<str>> {
        self.0[level.index()].as_ref()
    }
}
