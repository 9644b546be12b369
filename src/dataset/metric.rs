use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Numeric columns carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    NetAdd,
    PotentialScore,
    PortUtilization,
    MarketShareTrue,
    MarketShareAis,
    MarketShare3bb,
    MarketShareNt,
    Aging,
    PortUse,
}

impl Metric {
    pub const COUNT: usize = 9;

    pub fn order() -> [Metric; Metric::COUNT] {
        [
            Metric::NetAdd,
            Metric::PotentialScore,
            Metric::PortUtilization,
            Metric::MarketShareTrue,
            Metric::MarketShareAis,
            Metric::MarketShare3bb,
            Metric::MarketShareNt,
            Metric::Aging,
            Metric::PortUse,
        ]
    }

    /// Metrics exposed as range filters, in control order.
    pub fn ranged() -> [Metric; 5] {
        [
            Metric::NetAdd,
            Metric::PotentialScore,
            Metric::PortUtilization,
            Metric::MarketShareTrue,
            Metric::Aging,
        ]
    }

    #[inline]
    pub fn index(self) -> usize { self as usize }

    pub fn to_str(&self) -> &'static str {
        match self {
            Metric::NetAdd => "net_add",
            Metric::PotentialScore => "potential_score",
            Metric::PortUtilization => "port_utilization",
            Metric::MarketShareTrue => "market_share_true",
            Metric::MarketShareAis => "market_share_ais",
            Metric::MarketShare3bb => "market_share_3bb",
            Metric::MarketShareNt => "market_share_nt",
            Metric::Aging => "aging",
            Metric::PortUse => "port_use",
        }
    }

    /// Human-readable label for controls and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::NetAdd => "Net Add",
            Metric::PotentialScore => "Potential Score",
            Metric::PortUtilization => "% Port Utilize",
            Metric::MarketShareTrue => "Market Share True (%)",
            Metric::MarketShareAis => "Market Share AIS (%)",
            Metric::MarketShare3bb => "Market Share 3BB (%)",
            Metric::MarketShareNt => "Market Share NT (%)",
            Metric::Aging => "L2 Aging (Months)",
            Metric::PortUse => "Port Use",
        }
    }

    /// Required metrics drive range filters or scene encodings.
    pub fn is_required(self) -> bool {
        !matches!(self, Metric::MarketShareAis | Metric::MarketShare3bb | Metric::MarketShareNt)
    }

    /// Percentages are bounded to [0, 100] on their controls.
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            Metric::PortUtilization
                | Metric::MarketShareTrue
                | Metric::MarketShareAis
                | Metric::MarketShare3bb
                | Metric::MarketShareNt
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Metric::order()
            .into_iter()
            .find(|metric| metric.to_str() == key)
            .ok_or_else(|| format!("unknown metric '{s}'"))
    }
}

/// Closed numeric interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self { Self { lo, hi } }

    /// Inclusive at both ends. An inverted interval contains nothing.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    #[inline]
    pub fn span(&self) -> f64 { self.hi - self.lo }

    /// Smallest interval covering `values`, or `None` if there are none.
    pub fn enclosing(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Interval::new(v, v)),
            Some(Interval { lo, hi }) => Some(Interval::new(lo.min(v), hi.max(v))),
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// One value per [`Metric`], already normalized to a finite number or zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricValues([f64; Metric::COUNT]);

impl MetricValues {
    pub fn new(values: [f64; Metric::COUNT]) -> Self { Self(values) }

    #[inline]
    pub fn get(&self, metric: Metric) -> f64 { self.0[metric.index()] }
}

/// Coerce a raw cell to a number. Empty, unparseable and non-finite cells become zero.
///
/// This conflates "no data" with "value zero" (e.g. for market share) and is kept
/// for compatibility with the dashboards built on the same tables.
pub fn coerce_numeric(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
