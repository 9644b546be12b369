//! Continuous color ramp for scene markers.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const NEUTRAL: Rgb = Rgb { r: 150, g: 150, b: 150 };

/// Viridis stops, evenly spaced over [0, 1].
const VIRIDIS: &[Rgb] = &[
    Rgb { r:  68, g:   1, b:  84 },
    Rgb { r:  72, g:  40, b: 120 },
    Rgb { r:  62, g:  73, b: 137 },
    Rgb { r:  49, g: 104, b: 142 },
    Rgb { r:  38, g: 130, b: 142 },
    Rgb { r:  31, g: 158, b: 137 },
    Rgb { r:  53, g: 183, b: 121 },
    Rgb { r: 110, g: 206, b:  88 },
    Rgb { r: 181, g: 222, b:  43 },
    Rgb { r: 253, g: 231, b:  37 },
];

pub const VIRIDIS_NAME: &str = "Viridis";

/// Viridis ramp for `t` in [0.0, 1.0], linearly interpolated between stops.
pub fn viridis(t: f64) -> Rgb {
    // Handle NaN / infinities: fall back to neutral gray.
    if !t.is_finite() { return NEUTRAL }

    let x = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f64;
    let lower = x.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS.len() - 1);
    let frac = x - lower as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (VIRIDIS[lower], VIRIDIS[upper]);
    Rgb { r: lerp(a.r, b.r), g: lerp(a.g, b.g), b: lerp(a.b, b.b) }
}
