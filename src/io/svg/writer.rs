//! Low-level SVG markup for scene previews.

use std::io::Write;

use anyhow::Result;
use geo::{Coord, Rect};

/// Canvas of a preview and the lon/lat window it shows.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub width: f64,
    pub height: f64,
    /// Top-left corner of the plotting area in pixels.
    pub origin: Coord<f64>,
    /// Pixels per degree, equal on both axes.
    pub scale: f64,
    pub window: Rect<f64>,
}

impl Frame {
    /// Fit `window` into a canvas `width` pixels wide, leaving `margin` on every
    /// side and `header` extra pixels on top.
    pub(crate) fn fit(window: Rect<f64>, width: f64, margin: f64, header: f64) -> Self {
        let scale = (width - 2.0 * margin) / window.width();
        Self {
            width,
            height: window.height() * scale + header + 2.0 * margin,
            origin: Coord { x: margin, y: margin + header },
            scale,
            window,
        }
    }

    /// lon/lat -> pixel coords (Y down).
    #[inline]
    pub(crate) fn project(&self, lon: f64, lat: f64) -> Coord<f64> {
        Coord {
            x: self.origin.x + (lon - self.window.min().x) * self.scale,
            y: self.origin.y + (self.window.max().y - lat) * self.scale,
        }
    }
}

/// XML declaration, the opening `<svg>` tag and the background.
/// The lon/lat window is recorded as data attributes so a viewer can invert the projection.
pub(crate) fn write_svg_open<W: Write>(writer: &mut W, frame: &Frame, label: &str) -> Result<()> {
    let Frame { width, height, window, scale, .. } = *frame;
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.2} {height:.2}" role="img" aria-label="{label}" data-west="{west}" data-east="{east}" data-south="{south}" data-north="{north}" data-px-per-deg="{scale}">"#,
        label = escape_xml(label),
        west = window.min().x,
        east = window.max().x,
        south = window.min().y,
        north = window.max().y,
    )?;
    writeln!(writer, r##"<rect class="base" width="100%" height="100%"/>"##)?;
    Ok(())
}

pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs><style>
    .base {{ fill: #f3f4f6; }}
    .site {{ stroke: #111827; stroke-width: 0.5; fill-opacity: 0.85; }}
    .title {{ font: 16px sans-serif; fill: #111827; }}
    .title.empty {{ fill: #6b7280; font-style: italic; }}
</style></defs>"##)?;
    Ok(())
}

pub(crate) fn write_svg_close<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for use in SVG element content and attributes.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_projects_corners() {
        let window = Rect::new(Coord { x: 100.0, y: 13.0 }, Coord { x: 101.0, y: 14.0 });
        let frame = Frame::fit(window, 120.0, 10.0, 20.0);
        assert_eq!(frame.scale, 100.0);
        assert_eq!(frame.height, 140.0);
        assert_eq!(frame.project(100.0, 14.0), Coord { x: 10.0, y: 30.0 });
        assert_eq!(frame.project(101.0, 13.0), Coord { x: 110.0, y: 130.0 });
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("A & <B>"), "A &amp; &lt;B&gt;");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
