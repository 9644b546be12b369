//! SVG format writing operations for scene previews.

mod scene;
mod writer;

pub(crate) use scene::*;
pub(crate) use writer::*;
