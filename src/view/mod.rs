mod color;
mod render;
mod scale;
mod scene;

pub use color::{Rgb, viridis};
pub use render::{Renderer, render};
pub use scale::{ColorScale, LinearScale, SizeScale};
pub use scene::{BaseLayer, MapView, Scene, ScenePoint, Tooltip, TooltipEntry};
