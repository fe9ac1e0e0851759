//! Terminal renderers for the cubeclock cube.
//!
//! Renderers turn a [`Scene`] into ratatui lines sized to the drawing area.
//! Two views are provided: an isometric corner view that tilts with the
//! minute, and a flat side-by-side view of the three faces.

mod canvas;
mod color;
mod flat;
mod isometric;
mod renderer;

pub use color::sticker_color;
pub use flat::FlatRenderer;
pub use isometric::IsometricRenderer;
pub use renderer::{Renderer, Scene, renderer_for};
