//! How the cube is drawn.

use serde::Deserialize;

/// Cube presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeView {
    /// Three faces meeting at a corner, tilted with the minute.
    #[default]
    Isometric,
    /// Three faces side by side.
    Flat,
}

impl CubeView {
    /// Cycle to the next view.
    pub fn next(&self) -> Self {
        match self {
            CubeView::Isometric => CubeView::Flat,
            CubeView::Flat => CubeView::Isometric,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CubeView::Isometric => "isometric",
            CubeView::Flat => "flat",
        }
    }
}
