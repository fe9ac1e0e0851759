use cubeclock_core::{CubeView, FaceState};
use cubeclock_engine::{FrameMotion, glow};
use ratatui::text::Line;

use crate::flat::FlatRenderer;
use crate::isometric::IsometricRenderer;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Sticker colours to draw.
    pub state: FaceState,
    /// Tilt and scan position for this frame.
    pub motion: FrameMotion,
    /// Apply the scanning highlight.
    pub scan_highlight: bool,
    /// Apply the minute tilt (ignored by views that cannot tilt).
    pub rotation: bool,
}

impl Scene {
    /// Brightness multiplier for the sticker at `row`, `col`.
    pub fn glow(&self, row: usize, col: usize) -> f32 {
        if self.scan_highlight {
            glow(row, col, self.motion.scan)
        } else {
            1.0
        }
    }
}

/// Draws a [`Scene`] into a `width` x `height` block of terminal cells.
pub trait Renderer: std::fmt::Debug {
    /// Render exactly `height` lines, each `width` cells wide.
    fn render(&self, scene: &Scene, width: u16, height: u16) -> Vec<Line<'static>>;
}

/// Renderer for the given view.
pub fn renderer_for(view: CubeView) -> Box<dyn Renderer> {
    match view {
        CubeView::Isometric => Box::new(IsometricRenderer::default()),
        CubeView::Flat => Box::new(FlatRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            state: FaceState::solved(),
            motion: FrameMotion {
                rotation: 0.3,
                scan: 0.5,
            },
            scan_highlight: true,
            rotation: true,
        }
    }

    #[test]
    fn test_every_view_fills_the_area() {
        for view in [CubeView::Isometric, CubeView::Flat] {
            let lines = renderer_for(view).render(&scene(), 60, 20);
            assert_eq!(lines.len(), 20, "{view:?}");
            assert!(lines.iter().all(|line| line.width() == 60), "{view:?}");
        }
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        for view in [CubeView::Isometric, CubeView::Flat] {
            let renderer = renderer_for(view);
            assert!(renderer.render(&scene(), 0, 0).is_empty());
            assert_eq!(renderer.render(&scene(), 1, 1).len(), 1);
            assert_eq!(renderer.render(&scene(), 0, 3).len(), 3);
        }
    }

    #[test]
    fn test_glow_respects_toggle() {
        let mut scene = scene();
        assert!(scene.glow(1, 1) > 1.0);
        scene.scan_highlight = false;
        assert_eq!(scene.glow(1, 1), 1.0);
    }
}
