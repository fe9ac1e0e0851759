//! Flat view: the three faces side by side.

use cubeclock_core::{FACE_COUNT, Face, STICKERS_PER_FACE};
use ratatui::text::Line;

use crate::canvas::CellGrid;
use crate::color::sticker_color;
use crate::renderer::{Renderer, Scene};

/// Empty columns between stickers of one face.
const STICKER_GAP: u16 = 1;
/// Empty columns between faces.
const FACE_GAP: u16 = 3;

/// Draws Top, Front and Right as three 3x3 grids in a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatRenderer;

impl FlatRenderer {
    /// Sticker size in cells `(width, height)` that fits the area, if any.
    fn sticker_size(width: u16, height: u16) -> Option<(u16, u16)> {
        let fixed_w = FACE_COUNT as u16 * 2 * STICKER_GAP + (FACE_COUNT as u16 - 1) * FACE_GAP;
        let columns = FACE_COUNT as u16 * 3;
        // Stickers are twice as wide as tall to look square.
        let sticker_h = (width.checked_sub(fixed_w)? / (columns * 2)).min(height / 3);
        (sticker_h > 0).then_some((sticker_h * 2, sticker_h))
    }
}

impl Renderer for FlatRenderer {
    fn render(&self, scene: &Scene, width: u16, height: u16) -> Vec<Line<'static>> {
        let mut grid = CellGrid::new(width, height);
        let Some((sticker_w, sticker_h)) = Self::sticker_size(width, height) else {
            return grid.into_lines();
        };

        let face_w = 3 * sticker_w + 2 * STICKER_GAP;
        let total_w = FACE_COUNT as u16 * face_w + (FACE_COUNT as u16 - 1) * FACE_GAP;
        let total_h = 3 * sticker_h;
        let left = (width - total_w) / 2;
        let top = (height - total_h) / 2;

        for (face_idx, face) in Face::ALL.into_iter().enumerate() {
            let face_left = left + face_idx as u16 * (face_w + FACE_GAP);
            for idx in 0..STICKERS_PER_FACE {
                let (row, col) = (idx / 3, idx % 3);
                let color = sticker_color(scene.state.sticker(face, idx), scene.glow(row, col));
                let x0 = face_left + col as u16 * (sticker_w + STICKER_GAP);
                let y0 = top + row as u16 * sticker_h;
                for y in y0..y0 + sticker_h {
                    for x in x0..x0 + sticker_w {
                        grid.paint(x, y, color);
                    }
                }
            }
        }

        grid.into_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeclock_core::{FaceColor, FaceState};
    use cubeclock_engine::FrameMotion;

    #[test]
    fn test_sticker_size() {
        assert_eq!(FlatRenderer::sticker_size(0, 10), None);
        assert_eq!(FlatRenderer::sticker_size(20, 10), None);
        // 48 columns minus 12 of gaps leaves 4 columns for each of 9 stickers.
        assert_eq!(FlatRenderer::sticker_size(48, 30), Some((4, 2)));
        assert_eq!(FlatRenderer::sticker_size(200, 6), Some((4, 2)));
    }

    #[test]
    fn test_faces_in_order() {
        let scene = Scene {
            state: FaceState::solved(),
            motion: FrameMotion::default(),
            scan_highlight: false,
            rotation: false,
        };
        let lines = FlatRenderer.render(&scene, 48, 6);
        let colors: Vec<_> = lines[0]
            .spans
            .iter()
            .filter_map(|span| span.style.fg)
            .collect();
        assert_eq!(colors.first(), Some(&sticker_color(FaceColor::White, 1.0)));
        assert_eq!(colors.last(), Some(&sticker_color(FaceColor::Red, 1.0)));
        assert!(colors.contains(&sticker_color(FaceColor::Green, 1.0)));
    }
}
