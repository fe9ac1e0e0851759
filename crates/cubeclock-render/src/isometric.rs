//! Isometric corner view.
//!
//! Stickers are laid out in a flat plane, projected with an isometric basis,
//! then rasterised into terminal cells by testing each cell centre against
//! every sticker quad. Terminal cells are roughly twice as tall as they are
//! wide, so vertical distances are doubled when mapping cells back into the
//! plane.

use cubeclock_core::{Face, STICKERS_PER_FACE};
use ratatui::text::Line;

use crate::canvas::CellGrid;
use crate::color::sticker_color;
use crate::renderer::{Renderer, Scene};

/// Sticker edge length in plane units.
const STICKER: f32 = 34.0;
/// Gap between stickers in plane units.
const GAP: f32 = 4.0;
/// Edge length of a whole face.
const FACE: f32 = STICKER * 3.0 + GAP * 2.0;
/// Fraction of the tilt angle actually applied.
const TILT_FACTOR: f32 = 0.25;
/// Height to width ratio of a terminal cell.
const CELL_ASPECT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

impl Point {
    const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn offset(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Rotate by `angle` radians around `center`.
    fn rotate_around(self, center: Point, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }
}

/// Project a plane point with the isometric basis (1, 0.5) and (-1, 0.5).
fn iso(x: f32, y: f32) -> Point {
    Point::new(x - y, (x + y) * 0.5)
}

/// One projected sticker.
#[derive(Debug, Clone, Copy)]
struct Quad {
    face: Face,
    row: usize,
    col: usize,
    corners: [Point; 4],
}

impl Quad {
    /// Whether `p` lies inside (or on the edge of) this convex quad.
    fn contains(&self, p: Point) -> bool {
        let mut sign = 0.0f32;
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % 4];
            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if cross != 0.0 {
                if sign != 0.0 && cross.signum() != sign {
                    return false;
                }
                sign = cross.signum();
            }
        }
        true
    }
}

/// Where each face's grid starts, in projected space.
fn face_origin(face: Face) -> Point {
    match face {
        Face::Front => iso(0.0, 0.0),
        Face::Right => iso(FACE, 0.0),
        Face::Top => iso(0.0, -FACE),
    }
}

/// All sticker quads in paint order: front, right, then top.
fn build_quads() -> Vec<Quad> {
    let corner_offsets = [
        iso(0.0, 0.0),
        iso(STICKER, 0.0),
        iso(STICKER, STICKER),
        iso(0.0, STICKER),
    ];

    [Face::Front, Face::Right, Face::Top]
        .into_iter()
        .flat_map(|face| {
            let origin = face_origin(face);
            (0..STICKERS_PER_FACE).map(move |idx| {
                let (row, col) = (idx / 3, idx % 3);
                let base = origin.offset(iso(
                    col as f32 * (STICKER + GAP),
                    row as f32 * (STICKER + GAP),
                ));
                Quad {
                    face,
                    row,
                    col,
                    corners: corner_offsets.map(|offset| base.offset(offset)),
                }
            })
        })
        .collect()
}

/// Three faces meeting at a corner, tilted with the minute.
#[derive(Debug, Clone)]
pub struct IsometricRenderer {
    quads: Vec<Quad>,
    /// Centre of the cube's bounding box.
    center: Point,
    /// Largest distance from the centre to any corner.
    radius: f32,
}

impl Default for IsometricRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IsometricRenderer {
    pub fn new() -> Self {
        let quads = build_quads();

        let corners = quads.iter().flat_map(|q| q.corners);
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for p in corners.clone() {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

        // Size by radius so the cube keeps its scale as it tilts.
        let radius = corners
            .map(|p| ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt())
            .fold(0.0f32, f32::max);

        Self {
            quads,
            center,
            radius,
        }
    }

    /// Topmost quad under plane point `p`.
    fn quad_at(&self, p: Point) -> Option<&Quad> {
        self.quads.iter().rev().find(|quad| quad.contains(p))
    }
}

impl Renderer for IsometricRenderer {
    fn render(&self, scene: &Scene, width: u16, height: u16) -> Vec<Line<'static>> {
        let mut grid = CellGrid::new(width, height);
        if width == 0 || height == 0 || self.radius <= 0.0 {
            return grid.into_lines();
        }

        // Cells per plane unit, horizontally.
        let scale = (width as f32 / (2.0 * self.radius))
            .min(height as f32 * CELL_ASPECT / (2.0 * self.radius))
            * 0.95;
        let angle = if scene.rotation {
            scene.motion.rotation * TILT_FACTOR
        } else {
            0.0
        };

        for y in 0..height {
            for x in 0..width {
                let screen = Point::new(
                    self.center.x + (x as f32 + 0.5 - width as f32 / 2.0) / scale,
                    self.center.y
                        + (y as f32 + 0.5 - height as f32 / 2.0) * CELL_ASPECT / scale,
                );
                // Undo the tilt instead of rotating every quad.
                let plane = screen.rotate_around(self.center, -angle);
                if let Some(quad) = self.quad_at(plane) {
                    let color = scene.state.sticker(quad.face, quad.row * 3 + quad.col);
                    grid.paint(x, y, sticker_color(color, scene.glow(quad.row, quad.col)));
                }
            }
        }

        grid.into_lines()
    }
}
