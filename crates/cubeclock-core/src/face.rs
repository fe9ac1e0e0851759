//! Faces and per-face sticker grids.

use crate::color::FaceColor;

/// Stickers on one face (3x3, row-major).
pub const STICKERS_PER_FACE: usize = 9;

/// Number of visible faces.
pub const FACE_COUNT: usize = 3;

/// Total visible stickers.
pub const TOTAL_STICKERS: usize = STICKERS_PER_FACE * FACE_COUNT;

/// One of the three visible faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Top,
    Front,
    Right,
}

impl Face {
    /// Faces in their canonical order.
    pub const ALL: [Face; FACE_COUNT] = [Face::Top, Face::Front, Face::Right];

    /// Colour this face shows when the cube is solved.
    pub const fn target_color(self) -> FaceColor {
        match self {
            Face::Top => FaceColor::White,
            Face::Front => FaceColor::Green,
            Face::Right => FaceColor::Red,
        }
    }

    const fn index(self) -> usize {
        match self {
            Face::Top => 0,
            Face::Front => 1,
            Face::Right => 2,
        }
    }
}

/// Sticker colours of all three visible faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceState {
    faces: [[FaceColor; STICKERS_PER_FACE]; FACE_COUNT],
}

impl FaceState {
    /// The solved cube: every face uniformly its target colour.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [face.target_color(); STICKERS_PER_FACE]),
        }
    }

    /// Rebuild a state from stickers laid out face by face in [`Face::ALL`] order.
    pub fn from_flat(stickers: [FaceColor; TOTAL_STICKERS]) -> Self {
        let mut faces = [[FaceColor::Background; STICKERS_PER_FACE]; FACE_COUNT];
        for (i, color) in stickers.into_iter().enumerate() {
            faces[i / STICKERS_PER_FACE][i % STICKERS_PER_FACE] = color;
        }
        Self { faces }
    }

    /// All stickers laid out face by face in [`Face::ALL`] order.
    pub fn flatten(&self) -> [FaceColor; TOTAL_STICKERS] {
        let mut flat = [FaceColor::Background; TOTAL_STICKERS];
        for (i, slot) in flat.iter_mut().enumerate() {
            *slot = self.faces[i / STICKERS_PER_FACE][i % STICKERS_PER_FACE];
        }
        flat
    }

    /// The nine stickers of `face`.
    pub fn face(&self, face: Face) -> &[FaceColor; STICKERS_PER_FACE] {
        &self.faces[face.index()]
    }

    /// Colour of one sticker.
    ///
    /// # Panics
    /// Panics if `idx` is not below [`STICKERS_PER_FACE`].
    pub fn sticker(&self, face: Face, idx: usize) -> FaceColor {
        self.faces[face.index()][idx]
    }

    /// Overwrite one sticker.
    pub fn set(&mut self, face: Face, idx: usize, color: FaceColor) {
        self.faces[face.index()][idx] = color;
    }

    /// Positions whose sticker already shows its face's target colour.
    pub fn solved_positions(&self) -> Vec<(Face, usize)> {
        Face::ALL
            .into_iter()
            .flat_map(move |face| {
                self.face(face)
                    .iter()
                    .enumerate()
                    .filter(move |(_, color)| **color == face.target_color())
                    .map(move |(idx, _)| (face, idx))
            })
            .collect()
    }

    /// Whether every sticker matches its face's target colour.
    pub fn is_solved(&self) -> bool {
        self.solved_positions().len() == TOTAL_STICKERS
    }
}
