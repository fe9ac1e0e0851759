//! Core types for the cubeclock terminal clock.
//!
//! The cube is modelled as its three visible faces (top, front and right),
//! each a 3x3 grid of stickers drawn from a fixed seven colour palette.

mod color;
mod face;
mod time;
mod view;

pub use color::FaceColor;
pub use face::{FACE_COUNT, Face, FaceState, STICKERS_PER_FACE, TOTAL_STICKERS};
pub use time::TimeSample;
pub use view::CubeView;
