//! Sticker palette.

/// A sticker colour from the classic cube palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceColor {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    /// Near-black used behind the cube.
    Background,
}

impl FaceColor {
    /// Every palette entry.
    pub const ALL: [FaceColor; 7] = [
        FaceColor::White,
        FaceColor::Yellow,
        FaceColor::Red,
        FaceColor::Orange,
        FaceColor::Blue,
        FaceColor::Green,
        FaceColor::Background,
    ];

    /// RGB components of this colour.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            FaceColor::White => (245, 245, 245),
            FaceColor::Yellow => (245, 210, 60),
            FaceColor::Red => (235, 70, 70),
            FaceColor::Orange => (245, 140, 50),
            FaceColor::Blue => (70, 140, 235),
            FaceColor::Green => (80, 200, 120),
            FaceColor::Background => (20, 22, 26),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_seven_distinct_colors() {
        let mut rgbs: Vec<_> = FaceColor::ALL.iter().map(|c| c.rgb()).collect();
        rgbs.sort();
        rgbs.dedup();
        assert_eq!(rgbs.len(), 7);
    }
}
