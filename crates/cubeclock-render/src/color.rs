//! Sticker colour conversion.

use cubeclock_core::FaceColor;
use ratatui::style::Color;

/// Terminal colour for a sticker, brightened by `glow` (1.0 = unchanged).
///
/// Channels saturate at 255.
pub fn sticker_color(color: FaceColor, glow: f32) -> Color {
    let (r, g, b) = color.rgb();
    let glow = glow.max(0.0);
    Color::Rgb(scale(r, glow), scale(g, glow), scale(b, glow))
}

fn scale(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).round().min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlit_sticker_keeps_palette_color() {
        assert_eq!(
            sticker_color(FaceColor::Blue, 1.0),
            Color::Rgb(70, 140, 235)
        );
    }

    #[test]
    fn test_glow_saturates() {
        assert_eq!(
            sticker_color(FaceColor::Yellow, 1.4),
            Color::Rgb(255, 255, 84)
        );
    }
}
