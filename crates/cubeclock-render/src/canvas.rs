//! Cell grid that renderers paint into.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Block used for painted cells.
const FILL: &str = "█";

/// Fixed-size grid of optionally coloured cells.
#[derive(Debug, Clone)]
pub(crate) struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<Color>>,
}

impl CellGrid {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Paint one cell. Out-of-bounds writes are ignored.
    pub(crate) fn paint(&mut self, x: u16, y: u16, color: Color) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = Some(color);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, x: u16, y: u16) -> Option<Color> {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Convert to one line per row.
    pub(crate) fn into_lines(self) -> Vec<Line<'static>> {
        if self.width == 0 {
            return vec![Line::default(); self.height as usize];
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(color) => Span::styled(FILL, Style::new().fg(*color)),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
