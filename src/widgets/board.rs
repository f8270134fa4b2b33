//! Puzzle board widget.

use crate::puzzle::Board;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Columns per tile, including the gap
const TILE_WIDTH: u16 = 6;
/// Rows per tile, including the gap
const TILE_HEIGHT: u16 = 3;

pub struct BoardWidget<'a> {
    board: &'a Board,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Outer size of the board including its border
    pub fn size(board: &Board) -> (u16, u16) {
        let n = board.size() as u16;
        (n * TILE_WIDTH + 1, n * TILE_HEIGHT + 1)
    }
}

impl<'a> Widget for BoardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let (width, height) = Self::size(self.board);
        let outer = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width.min(area.width),
            height.min(area.height),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(false))
            .border_style(t.border_style());
        let inner = block.inner(outer);
        block.render(outer, buf);

        let n = self.board.size();
        for row in 0..n {
            for col in 0..n {
                let tile = self.board.tile_at(row, col);
                if tile == 0 {
                    continue;
                }
                let x = inner.x + col as u16 * TILE_WIDTH;
                let y = inner.y + row as u16 * TILE_HEIGHT;
                let cell = Rect::new(x, y, TILE_WIDTH - 1, TILE_HEIGHT - 1).intersection(inner);
                if cell.is_empty() {
                    continue;
                }
                let style = t.tile_style(self.board.in_place(row, col));
                Block::default().style(style).render(cell, buf);
                Paragraph::new(tile.to_string())
                    .style(style)
                    .alignment(Alignment::Center)
                    .render(Rect::new(cell.x, cell.y, cell.width, 1), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_all_tiles() {
        let board = Board::solved(3).unwrap();
        let (w, h) = BoardWidget::size(&board);
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&board).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        for n in 1..=8 {
            assert!(text.contains(&n.to_string()));
        }
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let board = Board::solved(5).unwrap();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&board).render(area, &mut buf);
    }
}
