//! Board rendering for the flip gomoku GUI

use crate::board::Board;
use crate::session::TraceEntry;
use crate::{Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What one frame of the board should show
pub struct BoardFrame<'a> {
    /// The board being displayed (declared or authoritative)
    pub board: &'a Board,
    /// Occupancy for click validation; always the authoritative board
    pub occupancy: &'a Board,
    pub last_move: Option<TraceEntry>,
    pub winning_line: Option<[Pos; 5]>,
    pub current_turn: Stone,
    /// Clicks are ignored unless a game is running
    pub accepts_moves: bool,
}

/// Board view handles rendering and input for the game board.
/// Screen columns follow `x`, screen rows follow `y`.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);

        for (pos, stone) in frame.board.occupied() {
            self.draw_stone(&painter, pos, stone);
        }

        if let Some(last) = frame.last_move {
            self.draw_last_move_marker(&painter, last);
        }

        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked_pos = None;
        if frame.accepts_moves {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = frame.occupancy.is_empty(board_pos);
                self.draw_hover_preview(&painter, board_pos, frame.current_turn, is_valid);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters for x (A-O), row numbers for y (1-15)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let letter = (b'A' + i as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + i as f32 * self.cell_size;
            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let y = self.board_rect.min.y + BOARD_MARGIN + i as f32 * self.cell_size;
            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, format!("{}", i + 1), font.clone(), GRID_LINE);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
        }
    }

    /// Small square on the most recent stone, contrasting with its color
    fn draw_last_move_marker(&self, painter: &Painter, last: TraceEntry) {
        let center = self.board_to_screen(last.pos);
        let half = self.cell_size * LAST_MOVE_MARKER_RATIO;
        let color = match last.stone {
            Stone::Black => LAST_MOVE_ON_BLACK,
            Stone::White => LAST_MOVE_ON_WHITE,
        };
        let rect = Rect::from_center_size(center, Vec2::splat(half * 2.0));
        painter.rect_filled(rect, CornerRadius::ZERO, color);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(line[0]), self.board_to_screen(line[4])], stroke);

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        Pos::try_new(x, y)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 30.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(500.0)),
        }
    }

    #[test]
    fn test_screen_board_roundtrip_at_intersections() {
        let view = view();
        for pos in [Pos::new(0, 0), Pos::new(7, 3), Pos::new(14, 14)] {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_click_snaps_to_nearest_intersection() {
        let view = view();
        let near = view.board_to_screen(Pos::new(4, 9)) + Vec2::new(12.0, -12.0);
        assert_eq!(view.screen_to_board(near), Some(Pos::new(4, 9)));
    }

    #[test]
    fn test_click_outside_grid() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
    }
}
