//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::Cell;
use crate::rules::ForbiddenRule;
use crate::{Board, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// What a click on the board does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    /// Place a stone on an empty, allowed cell
    Place,
    /// Pick an existing stone (bomb or swap)
    Target,
}

/// Everything the board needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub turn: Player,
    pub rule: ForbiddenRule,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    pub selected: Option<Pos>,
    pub mode: ClickMode,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
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
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), WOOD);
        self.draw_grid(&painter);
        self.draw_hoshi(&painter);
        self.draw_coordinates(&painter);
        self.draw_cells(&painter, scene.board);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(pos) = scene.suggested_move {
            self.draw_suggestion(&painter, pos, scene.turn);
        }
        if let Some(pos) = scene.selected {
            self.draw_target_ring(&painter, pos);
        }

        if !scene.interactive {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = match scene.mode {
            ClickMode::Place => scene.rule.is_valid_move(scene.board, board_pos, scene.turn),
            ClickMode::Target => matches!(scene.board.get(board_pos), Cell::Stone(_)),
        };

        match scene.mode {
            ClickMode::Place => self.draw_hover_preview(&painter, board_pos, scene.turn, is_valid),
            ClickMode::Target if is_valid => self.draw_target_ring(&painter, board_pos),
            ClickMode::Target => {}
        }

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw the 19x19 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(LINE_WIDTH, INK);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_hoshi(&self, painter: &Painter) {
        for row in HOSHI_LINES {
            for col in HOSHI_LINES {
                painter.circle_filled(self.board_to_screen(Pos::new(row, col)), HOSHI_RADIUS, INK);
            }
        }
    }

    /// Draw coordinate labels (A-S, 19-1 top to bottom)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + MARGIN + col as f32 * self.cell_size;
            for y in [self.board_rect.min.y + 8.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), INK);
            }
        }

        for row in 0..BOARD_SIZE {
            let label = (BOARD_SIZE - row).to_string();
            let y = self.board_rect.min.y + MARGIN + row as f32 * self.cell_size;
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), INK);
            }
        }
    }

    /// Draw stones and markers
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied().iter_ones() {
            match board.get(pos) {
                Cell::Stone(player) => self.draw_stone(painter, pos, player),
                Cell::Obstacle => self.draw_obstacle(painter, pos),
                Cell::Blocked => self.draw_blocked(painter, pos),
                Cell::Empty => {}
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_FILL);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_GLOSS);
            }
            Player::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_FILL);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_RIM));
            }
        }
    }

    /// Scorched square left by a bomb
    fn draw_obstacle(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * STONE_RATIO * 0.8;
        let rect = Rect::from_center_size(center, Vec2::splat(half * 2.0));
        painter.rect_filled(rect, CornerRadius::same(3), CRATER);
        painter.rect_stroke(rect, CornerRadius::same(3), Stroke::new(1.5, INK), egui::StrokeKind::Inside);
    }

    /// Red cross on a vetoed cell
    fn draw_blocked(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let d = self.cell_size * STONE_RATIO * 0.7;
        let stroke = Stroke::new(3.0, VETO_CROSS);
        painter.line_segment([center + Vec2::new(-d, -d), center + Vec2::new(d, d)], stroke);
        painter.line_segment([center + Vec2::new(-d, d), center + Vec2::new(d, -d)], stroke);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_RADIUS, LAST_MOVE);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_LINE);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }

        let radius = self.cell_size * STONE_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_target_ring(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size * STONE_RATIO + 2.0;
        painter.circle_stroke(self.board_to_screen(pos), radius, Stroke::new(3.0, TOOL_RING));
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RATIO;

        let (fill, text) = match turn {
            Player::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_FILL),
            Player::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_FILL),
        };

        painter.circle_filled(center, radius, fill);
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), text);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => HOVER_FORBIDDEN,
            (true, Player::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Player::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        };

        painter.circle_filled(center, radius, color);
        if !is_valid {
            painter.circle_stroke(center, radius, Stroke::new(1.0, HOVER_OK));
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
