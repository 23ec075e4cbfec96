//! Palette and board geometry

use egui::Color32;

// Board
pub const WOOD: Color32 = Color32::from_rgb(214, 178, 124);
pub const INK: Color32 = Color32::from_rgb(58, 38, 18);
pub const LINE_WIDTH: f32 = 1.0;
pub const MARGIN: f32 = 40.0;
/// Hoshi sit on every crossing of these lines
pub const HOSHI_LINES: [u8; 3] = [3, 9, 15];
pub const HOSHI_RADIUS: f32 = 4.0;

// Stones, as a fraction of cell size
pub const STONE_RATIO: f32 = 0.45;
pub const BLACK_FILL: Color32 = Color32::from_rgb(22, 22, 28);
pub const BLACK_GLOSS: Color32 = Color32::from_rgb(72, 72, 84);
pub const WHITE_FILL: Color32 = Color32::from_rgb(248, 248, 250);
pub const WHITE_RIM: Color32 = Color32::from_rgb(188, 188, 196);

// Cell markers
pub const LAST_MOVE: Color32 = Color32::from_rgb(226, 64, 56);
pub const LAST_MOVE_RADIUS: f32 = 5.0;
pub const WIN_LINE: Color32 = Color32::from_rgb(60, 214, 72);
pub const CRATER: Color32 = Color32::from_rgb(96, 68, 44);
pub const VETO_CROSS: Color32 = Color32::from_rgb(198, 38, 38);
pub const TOOL_RING: Color32 = Color32::from_rgb(250, 138, 10);
pub const HOVER_OK: Color32 = Color32::from_rgba_premultiplied(31, 31, 31, 100);
pub const HOVER_FORBIDDEN: Color32 = Color32::from_rgba_premultiplied(100, 20, 20, 100);

// Side panel
pub const TEXT: Color32 = Color32::from_rgb(238, 238, 244);
pub const TEXT_DIM: Color32 = Color32::from_rgb(158, 164, 176);
pub const TEXT_FAINT: Color32 = Color32::from_rgb(118, 124, 136);
pub const GOOD: Color32 = Color32::from_rgb(84, 198, 122);
pub const CAUTION: Color32 = Color32::from_rgb(250, 178, 52);
pub const ALERT: Color32 = Color32::from_rgb(250, 72, 72);
