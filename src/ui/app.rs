//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardScene, BoardView, ClickMode};
use super::game_state::{GameMode, GameState, Tool};
use super::theme::*;
use crate::config::Difficulty;
use crate::eval::win_probability;
use crate::game::{Action, Outcome};
use crate::Player;

/// Ranked candidates shown in the debug card
const SHOWN_CANDIDATES: usize = 5;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default(), Difficulty::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

fn stone_symbol(player: Player) -> &'static str {
    match player {
        Player::Black => "●",
        Player::White => "○",
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.state.difficulty);
    }

    fn report(&mut self, result: Result<(), String>) {
        if let Err(msg) = result {
            self.state.message = Some(msg);
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for level in Difficulty::ALL {
                        if ui.radio(self.state.difficulty == level, level.name()).clicked() {
                            self.state.difficulty = level;
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(format!("{mode_text} | {}", self.state.difficulty.name()));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);
                    self.render_turn_card(ui);
                    ui.add_space(10.0);
                    self.render_timer_card(ui);
                    ui.add_space(10.0);
                    self.render_actions_card(ui);

                    if self.show_debug {
                        ui.add_space(10.0);
                        self.render_debug_card(ui);
                    }

                    if let Some(result) = self.state.game.result() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui, result);
                    }

                    if let Some(msg) = self.state.message.clone() {
                        ui.add_space(10.0);
                        self.render_message_card(ui, &msg);
                    }
                });
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (accent, stone_color) = match turn {
                Player::Black => (egui::Color32::from_rgb(70, 70, 75), TEXT),
                Player::White => (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_symbol(turn),
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", CAUTION)
                    } else if self.state.game.is_over() {
                        ("Game Over", WIN_LINE)
                    } else if self.state.game.double_move_pending() {
                        ("Double move armed", CAUTION)
                    } else {
                        ("Your turn", GOOD)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_FAINT));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.3 {
                    GOOD
                } else if secs < 0.5 {
                    CAUTION
                } else {
                    ALERT
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_DIM),
                );
            }
        });
    }

    fn action_button(ui: &mut egui::Ui, label: &str, armed: bool) -> bool {
        let fill = if armed {
            egui::Color32::from_rgb(120, 80, 30)
        } else {
            egui::Color32::from_rgb(50, 53, 58)
        };
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(label).size(12.0).color(TEXT)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_FAINT));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "Undo", false) {
                    self.state.undo();
                }
                if Self::action_button(ui, "New", false) {
                    self.state.reset();
                }
                if self.state.mode == GameMode::PvP && Self::action_button(ui, "Hint", false) {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(6.0);
            let tool = self.state.tool;
            ui.horizontal(|ui| {
                if Self::action_button(ui, "Bomb", tool == Some(Tool::Bomb)) {
                    self.state.tool = (tool != Some(Tool::Bomb)).then_some(Tool::Bomb);
                }
                let swap_armed = matches!(tool, Some(Tool::Swap(_)));
                if Self::action_button(ui, "Swap", swap_armed) {
                    self.state.tool = (!swap_armed).then_some(Tool::Swap(None));
                }
                if Self::action_button(ui, "Double", self.state.game.double_move_pending()) {
                    let result = self.state.try_action(Action::DoubleMove);
                    self.report(result);
                }
                if Self::action_button(ui, "Veto", false) {
                    let result = self.state.try_action(Action::Veto);
                    self.report(result);
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.move_count()))
                    .size(11.0)
                    .color(TEXT_DIM),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_FAINT));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_FAINT));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{:?}", result.kind)).size(11.0).strong().color(GOOD));
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_DIM));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_DIM));
                            ui.label(
                                RichText::new(format!("{} nodes, depth {}", result.nodes, result.depth))
                                    .size(10.0)
                                    .color(TEXT_FAINT),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(WIN_LINE));
                }

                let probability = win_probability(result.score);
                ui.add_space(4.0);
                ui.add(egui::ProgressBar::new(probability as f32).text(format!("AI win chance {:.0}%", probability * 100.0)));

                if !result.ranked.is_empty() {
                    ui.add_space(6.0);
                    for candidate in result.ranked.iter().take(SHOWN_CANDIDATES) {
                        ui.label(
                            RichText::new(format!("{:>4} {:>8}  {}", candidate.pos, candidate.priority, candidate.reason()))
                                .size(10.0)
                                .monospace()
                                .color(TEXT_DIM),
                        );
                    }
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: Outcome) {
        let headline = match result {
            Outcome::Won { winner, .. } => format!("{} {} WINS!", stone_symbol(winner), winner.name().to_uppercase()),
            Outcome::Draw => "DRAW".to_string(),
            Outcome::Continue { .. } => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT));
                    ui.add_space(12.0);
                    if Self::action_button(ui, "New Game", false) {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let selected = match self.state.tool {
                Some(Tool::Swap(first)) => first,
                _ => None,
            };
            let scene = BoardScene {
                board: self.state.game.board(),
                turn: self.state.current_turn(),
                rule: self.state.game.rule(),
                last_move: self.state.game.last_move(),
                suggested_move: self.state.suggested_move,
                winning_line: self.state.winning_line(),
                selected,
                mode: if self.state.tool.is_some() { ClickMode::Target } else { ClickMode::Place },
                interactive: !self.state.game.is_over() && self.state.is_human_turn() && !self.state.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, &scene) {
                let result = self.state.click(pos);
                self.report(result);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.tool = None;
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.game.is_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || !self.state.game.is_over() {
            ctx.request_repaint();
        }
    }
}
