//! Main application for the flip gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::{GameState, Status};
use super::theme::*;
use crate::{BoardView as Side, Stone};

/// Main flip gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game...").clicked() {
                        self.state.show_new_game = true;
                        ui.close_menu();
                    }
                    if ui.add_enabled(self.state.accepts_moves(), egui::Button::new("Resign")).clicked() {
                        self.state.resign();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let side = match self.state.view {
                        Side::Declared => "Declared game",
                        Side::Authoritative => "Real game",
                    };
                    ui.label(side);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("FLIP GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(WARNING));
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Stone to move, on a yellow background while sitting on the winning move
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.session.current_turn();
            let background = if self.state.session.pointer_at_win() { TURN_AT_WIN } else { TURN_BG };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(6), background);
                let fill = match turn {
                    Stone::Black => BLACK_STONE,
                    Stone::White => WHITE_STONE,
                };
                ui.painter().circle_filled(rect.center(), 20.0, fill);

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("to move").size(12.0).color(TEXT_MUTED));
                });
            });
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let status = match self.state.status {
                Status::Idle => "Press New Game to start.".to_string(),
                Status::Ongoing => "Game ongoing...".to_string(),
                Status::Won(winner) => format!("Game ended.\nWinner: {}", winner),
                Status::Resigned(_) => "Game ended. Resigned.".to_string(),
            };
            ui.label(RichText::new(status).size(14.0).color(TEXT_PRIMARY));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Flip probability: {}%", (self.state.session.flip_probability() * 100.0).round()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );

            if self.state.open_four && self.state.accepts_moves() {
                ui.add_space(6.0);
                ui.label(RichText::new("Four in a row!").size(14.0).strong().color(WARNING));
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.add_enabled(!self.state.accepts_moves(), egui::Button::new("Start")).clicked() {
                    self.state.show_new_game = true;
                }
                if ui.add_enabled(self.state.accepts_moves(), egui::Button::new("Resign")).clicked() {
                    self.state.resign();
                }
                let toggle = match self.state.view {
                    Side::Declared => "Show Real Game",
                    Side::Authoritative => "Hide Real Game",
                };
                if ui.button(toggle).clicked() {
                    self.state.toggle_view();
                }
            });
        });
    }

    /// Undo/redo buttons and the move slider
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (back, forward) = self.state.history_labels();
            ui.horizontal(|ui| {
                if ui.add_enabled(self.state.can_undo, egui::Button::new(back)).clicked() {
                    self.state.undo();
                }
                if ui.add_enabled(self.state.can_redo, egui::Button::new(forward)).clicked() {
                    self.state.redo();
                }
            });

            let len = self.state.session.history_len();
            let mut pointer = self.state.session.length_applied();
            ui.add_space(6.0);
            let slider = egui::Slider::new(&mut pointer, 0..=len).show_value(false);
            if ui.add_enabled(len > 0, slider).changed() {
                self.state.goto_move(pointer);
            }
            ui.label(
                RichText::new(format!("Move: {}", self.state.session.length_applied()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Flip-probability dialog shown before each game
    fn render_new_game_window(&mut self, ctx: &Context) {
        if !self.state.show_new_game {
            return;
        }
        let mut start = false;
        let mut cancel = false;
        egui::Window::new("New Game")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("Flip probability: {}%", self.state.flip_percent));
                ui.add(egui::Slider::new(&mut self.state.flip_percent, 0..=100).show_value(false));
                ui.horizontal(|ui| {
                    start = ui.button("OK").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });
        if start {
            self.state.start();
        }
        if start || cancel {
            self.state.show_new_game = false;
        }
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let session = &self.state.session;
            let board = session.board();
            let trace = match self.state.view {
                Side::Declared => session.declared_trace(),
                Side::Authoritative => session.authoritative_trace(),
            };
            let frame = BoardFrame {
                board: board.view(self.state.view),
                occupancy: board.authoritative(),
                last_move: trace.last().copied(),
                winning_line: match self.state.view {
                    Side::Authoritative => session.winning_line(),
                    Side::Declared => None,
                },
                current_turn: session.current_turn(),
                accepts_moves: self.state.accepts_moves() && !self.state.show_new_game,
            };

            if let Some(pos) = self.board_view.show(ui, &frame) {
                self.state.try_place_stone(pos.x as i32, pos.y as i32);
            }
        });
    }

    /// Keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (left, right, toggle) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::R),
            )
        });
        if left && self.state.can_undo {
            self.state.undo();
        }
        if right && self.state.can_redo {
            self.state.redo();
        }
        if toggle {
            self.state.toggle_view();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.poll_events();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_new_game_window(ctx);
        self.render_board(ctx);
    }
}
