//! # Student View
//!
//! A kid's own chore board. Chores are shown assigned first, then pending,
//! then completed. The only action a kid can take is "I finished!", which
//! moves an assigned chore to pending.
//!
//! ## Key Functions:
//! - `render_student_view()` - Header, chore cards and the empty state
//! - `status_message()` - Copy under each chore label
//! - `missions_ready_text()` - Header subtitle

use eframe::egui;
use shared::{Chore, ChoreStatus, IconKey, Student};

use crate::ui::app_state::ChoreTrackerApp;
use crate::ui::components::icons;
use crate::ui::components::styling::{draw_vertical_gradient, heading, pill_button};
use crate::ui::components::theme::{colors, student_panel_colors, CURRENT_THEME};

const CARD_WIDTH: f32 = 280.0;
const CARD_HEIGHT: f32 = 300.0;

pub const FINISHED_BUTTON: &str = "I finished!";
pub const WAITING_TEXT: &str = "Waiting for parent high-five";
pub const APPROVED_TEXT: &str = "Approved - great job!";
pub const EMPTY_TEXT: &str = "All done - high five!";

/// Copy shown under a chore's label
pub fn status_message(status: ChoreStatus) -> &'static str {
    match status {
        ChoreStatus::Assigned => "Give it a try, then tap \"I finished!\"",
        ChoreStatus::Pending => "Mom or Dad will check this soon.",
        ChoreStatus::Completed => "Parent approved - woohoo!",
    }
}

pub fn greeting(student: &Student) -> String {
    format!("Hi, {}!", student.name)
}

pub fn missions_ready_text(count: usize) -> String {
    format!("You have {} missions ready.", count)
}

/// Alpha for the pulsing clock on pending chores
fn pulse_alpha(time: f64) -> u8 {
    let wave = (time * 3.0).sin() * 0.5 + 0.5;
    (110.0 + wave * 145.0) as u8
}

impl ChoreTrackerApp {
    /// Render the kid view for the current student
    pub fn render_student_view(&mut self, ui: &mut egui::Ui) {
        let Some(student) = self.current_student().cloned() else {
            // No kid picked; offer the way back only
            if ui.button(format!("{} Back", icons::BACK)).clicked() {
                self.show_landing();
            }
            return;
        };

        let (top, bottom) = student_panel_colors(&student.theme);
        draw_vertical_gradient(ui, ui.max_rect(), top, bottom);

        let chores = self.current_student_chores();
        let ready = self.missions_ready(&student.id);
        let chore_icons: Vec<IconKey> = chores.iter().map(|c| self.resolve_icon(&c.chore_type_id)).collect();

        if chores.iter().any(|c| c.status == ChoreStatus::Pending) {
            ui.ctx().request_repaint_after(std::time::Duration::from_millis(50));
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(16.0);
            self.render_student_header(ui, &student, ready);
            ui.add_space(24.0);

            if chores.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(egui::RichText::new(icons::CELEBRATE).size(60.0));
                    ui.label(heading(EMPTY_TEXT, 24.0));
                });
                return;
            }

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(20.0, 20.0);
                for (chore, icon_key) in chores.iter().zip(chore_icons.iter()) {
                    ui.allocate_ui(egui::vec2(CARD_WIDTH, CARD_HEIGHT), |ui| {
                        self.render_chore_card(ui, chore, *icon_key);
                    });
                }
            });
            ui.add_space(40.0);
        });
    }

    fn render_student_header(&mut self, ui: &mut egui::Ui, student: &Student, ready: usize) {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(egui::RichText::new(&student.avatar).size(48.0));
            ui.vertical(|ui| {
                ui.label(heading(&greeting(student), 30.0));
                ui.label(egui::RichText::new(missions_ready_text(ready)).color(colors::TEXT_SECONDARY));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(12.0);
                let back = egui::Button::new(egui::RichText::new(icons::BACK).size(22.0))
                    .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 180))
                    .rounding(egui::Rounding::same(22.0))
                    .min_size(egui::vec2(44.0, 44.0));
                if ui.add(back).on_hover_text("Back to start").clicked() {
                    self.show_landing();
                }
            });
        });
    }

    fn render_chore_card(&mut self, ui: &mut egui::Ui, chore: &Chore, icon_key: IconKey) {
        let palette = CURRENT_THEME.status.palette(chore.status);

        egui::Frame::none()
            .fill(palette.background)
            .stroke(egui::Stroke::new(3.0, palette.border))
            .rounding(egui::Rounding::same(24.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(CARD_WIDTH - 40.0, CARD_HEIGHT - 40.0));
                ui.vertical_centered(|ui| {
                    egui::Frame::none()
                        .fill(palette.icon_background)
                        .rounding(egui::Rounding::same(40.0))
                        .inner_margin(egui::Margin::same(14.0))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(icons::icon_glyph(icon_key)).size(48.0).color(palette.text));
                        });
                    ui.add_space(10.0);
                    ui.label(heading(&chore.label, 22.0));
                    ui.label(
                        egui::RichText::new(status_message(chore.status))
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    );
                    ui.add_space(16.0);

                    match chore.status {
                        ChoreStatus::Assigned => {
                            let button = pill_button(FINISHED_BUTTON, colors::PRIMARY, colors::TEXT_WHITE, egui::vec2(CARD_WIDTH - 40.0, 56.0));
                            if ui.add(button).clicked() {
                                self.update_chore_status(chore.id, ChoreStatus::Pending);
                            }
                        }
                        ChoreStatus::Pending => {
                            let time = ui.input(|i| i.time);
                            let clock = egui::Color32::from_rgba_unmultiplied(
                                palette.text.r(),
                                palette.text.g(),
                                palette.text.b(),
                                pulse_alpha(time),
                            );
                            status_badge(ui, icons::WAITING, WAITING_TEXT, palette.icon_background, palette.text, clock);
                        }
                        ChoreStatus::Completed => {
                            status_badge(ui, icons::APPROVED, APPROVED_TEXT, palette.icon_background, palette.text, palette.text);
                        }
                    }
                });
            });
    }
}

/// Static indicator shown instead of the action button
fn status_badge(ui: &mut egui::Ui, glyph: &str, text: &str, fill: egui::Color32, text_color: egui::Color32, glyph_color: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(16.0))
        .inner_margin(egui::Margin::symmetric(12.0, 14.0))
        .show(ui, |ui| {
            ui.set_min_width(CARD_WIDTH - 64.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(glyph).size(20.0).color(glyph_color));
                ui.label(egui::RichText::new(text).color(text_color).strong());
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(status_message(ChoreStatus::Assigned), "Give it a try, then tap \"I finished!\"");
        assert_eq!(status_message(ChoreStatus::Pending), "Mom or Dad will check this soon.");
        assert_eq!(status_message(ChoreStatus::Completed), "Parent approved - woohoo!");
    }

    #[test]
    fn test_header_copy() {
        let student = Student {
            id: "s1".to_string(),
            name: "Leo".to_string(),
            age: 3,
            avatar: "🦊".to_string(),
            theme: "amber".to_string(),
        };
        assert_eq!(greeting(&student), "Hi, Leo!");
        assert_eq!(missions_ready_text(2), "You have 2 missions ready.");
        assert_eq!(missions_ready_text(0), "You have 0 missions ready.");
    }

    #[test]
    fn test_pulse_alpha_stays_visible() {
        for step in 0..100 {
            let alpha = pulse_alpha(step as f64 * 0.1);
            assert!(alpha >= 110);
        }
    }
}
