//! # Parent View
//!
//! The parent dashboard, made of three independent panels:
//!
//! 1. **Needs Approval** - every pending chore with "Needs work" / "Approve"
//! 2. **Assign a New Mission** - chore type picker, custom type form and the
//!    "Assign to" grid
//! 3. **All Active Chores** - everything not completed, with delete
//!
//! Nothing stops a parent from approving a chore that was never marked
//! pending or deleting a chore mid-flow.

use eframe::egui;
use shared::{Chore, ChoreStatus, ChoreType, IconKey, Student};

use crate::ui::app_state::ChoreTrackerApp;
use crate::ui::components::icons;
use crate::ui::components::styling::{card_frame, chip, heading, pill_button};
use crate::ui::components::theme::{colors, CURRENT_THEME};

pub const EMPTY_APPROVALS_TEXT: &str = "No chores waiting for review.";

/// Line under a pending chore, e.g. "Leo says it is done."
pub fn says_done_text(student: Option<&Student>) -> String {
    match student {
        Some(student) => format!("{} says it is done.", student.name),
        None => "Someone says it is done.".to_string(),
    }
}

/// Count badge next to "Needs Approval"; hidden when nothing is pending
pub fn approval_badge_text(pending_count: usize) -> Option<String> {
    (pending_count > 0).then(|| pending_count.to_string())
}

/// A chore row joined with what the dashboard shows next to it
struct ChoreRow {
    chore: Chore,
    student: Option<Student>,
    icon_key: IconKey,
}

impl ChoreTrackerApp {
    /// Render the parent dashboard
    pub fn render_parent_view(&mut self, ui: &mut egui::Ui) {
        ui.painter().rect_filled(ui.max_rect(), egui::Rounding::ZERO, CURRENT_THEME.layout.dashboard_background);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(20.0);
            self.render_parent_header(ui);
            ui.add_space(24.0);

            self.render_needs_approval_section(ui);
            ui.add_space(32.0);

            self.render_assignment_section(ui);
            ui.add_space(32.0);

            self.render_active_chores_section(ui);
            ui.add_space(40.0);
        });
    }

    fn chore_rows(&mut self, chores: Vec<Chore>) -> Vec<ChoreRow> {
        chores
            .into_iter()
            .map(|chore| {
                let student = self.student(&chore.student_id);
                let icon_key = self.resolve_icon(&chore.chore_type_id);
                ChoreRow { chore, student, icon_key }
            })
            .collect()
    }

    fn render_parent_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::Frame::none()
                .fill(CURRENT_THEME.layout.parent_badge)
                .rounding(egui::Rounding::same(12.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(icons::PARENT_SHIELD).size(28.0).color(colors::TEXT_WHITE));
                });
            ui.vertical(|ui| {
                ui.label(heading("Parent Dashboard", 24.0));
                ui.label(
                    egui::RichText::new("Assign chores. Kids mark done. You approve manually.")
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let exit = egui::Button::new(egui::RichText::new("Exit").color(colors::TEXT_SECONDARY))
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(egui::Stroke::NONE);
                if ui.add(exit).clicked() {
                    self.show_landing();
                }
            });
        });
    }

    fn render_needs_approval_section(&mut self, ui: &mut egui::Ui) {
        let pending = self.pending_chores();
        let rows = self.chore_rows(pending);
        let pending_count = self.pending_count();

        ui.horizontal(|ui| {
            ui.label(heading("Needs Approval", 20.0));
            if let Some(badge) = approval_badge_text(pending_count) {
                chip(ui, &badge, CURRENT_THEME.interactive.badge, colors::TEXT_WHITE);
            }
        });
        ui.add_space(8.0);

        if rows.is_empty() {
            egui::Frame::none()
                .fill(colors::CARD_BACKGROUND)
                .stroke(egui::Stroke::new(2.0, colors::CARD_BORDER))
                .rounding(egui::Rounding::same(16.0))
                .inner_margin(egui::Margin::same(28.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(EMPTY_APPROVALS_TEXT).color(colors::TEXT_MUTED));
                    });
                });
            return;
        }

        for row in &rows {
            card_frame(16.0).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    let avatar = row.student.as_ref().map(|s| s.avatar.as_str()).unwrap_or("");
                    ui.label(egui::RichText::new(avatar).size(30.0));
                    ui.vertical(|ui| {
                        ui.label(heading(&row.chore.label, 17.0));
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                icons::icon_glyph(row.icon_key),
                                says_done_text(row.student.as_ref())
                            ))
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let approve = pill_button("Approve", colors::APPROVE, colors::TEXT_WHITE, egui::vec2(110.0, 44.0));
                        if ui.add(approve).clicked() {
                            self.update_chore_status(row.chore.id, ChoreStatus::Completed);
                        }
                        let needs_work = pill_button("Needs work", colors::QUIET, colors::TEXT_SECONDARY, egui::vec2(110.0, 44.0));
                        if ui.add(needs_work).clicked() {
                            self.update_chore_status(row.chore.id, ChoreStatus::Assigned);
                        }
                    });
                });
            });
            ui.add_space(8.0);
        }
    }

    fn render_assignment_section(&mut self, ui: &mut egui::Ui) {
        let chore_types = self.chore_types();
        let students = self.students();

        ui.label(heading("Assign a New Mission", 20.0));
        ui.add_space(8.0);

        card_frame(24.0).show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(section_label("Chore type"));
                if !self.assignment.chore_type_form.is_open {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new("scroll for more →")
                                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                .color(colors::PRIMARY),
                        );
                    });
                }
            });

            if self.assignment.chore_type_form.is_open {
                self.render_chore_type_form(ui);
            } else {
                self.render_chore_type_picker(ui, &chore_types);
            }

            ui.add_space(16.0);
            ui.label(section_label("Assign to"));
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                for student in &students {
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{}  Assign to {}  {}", student.avatar, student.name, icons::ADD))
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(CURRENT_THEME.layout.dashboard_background)
                    .stroke(egui::Stroke::NONE)
                    .rounding(egui::Rounding::same(16.0))
                    .min_size(egui::vec2(200.0, 56.0));

                    if ui.add(button).clicked() {
                        self.add_chore(&student.id);
                    }
                }
            });
        });
    }

    fn render_chore_type_picker(&mut self, ui: &mut egui::Ui, chore_types: &[ChoreType]) {
        egui::ScrollArea::horizontal()
            .id_source("chore_type_picker")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for chore_type in chore_types {
                        let selected = self.assignment.is_selected(&chore_type.id);
                        let (fill, border, text) = if selected {
                            (
                                CURRENT_THEME.interactive.selected_background,
                                CURRENT_THEME.interactive.selected_border,
                                colors::PRIMARY,
                            )
                        } else {
                            (colors::CARD_BACKGROUND, CURRENT_THEME.interactive.tile_border, colors::TEXT_SECONDARY)
                        };

                        let tile = egui::Button::new(
                            egui::RichText::new(format!("{}\n{}", icons::icon_glyph(chore_type.icon_key), chore_type.label))
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                .color(text)
                                .strong(),
                        )
                        .fill(fill)
                        .stroke(egui::Stroke::new(2.0, border))
                        .rounding(egui::Rounding::same(12.0))
                        .min_size(egui::vec2(96.0, 72.0));

                        if ui.add(tile).clicked() {
                            self.select_chore_type(&chore_type.id);
                        }
                    }

                    let new_tile = egui::Button::new(
                        egui::RichText::new(format!("{}\nNew", icons::ADD))
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_MUTED)
                            .strong(),
                    )
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(2.0, colors::TEXT_MUTED))
                    .rounding(egui::Rounding::same(12.0))
                    .min_size(egui::vec2(96.0, 72.0));

                    if ui.add(new_tile).clicked() {
                        self.open_chore_type_form();
                    }
                });
            });
    }

    fn render_active_chores_section(&mut self, ui: &mut egui::Ui) {
        let active = self.active_chores();
        let rows = self.chore_rows(active);

        ui.label(heading("All Active Chores", 20.0));
        ui.add_space(8.0);

        for row in &rows {
            let palette = CURRENT_THEME.status.palette(row.chore.status);
            egui::Frame::none()
                .fill(colors::CARD_BACKGROUND)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .rounding(egui::Rounding::same(12.0))
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let avatar = row.student.as_ref().map(|s| s.avatar.as_str()).unwrap_or("");
                        ui.label(avatar);
                        ui.label(egui::RichText::new(&row.chore.label).color(colors::TEXT_PRIMARY));
                        chip(ui, row.chore.status.as_str(), palette.icon_background, palette.text);

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let delete = egui::Button::new(egui::RichText::new(icons::DELETE).size(16.0))
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE);
                            let response = ui.add(delete).on_hover_text("Delete chore");
                            if response.hovered() {
                                ui.painter().rect_stroke(
                                    response.rect,
                                    egui::Rounding::same(6.0),
                                    egui::Stroke::new(1.0, colors::DANGER),
                                );
                            }
                            if response.clicked() {
                                self.delete_chore(row.chore.id);
                            }
                            ui.label(egui::RichText::new(icons::icon_glyph(row.icon_key)).color(colors::TEXT_SECONDARY));
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }
}

/// Small uppercase label above a form area
pub fn section_label(text: &str) -> egui::RichText {
    egui::RichText::new(text.to_uppercase())
        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
        .color(colors::TEXT_SECONDARY)
        .strong()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_says_done_text() {
        let student = Student {
            id: "s1".to_string(),
            name: "Leo".to_string(),
            age: 3,
            avatar: "🦊".to_string(),
            theme: "amber".to_string(),
        };
        assert_eq!(says_done_text(Some(&student)), "Leo says it is done.");
        assert_eq!(says_done_text(None), "Someone says it is done.");
    }

    #[test]
    fn test_approval_badge_hidden_when_empty() {
        assert_eq!(approval_badge_text(0), None);
        assert_eq!(approval_badge_text(1).as_deref(), Some("1"));
        assert_eq!(approval_badge_text(12).as_deref(), Some("12"));
    }
}
