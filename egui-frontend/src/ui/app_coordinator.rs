//! # App Coordinator Module
//!
//! The main update loop. Each frame renders the error strip (if any) and
//! then exactly one screen for the current view.

use eframe::egui;
use shared::View;

use crate::ui::app_state::ChoreTrackerApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl eframe::App for ChoreTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.render_messages(ui);
                self.render_current_view(ui);
            });
    }
}

impl ChoreTrackerApp {
    fn render_current_view(&mut self, ui: &mut egui::Ui) {
        match self.current_view() {
            View::Landing => self.render_landing_view(ui),
            View::Student => self.render_student_view(ui),
            View::Parent => self.render_parent_view(ui),
        }
    }

    /// Dismissable strip for backend errors
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.ui.error_message.clone() else {
            return;
        };

        egui::Frame::none()
            .fill(CURRENT_THEME.interactive.danger)
            .inner_margin(egui::Margin::symmetric(16.0, 8.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("❌ {}", message)).color(colors::TEXT_WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.clear_messages();
                        }
                    });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::ChoreStatus;
    use std::sync::Arc;

    use crate::backend::domain::models::chore::Chore;
    use crate::backend::domain::seed;
    use crate::backend::storage::memory::MemoryConnection;
    use crate::backend::Backend;

    fn dangling_chore(id: u64, student_id: &str, status: ChoreStatus) -> Chore {
        Chore {
            id,
            student_id: student_id.to_string(),
            chore_type_id: "ghost".to_string(),
            label: format!("Ghost chore {}", id),
            status,
            created_at: Utc::now(),
        }
    }

    fn setup_test() -> ChoreTrackerApp {
        let chores = vec![
            dangling_chore(1, "s1", ChoreStatus::Assigned),
            dangling_chore(2, "s1", ChoreStatus::Pending),
            dangling_chore(3, "s1", ChoreStatus::Completed),
        ];
        let connection = MemoryConnection::with_data(seed::students(), seed::chore_types(), chores);
        ChoreTrackerApp::from_backend(Backend::with_connection(Arc::new(connection)))
    }

    fn render_frames(ctx: &egui::Context, app: &mut ChoreTrackerApp) {
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.render_messages(ui);
                    app.render_current_view(ui);
                });
            });
        }
    }

    #[test]
    fn test_every_view_renders_chores_with_unknown_type() {
        let ctx = egui::Context::default();
        let mut app = setup_test();
        let chores_before = app.all_chores();

        render_frames(&ctx, &mut app);
        assert_eq!(app.current_view(), View::Landing);

        // Student view with nobody picked
        app.core.current_view = View::Student;
        render_frames(&ctx, &mut app);

        app.show_student("s1");
        assert_eq!(app.current_view(), View::Student);
        render_frames(&ctx, &mut app);

        app.show_parent();
        render_frames(&ctx, &mut app);

        app.open_chore_type_form();
        render_frames(&ctx, &mut app);

        app.ui.set_error("Failed to load chores: boom".to_string());
        render_frames(&ctx, &mut app);

        assert_eq!(app.all_chores(), chores_before);
        assert_eq!(app.pending_count(), 1);
        assert_eq!(app.resolve_icon("ghost"), shared::IconKey::DEFAULT);
    }
}
