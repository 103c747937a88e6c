//! Small modal prompts: delete confirmation and error messages.

use egui::{Id, Modal, RichText};

use crate::state::Action;
use crate::theme::spacing;

/// Ask before deleting the medicine with `code`.
pub fn confirm_delete(ctx: &egui::Context, code: &str) -> Option<Action> {
    let mut action = None;

    let response = Modal::new(Id::new("confirm_delete")).show(ctx, |ui| {
        ui.heading("Delete Medicine");
        ui.add_space(spacing::SM);
        ui.label(format!(
            "Are you sure you want to delete medicine with code {}?",
            code
        ));
        ui.add_space(spacing::MD);
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                action = Some(Action::ConfirmDelete);
            }
            if ui.button("No").clicked() {
                action = Some(Action::CloseDialog);
            }
        });
    });

    if action.is_none() && response.should_close() {
        action = Some(Action::CloseDialog);
    }
    action
}

/// Blocking error message.
pub fn error_message(ctx: &egui::Context, message: &str) -> Option<Action> {
    let mut action = None;

    let response = Modal::new(Id::new("error_message")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading(RichText::new("Error").color(ui.visuals().error_fg_color));
        ui.add_space(spacing::SM);
        ui.label(message);
        ui.add_space(spacing::MD);
        if ui.button("OK").clicked() {
            action = Some(Action::DismissError);
        }
    });

    if action.is_none() && response.should_close() {
        action = Some(Action::DismissError);
    }
    action
}
