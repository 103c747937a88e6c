//! Add/edit medicine form window.

use egui::{Align2, RichText};
use medtrack_core::Column;

use crate::state::{Action, FormState};
use crate::theme::spacing;

/// Modal form with one text input per column.
pub struct MedicineFormWindow;

impl MedicineFormWindow {
    /// Show the form. `submit_label` is the text of the confirm button.
    pub fn show(
        ctx: &egui::Context,
        title: &str,
        submit_label: &str,
        state: &mut FormState,
    ) -> Option<Action> {
        let mut action = None;
        let mut open = true;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("medicine_form_grid")
                    .num_columns(2)
                    .spacing([spacing::MD, spacing::SM])
                    .show(ui, |ui| {
                        for column in Column::all() {
                            ui.label(column.form_label());
                            ui.add(
                                egui::TextEdit::singleline(state.form.field_mut(*column))
                                    .desired_width(220.0),
                            );
                            ui.end_row();
                        }
                    });

                let warn_color = ui.visuals().warn_fg_color;
                for warning in state.warnings() {
                    ui.label(RichText::new(warning.to_string()).color(warn_color).small());
                }

                if let Some(error) = &state.error {
                    ui.add_space(spacing::XS);
                    ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
                }

                ui.add_space(spacing::SM);
                ui.horizontal(|ui| {
                    if ui.button(submit_label).clicked() {
                        action = Some(Action::SubmitForm);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(Action::CloseDialog);
                    }
                });
            });

        if !open {
            action = Some(Action::CloseDialog);
        }
        action
    }
}
