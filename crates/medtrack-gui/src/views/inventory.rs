//! Main inventory screen
//!
//! Search bar, the medicine table with sortable headers, and the action bar.

use egui::{RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};
use medtrack_core::Column;

use crate::state::{Action, AppState, SearchState};
use crate::theme::spacing;

/// Inventory list view
pub struct InventoryView;

impl InventoryView {
    /// Render the inventory screen.
    ///
    /// Returns the action the user triggered this frame, if any.
    pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<Action> {
        let mut action = None;

        ui.add_space(spacing::SM);
        Self::search_bar(ui, state, &mut action);
        ui.add_space(spacing::SM);
        ui.separator();

        // Leave room for the action bar and status line below the table
        let table_height = (ui.available_height() - 80.0).max(120.0);
        Self::table(ui, state, table_height, &mut action);

        ui.separator();
        ui.add_space(spacing::SM);
        Self::action_bar(ui, state, &mut action);
        ui.add_space(spacing::XS);
        Self::status_line(ui, state);

        action
    }

    fn search_bar(ui: &mut Ui, state: &mut AppState, action: &mut Option<Action>) {
        ui.horizontal(|ui| {
            ui.label("Search by Code or Name:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.search_text)
                    .hint_text("e.g. PARA or paracetamol")
                    .desired_width(240.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Search").clicked() || submitted {
                *action = Some(Action::Search);
            }

            if ui
                .add_enabled(state.search.is_filtered(), egui::Button::new("Back"))
                .clicked()
            {
                *action = Some(Action::ClearSearch);
            }
        });
    }

    fn table(ui: &mut Ui, state: &AppState, max_height: f32, action: &mut Option<Action>) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;
        let sorted = state.sort.last;
        let columns = Column::all();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(TableColumn::auto().at_least(90.0), columns.len() - 1)
            .column(TableColumn::remainder().at_least(90.0))
            .header(text_height + 10.0, |mut header| {
                for column in columns {
                    header.col(|ui| {
                        let label = match sorted {
                            Some(order) if order.column == *column => {
                                format!("{} {}", column.header(), order.direction.arrow())
                            }
                            _ => column.header().to_string(),
                        };
                        if ui
                            .button(RichText::new(label).strong())
                            .on_hover_text("Click to sort")
                            .clicked()
                        {
                            *action = Some(Action::SortBy(*column));
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(text_height + 8.0, state.rows.len(), |mut row| {
                    let record = &state.rows[row.index()];
                    row.set_selected(state.selection.as_deref() == Some(record.code.as_str()));

                    for column in columns {
                        row.col(|ui| {
                            ui.label(column.display_value(record));
                        });
                    }

                    if row.response().clicked() {
                        *action = Some(Action::Select(record.code.clone()));
                    }
                });
            });
    }

    fn action_bar(ui: &mut Ui, state: &AppState, action: &mut Option<Action>) {
        let has_selection = state.has_selection();

        ui.horizontal(|ui| {
            if ui.button("Add Medicine").clicked() {
                *action = Some(Action::OpenAdd);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Edit Medicine"))
                .clicked()
            {
                *action = Some(Action::OpenEdit);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Delete Medicine"))
                .clicked()
            {
                *action = Some(Action::RequestDelete);
            }
            ui.add_space(spacing::MD);
            if ui.button("Check Expiry").clicked() {
                *action = Some(Action::CheckExpiry);
            }
        });
    }

    fn status_line(ui: &mut Ui, state: &AppState) {
        let text = match &state.search {
            SearchState::Unfiltered => format!("{} medicines", state.total),
            SearchState::Filtered { query } => format!(
                "{} of {} medicines match \"{}\"",
                state.rows.len(),
                state.total,
                query
            ),
        };
        ui.label(RichText::new(text).weak().small());
    }
}
