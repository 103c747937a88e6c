//! Expiry status report window.

use egui::RichText;
use egui_extras::{Column as TableColumn, TableBuilder};
use medtrack_core::{Column, ExpiryReport, ExpiryStatus};

use crate::state::Action;
use crate::theme::{colors, spacing};

const REPORT_COLUMNS: &[Column] = &[
    Column::Code,
    Column::Batch,
    Column::Name,
    Column::Company,
    Column::ExpiryDate,
    Column::Quantity,
];

/// Every record with its expiry bucket, color coded.
pub struct ExpiryReportWindow;

impl ExpiryReportWindow {
    pub fn show(ctx: &egui::Context, report: &ExpiryReport) -> Option<Action> {
        let mut action = None;
        let mut open = true;

        egui::Window::new("Medicine Expiry Status")
            .collapsible(false)
            .resizable(true)
            .default_size([860.0, 420.0])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                Self::summary(ui, report);
                ui.add_space(spacing::SM);
                ui.separator();
                Self::table(ui, report);

                ui.add_space(spacing::SM);
                if ui.button("Close").clicked() {
                    action = Some(Action::CloseDialog);
                }
            });

        if !open {
            action = Some(Action::CloseDialog);
        }
        action
    }

    fn summary(ui: &mut egui::Ui, report: &ExpiryReport) {
        ui.horizontal(|ui| {
            for status in [
                ExpiryStatus::Expired,
                ExpiryStatus::ExpiringSoon,
                ExpiryStatus::Safe,
            ] {
                let (bg, fg) = colors::status_colors(status);
                ui.label(
                    RichText::new(format!(" {}: {} ", status.label(), report.count(status)))
                        .color(fg)
                        .background_color(bg),
                );
                ui.add_space(spacing::SM);
            }
            if let Some(today) = report.today {
                ui.label(RichText::new(format!("as of {}", today)).weak());
            }
        });
    }

    fn table(ui: &mut egui::Ui, report: &ExpiryReport) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;

        TableBuilder::new(ui)
            .striped(false)
            .max_scroll_height(320.0)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(TableColumn::exact(110.0))
            .columns(TableColumn::auto().at_least(80.0), REPORT_COLUMNS.len())
            .column(TableColumn::remainder().at_least(80.0))
            .header(text_height + 6.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("Status").strong());
                });
                for column in REPORT_COLUMNS {
                    header.col(|ui| {
                        ui.label(RichText::new(column.header()).strong());
                    });
                }
                header.col(|ui| {
                    ui.label(RichText::new("Days Left").strong());
                });
            })
            .body(|body| {
                body.rows(text_height + 8.0, report.entries.len(), |mut row| {
                    let entry = &report.entries[row.index()];
                    let (bg, fg) = colors::status_colors(entry.status);

                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!(" {} ", entry.status.label()))
                                .color(fg)
                                .background_color(bg),
                        );
                    });
                    for column in REPORT_COLUMNS {
                        row.col(|ui| {
                            ui.label(column.display_value(&entry.record));
                        });
                    }
                    row.col(|ui| {
                        ui.label(entry.days_until_expiry.to_string());
                    });
                });
            });
    }
}
