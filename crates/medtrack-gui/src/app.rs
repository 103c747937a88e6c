//! Main application struct and eframe::App implementation

use eframe::egui;
use medtrack_core::Database;

use crate::settings::{save_settings, Settings};
use crate::state::{Action, AppState, Dialog};
use crate::views::{
    confirm_delete, error_message, ExpiryReportWindow, InventoryView, MedicineFormWindow,
};

pub const APP_TITLE: &str = "Medicine Expiry Tracker";

/// Main application struct
pub struct MedtrackApp {
    state: AppState,
    db: Database,
}

impl MedtrackApp {
    /// Create a new application instance and load the initial listing.
    pub fn new(cc: &eframe::CreationContext<'_>, db: Database, settings: Settings) -> Self {
        apply_visuals(&cc.egui_ctx, settings.general.dark_mode);

        let mut state = AppState::new(settings);
        state.reload(&db);
        tracing::info!("Loaded {} medicines", state.total);

        Self { state, db }
    }
}

impl eframe::App for MedtrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.top_bar(ui);
        });

        let blocked = self.state.dialog.is_some() || self.state.error.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                actions.extend(InventoryView::show(ui, &mut self.state));
            });
        });

        let title = self.state.dialog.as_ref().map_or("", Dialog::title);
        match &mut self.state.dialog {
            Some(Dialog::Add(form)) => {
                actions.extend(MedicineFormWindow::show(ctx, title, "Add Medicine", form));
            }
            Some(Dialog::Edit { form, .. }) => {
                actions.extend(MedicineFormWindow::show(ctx, title, "Save Changes", form));
            }
            Some(Dialog::ConfirmDelete { code }) => {
                actions.extend(confirm_delete(ctx, code));
            }
            Some(Dialog::ExpiryReport(report)) => {
                actions.extend(ExpiryReportWindow::show(ctx, report));
            }
            None => {}
        }

        if let Some(message) = &self.state.error {
            // The error sits above any open dialog, which ignores input meanwhile
            actions.clear();
            actions.extend(error_message(ctx, message));
        }

        for action in actions {
            self.state.apply(action, &self.db);
        }
    }
}

impl MedtrackApp {
    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(APP_TITLE);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut dark_mode = self.state.settings.general.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                    self.set_dark_mode(ui.ctx(), dark_mode);
                }
            });
        });
    }

    fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.state.settings.general.dark_mode = dark_mode;
        apply_visuals(ctx, dark_mode);
        if let Err(e) = save_settings(&self.state.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (toggle_fullscreen, escape) =
            ctx.input(|i| (i.key_pressed(egui::Key::F11), i.key_pressed(egui::Key::Escape)));

        // F11 - toggle fullscreen
        if toggle_fullscreen {
            let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
        }

        // Escape - close the topmost dialog
        if escape {
            if self.state.error.is_some() {
                self.state.apply(Action::DismissError, &self.db);
            } else if self.state.dialog.is_some() {
                self.state.apply(Action::CloseDialog, &self.db);
            }
        }
    }
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
