//! Application-level state
//!
//! All mutable UI state (rows, selection, search, sort, open dialog) lives in
//! [`AppState`]. Views read it and return an [`Action`]; [`AppState::apply`]
//! runs the matching handler against the store.

use chrono::{Local, NaiveDate};
use medtrack_core::{Column, Database, DbResult, ExpiryReport, MedicineRecord, SortOrder};

use super::{Dialog, FormState};
use crate::settings::Settings;

/// User intent produced by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the search box
    Search,
    /// Leave filtered mode ("Back")
    ClearSearch,
    /// Column header clicked
    SortBy(Column),
    /// Row clicked
    Select(String),
    OpenAdd,
    OpenEdit,
    RequestDelete,
    CheckExpiry,
    /// Submit the open add/edit form
    SubmitForm,
    ConfirmDelete,
    CloseDialog,
    DismissError,
}

/// Whether the table shows everything or a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Unfiltered,
    Filtered { query: String },
}

impl SearchState {
    pub fn is_filtered(&self) -> bool {
        matches!(self, Self::Filtered { .. })
    }
}

/// Last column the user sorted by.
///
/// Starts empty; the table then uses the default expiry-date order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub last: Option<SortOrder>,
}

impl SortState {
    /// Record a header click and return the order to apply.
    pub fn toggle(&mut self, column: Column) -> SortOrder {
        let order = match self.last {
            Some(order) => order.toggled(column),
            None => SortOrder::ascending(column),
        };
        self.last = Some(order);
        order
    }

    /// Order used for listings.
    pub fn order(&self) -> SortOrder {
        self.last.unwrap_or_default()
    }
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Rows currently displayed
    pub rows: Vec<MedicineRecord>,
    /// Total rows in the store
    pub total: usize,
    /// Code of the selected row
    pub selection: Option<String>,
    /// Search box contents
    pub search_text: String,
    pub search: SearchState,
    pub sort: SortState,
    pub dialog: Option<Dialog>,
    /// Blocking error message shown above everything else
    pub error: Option<String>,
    /// User preferences
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Run the handler for an action.
    pub fn apply(&mut self, action: Action, db: &Database) {
        tracing::debug!("Action: {:?}", action);
        match action {
            Action::Search => self.submit_search(db),
            Action::ClearSearch => self.clear_search(db),
            Action::SortBy(column) => self.sort_by(column, db),
            Action::Select(code) => self.select(code),
            Action::OpenAdd => self.open_add(),
            Action::OpenEdit => self.open_edit(),
            Action::RequestDelete => self.request_delete(),
            Action::CheckExpiry => self.open_expiry_report(db, Local::now().date_naive()),
            Action::SubmitForm => self.submit_form(db),
            Action::ConfirmDelete => self.confirm_delete(db),
            Action::CloseDialog => self.dialog = None,
            Action::DismissError => self.error = None,
        }
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Re-query the store for the current search and sort, clearing selection.
    pub fn reload(&mut self, db: &Database) {
        self.selection = None;
        match self.query_rows(db) {
            Ok((rows, total)) => {
                self.rows = rows;
                self.total = total;
            }
            Err(e) => {
                tracing::error!("Failed to load medicines: {}", e);
                self.error = Some(format!("Failed to load medicines: {}", e));
            }
        }
    }

    fn query_rows(&self, db: &Database) -> DbResult<(Vec<MedicineRecord>, usize)> {
        let order = self.sort.order();
        let rows = match &self.search {
            SearchState::Unfiltered => db.list_medicines(order)?,
            SearchState::Filtered { query } => {
                let mut rows = db.search_medicines(query)?;
                medtrack_core::sort_records(&mut rows, order);
                rows
            }
        };
        Ok((rows, db.count_medicines()?))
    }

    /// Filter by the search box text as typed; a blank box behaves like "Back".
    pub fn submit_search(&mut self, db: &Database) {
        if self.search_text.trim().is_empty() {
            self.clear_search(db);
            return;
        }
        self.search = SearchState::Filtered {
            query: self.search_text.clone(),
        };
        self.reload(db);
    }

    pub fn clear_search(&mut self, db: &Database) {
        self.search_text.clear();
        self.search = SearchState::Unfiltered;
        self.reload(db);
    }

    pub fn sort_by(&mut self, column: Column, db: &Database) {
        let order = self.sort.toggle(column);
        tracing::debug!("Sorting by {:?} {:?}", order.column, order.direction);
        self.reload(db);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select(&mut self, code: String) {
        if self.rows.iter().any(|r| r.code == code) {
            self.selection = Some(code);
        }
    }

    pub fn selected_record(&self) -> Option<&MedicineRecord> {
        let code = self.selection.as_deref()?;
        self.rows.iter().find(|r| r.code == code)
    }

    /// Edit and Delete are only available with a row selected.
    pub fn has_selection(&self) -> bool {
        self.selected_record().is_some()
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    pub fn open_add(&mut self) {
        self.dialog = Some(Dialog::Add(FormState::blank()));
    }

    pub fn open_edit(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        self.dialog = Some(Dialog::Edit {
            original_code: record.code.clone(),
            form: FormState::from_record(record),
        });
    }

    pub fn request_delete(&mut self) {
        if let Some(record) = self.selected_record() {
            self.dialog = Some(Dialog::ConfirmDelete {
                code: record.code.clone(),
            });
        }
    }

    /// Classify every stored record against `today`.
    pub fn open_expiry_report(&mut self, db: &Database, today: NaiveDate) {
        match db.list_medicines(SortOrder::default()) {
            Ok(rows) => {
                self.dialog = Some(Dialog::ExpiryReport(ExpiryReport::build(&rows, today)));
            }
            Err(e) => {
                tracing::error!("Failed to build expiry report: {}", e);
                self.error = Some(format!("Failed to check expiry: {}", e));
            }
        }
    }

    /// Submit the add/edit form.
    ///
    /// Validation errors stay inline; store errors raise a blocking message.
    /// Either way the form stays open for correction.
    pub fn submit_form(&mut self, db: &Database) {
        let result = match &mut self.dialog {
            Some(Dialog::Add(state)) => match state.form.to_record() {
                Ok(record) => db.insert_medicine(&record),
                Err(e) => {
                    state.error = Some(e.to_string());
                    return;
                }
            },
            Some(Dialog::Edit {
                original_code,
                form: state,
            }) => match state.form.to_record() {
                Ok(record) => db.update_medicine(original_code, &record),
                Err(e) => {
                    state.error = Some(e.to_string());
                    return;
                }
            },
            _ => return,
        };

        match result {
            Ok(()) => {
                self.dialog = None;
                self.reload(db);
            }
            Err(e) => {
                tracing::error!("Failed to save medicine: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn confirm_delete(&mut self, db: &Database) {
        let Some(Dialog::ConfirmDelete { code }) = self.dialog.take() else {
            return;
        };
        if let Err(e) = db.delete_medicine(&code) {
            tracing::error!("Failed to delete medicine {}: {}", code, e);
            self.error = Some(e.to_string());
        }
        self.reload(db);
    }
}
