//! Modal dialogs shown over the inventory table.

use medtrack_core::{ExpiryReport, FormWarning, MedicineForm, MedicineRecord};

/// The add/edit form plus its inline validation error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub form: MedicineForm,
    pub error: Option<String>,
}

impl FormState {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_record(record: &MedicineRecord) -> Self {
        Self {
            form: MedicineForm::from_record(record),
            error: None,
        }
    }

    pub fn warnings(&self) -> Vec<FormWarning> {
        self.form.warnings()
    }
}

/// The dialog currently open, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Blank form for a new medicine
    Add(FormState),
    /// Form pre-filled from the row identified by `original_code`
    Edit {
        original_code: String,
        form: FormState,
    },
    /// Delete confirmation naming the target code
    ConfirmDelete { code: String },
    /// Expiry status report
    ExpiryReport(ExpiryReport),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Add(_) => "Add Medicine",
            Self::Edit { .. } => "Edit Medicine",
            Self::ConfirmDelete { .. } => "Delete Medicine",
            Self::ExpiryReport(_) => "Medicine Expiry Status",
        }
    }
}
