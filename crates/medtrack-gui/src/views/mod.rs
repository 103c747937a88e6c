//! View components

mod expiry_report;
mod inventory;
mod medicine_form;
mod prompts;

pub use expiry_report::ExpiryReportWindow;
pub use inventory::InventoryView;
pub use medicine_form::MedicineFormWindow;
pub use prompts::{confirm_delete, error_message};
