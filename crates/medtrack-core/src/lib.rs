//! Medtrack Core Library
//!
//! Local medicine inventory with expiry tracking.
//!
//! # Modules
//!
//! - [`db`]: SQLite store for medicine records
//! - [`models`]: Domain types (MedicineRecord, sort whitelist, add/edit form)
//! - [`expiry`]: Expired / expiring-soon / safe classification

pub mod db;
pub mod expiry;
pub mod models;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use expiry::{ExpiryEntry, ExpiryReport, ExpiryStatus, EXPIRING_SOON_DAYS};
pub use models::{
    sort_records, Column, FormError, FormWarning, MedicineForm, MedicineRecord, SortDirection,
    SortOrder,
};
