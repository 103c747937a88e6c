//! Medicine Expiry Tracker - GUI Library
//!
//! The presentation state lives in [`state`] and is usable without a window,
//! which is how the handlers are tested.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
