//! Presentation state and the handlers that drive it.

mod app_state;
mod dialog;

pub use app_state::*;
pub use dialog::*;
