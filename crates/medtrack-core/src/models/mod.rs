//! Domain models for the medicine inventory.

mod form;
mod medicine;
mod sort;

pub use form::*;
pub use medicine::*;
pub use sort::*;
