//! Reusable UI components

mod filter_panel;
mod resource_card;

pub use filter_panel::*;
pub use resource_card::*;
