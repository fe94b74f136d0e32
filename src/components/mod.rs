//! UI Components
//!
//! Leptos components of the retro board.

mod log_panel;
mod retro_column;
mod retro_column_item;

pub use log_panel::LogPanel;
pub use retro_column::RetroColumn;
pub use retro_column_item::RetroColumnItem;
