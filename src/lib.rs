pub use deskbook_tui::cli;
pub use deskbook_tui::commands;
pub use deskbook_tui::config;
pub use deskbook_tui::logging;
pub use deskbook_tui::tui;
pub use deskbook_tui::AppConfig;

pub use deskbook_core as core;
pub use deskbook_core::model;
pub use deskbook_core::pricing;
pub use deskbook_core::registry;
pub use deskbook_core::BookingState;
