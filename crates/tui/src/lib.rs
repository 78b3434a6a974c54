pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use deskbook_core as core;
pub use deskbook_core::model;
pub use deskbook_core::pricing;
pub use deskbook_core::registry;

pub use deskbook_core::AppConfig;
