pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod registry;
pub mod services;

pub use config::{AppConfig, ConfigOverrides, LayoutConfig};
pub use error::BookingError;
pub use model::*;
pub use pricing::{Charge, Hours, Quote, RateCard};
pub use registry::DeskRegistry;
pub use services::{BookingState, Phase};
