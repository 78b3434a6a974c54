mod booking;

pub use booking::{BookingState, Phase};
