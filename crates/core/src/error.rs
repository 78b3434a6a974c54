use thiserror::Error;

use crate::model::DeskId;

pub const ALREADY_BOOKED_MESSAGE: &str = "This desk is already booked!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("This desk is already booked!")]
    AlreadyBooked(DeskId),
    #[error("Desk {0} does not exist")]
    UnknownDesk(DeskId),
    #[error("Invalid hours '{0}': enter a whole number of at least 1")]
    InvalidHours(String),
}

impl BookingError {
    pub fn desk(&self) -> Option<DeskId> {
        match self {
            BookingError::AlreadyBooked(id) | BookingError::UnknownDesk(id) => Some(*id),
            BookingError::InvalidHours(_) => None,
        }
    }
}
