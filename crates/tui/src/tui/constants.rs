use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const APP_TITLE: &str = "Co-working Space Booking";
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const GRID_COLUMNS: usize = 5;
pub(crate) const TILE_HEIGHT: u16 = 3;

pub(crate) const STATUS_SELECT_FIRST: &str = "Select a free desk first (Enter on a tile)";
pub(crate) const STATUS_EDIT_HOURS: &str =
    "Type the number of hours • Enter to apply • Esc to cancel";
pub(crate) const STATUS_TEAM_RATE: &str = "Team desks use a flat hourly rate";
pub(crate) const STATUS_RESET: &str = "Session reset, all desks are free again";
pub(crate) const STATUS_HELP: &str = "Keyboard reference • Enter/Esc to close";
