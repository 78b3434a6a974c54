use std::time::Instant;

use ratatui::style::{Color, Style};

use super::buffer::TextBuffer;
use super::constants::*;
use super::helpers::{move_cursor, total_charged_line};
use crate::config::AppConfig;
use crate::core::{BookingState, DeskId};

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Hours,
    Help,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

pub(crate) struct App {
    booking: BookingState,
    cursor: usize,
    input_mode: InputMode,
    hours_input: TextBuffer,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            booking: BookingState::new(config.layout()),
            cursor: 0,
            input_mode: InputMode::Normal,
            hours_input: TextBuffer::new(),
            status: None,
            should_quit: false,
        }
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn cursor_desk_id(&self) -> Option<DeskId> {
        self.booking.desks().get(self.cursor).map(|desk| desk.id)
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        self.cursor = move_cursor(
            self.cursor,
            self.booking.desks().len(),
            GRID_COLUMNS,
            dx,
            dy,
        );
    }

    fn select_cursor_desk(&mut self) {
        let Some(id) = self.cursor_desk_id() else {
            return;
        };
        match self.booking.select(id) {
            Ok(id) => {
                let label = self
                    .booking
                    .selected_desk()
                    .map(|desk| desk.label())
                    .unwrap_or_else(|| id.to_string());
                self.set_status_info(format!("Booking {}", label));
            }
            // The booking state keeps the error line; the footer stays quiet.
            Err(_) => self.status = None,
        }
    }

    fn cycle_tier(&mut self, forward: bool) {
        if self.booking.selected().is_none() {
            self.set_status_info(STATUS_SELECT_FIRST);
            return;
        }
        if !self.booking.tier_applies() {
            self.set_status_info(STATUS_TEAM_RATE);
            return;
        }
        let tier = if forward {
            self.booking.tier().next()
        } else {
            self.booking.tier().prev()
        };
        self.booking.set_tier(tier);
        self.set_status_info(format!("Tier set to {}", tier.title()));
    }

    fn adjust_hours(&mut self, increase: bool) {
        let hours = if increase {
            self.booking.hours().increment()
        } else {
            self.booking.hours().decrement()
        };
        self.booking.set_hours(hours);
    }

    fn begin_hours_edit(&mut self) {
        if self.booking.selected().is_none() {
            self.set_status_info(STATUS_SELECT_FIRST);
            return;
        }
        self.hours_input.set(self.booking.hours().to_string());
        self.input_mode = InputMode::Hours;
        self.set_status_info(STATUS_EDIT_HOURS);
    }

    fn apply_hours_edit(&mut self) {
        match self.booking.set_hours_input(self.hours_input.as_str()) {
            Ok(hours) => {
                self.hours_input.clear();
                self.input_mode = InputMode::Normal;
                self.set_status_info(format!("Duration set to {}h", hours));
            }
            Err(err) => self.set_status_error(err.to_string()),
        }
    }

    fn cancel_hours_edit(&mut self) {
        self.hours_input.clear();
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn confirm_booking(&mut self) {
        match self.booking.confirm() {
            Ok(Some(receipt)) => {
                self.set_status_info(format!(
                    "Booked {} {} • {}",
                    receipt.kind.tile_label(),
                    receipt.desk,
                    total_charged_line(&receipt)
                ));
            }
            Ok(None) => self.set_status_info(STATUS_SELECT_FIRST),
            Err(err) => self.set_status_error(err.to_string()),
        }
    }

    fn reset_session(&mut self) {
        self.booking.reset();
        self.cursor = 0;
        self.set_status_info(STATUS_RESET);
    }

    fn dismiss_error(&mut self) {
        self.booking.dismiss_error();
        self.status = None;
    }

    fn show_help_overlay(&mut self) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP);
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("ℹ️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("⚠️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}
