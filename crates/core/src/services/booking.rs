use chrono::Local;

use crate::config::LayoutConfig;
use crate::error::BookingError;
use crate::model::{Desk, DeskId, DeskKind, Receipt, Tier};
use crate::pricing::{Charge, Hours, Quote, RateCard};
use crate::registry::DeskRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No desk selected.
    Idle,
    /// A free desk is selected and the tier/hours form is open.
    Editing(DeskId),
}

/// All state behind the booking widget: the desk registry, the current
/// selection and the booking form.
#[derive(Debug, Clone)]
pub struct BookingState {
    layout: LayoutConfig,
    rates: RateCard,
    registry: DeskRegistry,
    selected: Option<DeskId>,
    tier: Tier,
    hours: Hours,
    last_receipt: Option<Receipt>,
    error: Option<String>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl BookingState {
    pub fn new(layout: LayoutConfig) -> Self {
        Self::with_rates(layout, RateCard::default())
    }

    pub fn with_rates(layout: LayoutConfig, rates: RateCard) -> Self {
        Self {
            layout,
            rates,
            registry: DeskRegistry::seeded(layout),
            selected: None,
            tier: Tier::default(),
            hours: Hours::default(),
            last_receipt: None,
            error: None,
        }
    }

    /// Drop all bookings and form state, reseeding from the original layout.
    pub fn reset(&mut self) {
        *self = Self::with_rates(self.layout, self.rates);
        tracing::debug!("booking state reset");
    }

    pub fn registry(&self) -> &DeskRegistry {
        &self.registry
    }

    pub fn desks(&self) -> &[Desk] {
        self.registry.desks()
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    pub fn selected(&self) -> Option<DeskId> {
        self.selected
    }

    pub fn selected_desk(&self) -> Option<&Desk> {
        self.selected.and_then(|id| self.registry.get(id))
    }

    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(id) => Phase::Editing(id),
            None => Phase::Idle,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn hours(&self) -> Hours {
        self.hours
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    pub fn total_charge(&self) -> Option<Charge> {
        self.last_receipt.as_ref().map(Receipt::total)
    }

    pub fn booked_count(&self) -> usize {
        self.registry.booked_count()
    }

    /// Whether the tier picker is relevant, i.e. an individual desk is selected.
    pub fn tier_applies(&self) -> bool {
        matches!(
            self.selected_desk().map(|desk| desk.kind),
            Some(DeskKind::Individual)
        )
    }

    /// Handle a click on a desk tile.
    pub fn select(&mut self, id: DeskId) -> Result<DeskId, BookingError> {
        let result = match self.registry.get(id) {
            None => Err(BookingError::UnknownDesk(id)),
            Some(desk) if desk.is_booked => Err(BookingError::AlreadyBooked(id)),
            Some(_) => Ok(id),
        };

        match &result {
            Ok(id) => {
                self.selected = Some(*id);
                self.error = None;
                tracing::debug!(desk = id.get(), "desk selected");
            }
            Err(err) => {
                tracing::warn!(desk = id.get(), error = %err, "desk selection rejected");
                self.error = Some(err.to_string());
            }
        }
        result
    }

    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    pub fn set_hours(&mut self, hours: Hours) {
        self.hours = hours;
    }

    /// Apply raw text from the hours field. Invalid input keeps the previous value.
    pub fn set_hours_input(&mut self, input: &str) -> Result<Hours, BookingError> {
        match Hours::parse(input) {
            Ok(hours) => {
                self.hours = hours;
                self.error = None;
                Ok(hours)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Price the current selection without booking it.
    pub fn preview(&self) -> Option<Quote> {
        let desk = self.selected_desk()?;
        Some(self.rates.quote(desk.kind, self.tier, self.hours))
    }

    /// Confirm the booking for the selected desk.
    ///
    /// Returns `Ok(None)` when nothing is selected.
    pub fn confirm(&mut self) -> Result<Option<Receipt>, BookingError> {
        let Some(id) = self.selected else {
            return Ok(None);
        };

        let desk = match self.registry.get(id) {
            Some(desk) if desk.is_booked => Err(BookingError::AlreadyBooked(id)),
            Some(desk) => Ok(*desk),
            None => Err(BookingError::UnknownDesk(id)),
        };
        let desk = match desk {
            Ok(desk) => desk,
            Err(err) => {
                self.error = Some(err.to_string());
                self.selected = None;
                return Err(err);
            }
        };

        let quote = self.rates.quote(desk.kind, self.tier, self.hours);
        self.registry = self.registry.with_booked(id)?;

        let receipt = Receipt {
            desk: id,
            kind: desk.kind,
            tier: match desk.kind {
                DeskKind::Individual => Some(self.tier),
                DeskKind::Team => None,
            },
            hours: self.hours,
            quote,
            booked_at: Local::now(),
        };

        tracing::info!(
            desk = id.get(),
            kind = desk.kind.as_str(),
            hours = self.hours.get(),
            total = %receipt.total(),
            "desk booked"
        );

        self.last_receipt = Some(receipt.clone());
        self.selected = None;
        self.error = None;
        Ok(Some(receipt))
    }
}
