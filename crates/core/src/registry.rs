use std::sync::Arc;

use crate::config::LayoutConfig;
use crate::error::BookingError;
use crate::model::{Desk, DeskId, DeskKind};

/// Ordered, immutable snapshot of every desk.
///
/// Bookings never touch a snapshot in place: [`DeskRegistry::with_booked`]
/// hands back a registry backed by a fresh allocation, so holders of the old
/// snapshot can detect the change with [`DeskRegistry::same_snapshot`].
#[derive(Debug, Clone)]
pub struct DeskRegistry {
    desks: Arc<[Desk]>,
}

impl DeskRegistry {
    pub fn seeded(layout: LayoutConfig) -> Self {
        let individual = (0..layout.individual_desks).map(|_| DeskKind::Individual);
        let team = (0..layout.team_desks).map(|_| DeskKind::Team);
        let desks = individual
            .chain(team)
            .enumerate()
            .map(|(idx, kind)| Desk::new(DeskId(idx as u32 + 1), kind))
            .collect::<Vec<_>>();
        Self {
            desks: desks.into(),
        }
    }

    pub fn desks(&self) -> &[Desk] {
        &self.desks
    }

    pub fn len(&self) -> usize {
        self.desks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desks.is_empty()
    }

    pub fn get(&self, id: DeskId) -> Option<&Desk> {
        self.desks.iter().find(|desk| desk.id == id)
    }

    pub fn position(&self, id: DeskId) -> Option<usize> {
        self.desks.iter().position(|desk| desk.id == id)
    }

    pub fn available(&self) -> impl Iterator<Item = &Desk> {
        self.desks.iter().filter(|desk| !desk.is_booked)
    }

    pub fn booked_count(&self) -> usize {
        self.desks.iter().filter(|desk| desk.is_booked).count()
    }

    /// Copy of this registry with `id` marked booked.
    pub fn with_booked(&self, id: DeskId) -> Result<Self, BookingError> {
        match self.get(id) {
            None => return Err(BookingError::UnknownDesk(id)),
            Some(desk) if desk.is_booked => return Err(BookingError::AlreadyBooked(id)),
            Some(_) => {}
        }

        let desks = self
            .desks
            .iter()
            .map(|desk| {
                if desk.id == id {
                    Desk {
                        is_booked: true,
                        ..*desk
                    }
                } else {
                    *desk
                }
            })
            .collect::<Vec<_>>();
        Ok(Self {
            desks: desks.into(),
        })
    }

    pub fn same_snapshot(&self, other: &DeskRegistry) -> bool {
        Arc::ptr_eq(&self.desks, &other.desks)
    }
}

impl Default for DeskRegistry {
    fn default() -> Self {
        Self::seeded(LayoutConfig::default())
    }
}
