//! Hourly pricing for desks.
//!
//! Team desks bill a flat rate; individual desks bill by membership tier.
//! Bookings longer than [`RateCard::discount_after_hours`] get a single
//! percentage discount applied after the base multiplication.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::BookingError;
use crate::model::{DeskKind, Tier};

/// Whole number of booked hours. Always at least one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Hours(u32);

impl Hours {
    pub const MIN: Hours = Hours(1);

    pub fn new(value: u32) -> Result<Self, BookingError> {
        if value == 0 {
            return Err(BookingError::InvalidHours(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parse free-form user input, rejecting anything that is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, BookingError> {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(value) => Self::new(value),
            Err(_) => Err(BookingError::InvalidHours(trimmed.to_string())),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Hours {
    fn default() -> Self {
        Hours::MIN
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Hours {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hours::parse(s)
    }
}

/// Dollar amount kept at full precision; rounded only when displayed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct Charge(Decimal);

impl Charge {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    pub basic: Decimal,
    pub premium: Decimal,
    pub executive: Decimal,
    pub team: Decimal,
    pub discount_after_hours: u32,
    /// Multiplier applied once the discount threshold is exceeded.
    pub discount_factor: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            basic: Decimal::from(10),
            premium: Decimal::from(15),
            executive: Decimal::from(20),
            team: Decimal::from(25),
            discount_after_hours: 3,
            discount_factor: Decimal::new(9, 1),
        }
    }
}

impl RateCard {
    pub fn tier_rate(&self, tier: Tier) -> Decimal {
        match tier {
            Tier::Basic => self.basic,
            Tier::Premium => self.premium,
            Tier::Executive => self.executive,
        }
    }

    pub fn rate_for(&self, kind: DeskKind, tier: Tier) -> Decimal {
        match kind {
            DeskKind::Team => self.team,
            DeskKind::Individual => self.tier_rate(tier),
        }
    }

    pub fn discount_applies(&self, hours: Hours) -> bool {
        hours.get() > self.discount_after_hours
    }

    pub fn quote(&self, kind: DeskKind, tier: Tier, hours: Hours) -> Quote {
        let rate = self.rate_for(kind, tier);
        let base = rate * Decimal::from(hours.get());
        let discounted = self.discount_applies(hours);
        let total = if discounted {
            base * self.discount_factor
        } else {
            base
        };

        Quote {
            rate,
            hours,
            base: Charge(base),
            discounted,
            total: Charge(total),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Quote {
    pub rate: Decimal,
    pub hours: Hours,
    pub base: Charge,
    pub discounted: bool,
    pub total: Charge,
}

/// Price a booking with the standard rate card.
pub fn quote(kind: DeskKind, tier: Tier, hours: Hours) -> Quote {
    RateCard::default().quote(kind, tier, hours)
}

/// Display label for the tier picker, e.g. `Premium ($15/hr)`.
pub fn tier_option_label(card: &RateCard, tier: Tier) -> String {
    format!("{} (${}/hr)", tier.title(), card.tier_rate(tier).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn hours(value: u32) -> Hours {
        Hours::new(value).unwrap()
    }

    #[rstest]
    #[case(1, 10)]
    #[case(2, 20)]
    #[case(3, 30)]
    fn basic_individual_is_linear_up_to_three_hours(#[case] h: u32, #[case] expected: i64) {
        let quote = quote(DeskKind::Individual, Tier::Basic, hours(h));
        assert_eq!(quote.total.amount(), Decimal::from(expected));
        assert!(!quote.discounted);
    }

    #[rstest]
    #[case(Tier::Basic, Decimal::new(360, 1))]
    #[case(Tier::Premium, Decimal::new(540, 1))]
    #[case(Tier::Executive, Decimal::new(720, 1))]
    fn four_hours_gets_ten_percent_off(#[case] tier: Tier, #[case] expected: Decimal) {
        let quote = quote(DeskKind::Individual, tier, hours(4));
        assert!(quote.discounted);
        assert_eq!(quote.total.amount(), expected);
    }

    #[rstest]
    #[case(Tier::Basic)]
    #[case(Tier::Premium)]
    #[case(Tier::Executive)]
    fn team_rate_ignores_tier(#[case] tier: Tier) {
        assert_eq!(
            quote(DeskKind::Team, tier, hours(2)).total.amount(),
            Decimal::from(50)
        );
        assert_eq!(
            quote(DeskKind::Team, tier, hours(5)).total.amount(),
            Decimal::new(1125, 1)
        );
    }

    #[test]
    fn discount_is_not_compounded() {
        let quote = quote(DeskKind::Individual, Tier::Executive, hours(10));
        assert_eq!(quote.base.amount(), Decimal::from(200));
        assert_eq!(quote.total.amount(), Decimal::from(180));
    }

    #[test]
    fn charge_displays_two_decimals() {
        let charge = quote(DeskKind::Individual, Tier::Premium, hours(4)).total;
        assert_eq!(charge.to_string(), "$54.00");
        assert_eq!(Charge::new(Decimal::new(12345, 3)).to_string(), "$12.35");
    }

    #[test]
    fn hours_parse_rejects_invalid_input() {
        assert_eq!(Hours::parse(" 4 ").unwrap().get(), 4);
        assert_eq!(
            Hours::parse("0"),
            Err(BookingError::InvalidHours("0".into()))
        );
        assert!(Hours::parse("-2").is_err());
        assert!(Hours::parse("abc").is_err());
        assert!(Hours::parse("").is_err());
    }

    #[test]
    fn hours_decrement_floors_at_one() {
        assert_eq!(Hours::MIN.decrement(), Hours::MIN);
        assert_eq!(hours(3).decrement().get(), 2);
        assert_eq!(hours(3).increment().get(), 4);
    }

    #[test]
    fn tier_option_label_shows_hourly_rate() {
        let card = RateCard::default();
        assert_eq!(tier_option_label(&card, Tier::Basic), "Basic ($10/hr)");
        assert_eq!(
            tier_option_label(&card, Tier::Executive),
            "Executive ($20/hr)"
        );
    }
}
