use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::Serialize;

use crate::pricing::{Charge, Hours, Quote};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct DeskId(pub u32);

impl DeskId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for DeskId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<u32>()
            .map(DeskId)
            .map_err(|_| anyhow!("Invalid desk id '{}': expected a number such as 3 or #3", s))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeskKind {
    Individual,
    Team,
}

impl DeskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeskKind::Individual => "individual",
            DeskKind::Team => "team",
        }
    }

    /// Compact label used on desk tiles.
    pub fn tile_label(&self) -> &'static str {
        match self {
            DeskKind::Individual => "Indiv.",
            DeskKind::Team => "Team",
        }
    }
}

impl fmt::Display for DeskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Membership level. Only consulted when pricing individual desks.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Basic,
    Premium,
    Executive,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Premium, Tier::Executive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Premium => "premium",
            Tier::Executive => "executive",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Premium => "Premium",
            Tier::Executive => "Executive",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tier::Basic => Tier::Premium,
            Tier::Premium => Tier::Executive,
            Tier::Executive => Tier::Basic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tier::Basic => Tier::Executive,
            Tier::Premium => Tier::Basic,
            Tier::Executive => Tier::Premium,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Tier::Basic),
            "premium" => Ok(Tier::Premium),
            "executive" | "exec" => Ok(Tier::Executive),
            other => Err(anyhow!(
                "Unknown tier '{}': expected basic|premium|executive",
                other
            )),
        }
    }
}

impl ValueEnum for Tier {
    fn value_variants<'a>() -> &'a [Self] {
        &Tier::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Desk {
    pub id: DeskId,
    pub kind: DeskKind,
    pub is_booked: bool,
}

impl Desk {
    pub fn new(id: DeskId, kind: DeskKind) -> Self {
        Self {
            id,
            kind,
            is_booked: false,
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.kind.tile_label(), self.id)
    }
}

/// Record of a confirmed booking, kept as the last charge shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub desk: DeskId,
    pub kind: DeskKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    pub hours: Hours,
    pub quote: Quote,
    pub booked_at: DateTime<Local>,
}

impl Receipt {
    pub fn total(&self) -> Charge {
        self.quote.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desk_id_parses_with_or_without_hash() {
        assert_eq!("3".parse::<DeskId>().unwrap(), DeskId(3));
        assert_eq!(" #12 ".parse::<DeskId>().unwrap(), DeskId(12));
        assert!("desk".parse::<DeskId>().is_err());
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("Premium".parse::<Tier>().unwrap(), Tier::Premium);
        assert_eq!("EXEC".parse::<Tier>().unwrap(), Tier::Executive);
        assert!("gold".parse::<Tier>().is_err());
    }

    #[test]
    fn tier_cycle_wraps_both_directions() {
        assert_eq!(Tier::Executive.next(), Tier::Basic);
        assert_eq!(Tier::Basic.prev(), Tier::Executive);
        assert_eq!(Tier::default(), Tier::Basic);
    }

    #[test]
    fn desk_label_matches_tile_text() {
        let desk = Desk::new(DeskId(11), DeskKind::Team);
        assert_eq!(desk.label(), "Team #11");
        let desk = Desk::new(DeskId(4), DeskKind::Individual);
        assert_eq!(desk.label(), "Indiv. #4");
    }
}
