use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{value_parser, Args, Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::model::{DeskId, Tier};
use crate::pricing::Hours;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "deskbook",
    version,
    about = "Book co-working desks from the terminal.",
    after_help = "Examples:\n  deskbook                 Launch the TUI (same as `deskbook tui`)\n  deskbook desks --json\n  deskbook quote --desk 3 --tier premium --hours 4\n  deskbook book 3:4:premium 12:2 3:1"
)]
pub struct Cli {
    /// Number of individual desks to seed (ids start at 1)
    #[arg(long, value_name = "N", global = true, value_parser = value_parser!(u32))]
    pub individual_desks: Option<u32>,

    /// Number of team desks to seed (ids follow the individual desks)
    #[arg(long, value_name = "N", global = true, value_parser = value_parser!(u32))]
    pub team_desks: Option<u32>,

    /// Override the tracing filter (e.g. "info", "debug", or full directives)
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            individual_desks: self.individual_desks,
            team_desks: self.team_desks,
            log_filter: self.log_filter.clone(),
            log_file: self.log_file.clone(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(CliCommand::Tui))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the keyboard-driven booking UI (default command)
    Tui,
    /// List the seeded desks
    Desks(DesksArgs),
    /// Price a desk without booking it
    Quote(QuoteArgs),
    /// Run a sequence of bookings against a fresh session
    Book(BookArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DesksArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Desk id (e.g. 3 or #3)
    #[arg(long, value_name = "ID")]
    pub desk: DeskId,

    /// Membership tier (ignored for team desks)
    #[arg(long, value_enum, default_value_t = Tier::Basic)]
    pub tier: Tier,

    /// Booking duration in whole hours
    #[arg(long, value_name = "HOURS", default_value = "1")]
    pub hours: String,
}

#[derive(Args, Debug, Clone)]
pub struct BookArgs {
    /// Bookings as DESK:HOURS[:TIER], applied in order
    #[arg(value_name = "DESK:HOURS[:TIER]", required = true)]
    pub requests: Vec<BookingRequest>,
}

/// One scripted booking: which desk, how long, and at which tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub desk: DeskId,
    pub hours: Hours,
    pub tier: Tier,
}

impl FromStr for BookingRequest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let desk = parts
            .next()
            .filter(|part| !part.trim().is_empty())
            .ok_or_else(|| anyhow!("Booking '{}' is missing a desk id", s))?
            .parse::<DeskId>()?;
        let hours = parts
            .next()
            .ok_or_else(|| anyhow!("Booking '{}' is missing hours (use DESK:HOURS)", s))?
            .parse::<Hours>()?;
        let tier = match parts.next() {
            Some(raw) => raw.parse::<Tier>()?,
            None => Tier::default(),
        };
        if parts.next().is_some() {
            return Err(anyhow!(
                "Booking '{}' has too many fields: expected DESK:HOURS[:TIER]",
                s
            ));
        }
        Ok(Self { desk, hours, tier })
    }
}

impl fmt::Display for BookingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.desk.get(), self.hours, self.tier.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn booking_request_parses_optional_tier() {
        let request: BookingRequest = "3:4:premium".parse().unwrap();
        assert_eq!(request.desk, DeskId(3));
        assert_eq!(request.hours.get(), 4);
        assert_eq!(request.tier, Tier::Premium);

        let request: BookingRequest = "#12:2".parse().unwrap();
        assert_eq!(request.tier, Tier::Basic);
        assert_eq!(request.to_string(), "12:2:basic");
    }

    #[test]
    fn booking_request_rejects_bad_input() {
        assert!("3".parse::<BookingRequest>().is_err());
        assert!("3:0".parse::<BookingRequest>().is_err());
        assert!(":2".parse::<BookingRequest>().is_err());
        assert!("3:2:gold".parse::<BookingRequest>().is_err());
        assert!("3:2:basic:extra".parse::<BookingRequest>().is_err());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["deskbook", "desks", "--team-desks", "2"]).unwrap();
        assert_eq!(cli.team_desks, Some(2));
        assert!(!cli.is_interactive());

        let cli = Cli::try_parse_from(["deskbook"]).unwrap();
        assert!(cli.is_interactive());
    }

    #[test]
    fn quote_accepts_hash_prefixed_desk_ids() {
        let cli =
            Cli::try_parse_from(["deskbook", "quote", "--desk", "#3", "--hours", "4"]).unwrap();
        let Some(CliCommand::Quote(args)) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.desk, DeskId(3));
        assert_eq!(args.hours, "4");

        let cli = Cli::try_parse_from(["deskbook", "quote", "--desk", "12"]).unwrap();
        assert!(matches!(cli.command, Some(CliCommand::Quote(args)) if args.desk == DeskId(12)));
    }
}
