use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{BookArgs, BookingRequest, CliCommand, DesksArgs, QuoteArgs};
use crate::config::AppConfig;
use crate::core::{BookingError, BookingState, DeskId, DeskRegistry, Hours, Receipt};

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Desks(args) => handle_desks(config, &args, &mut writer),
        CliCommand::Quote(args) => handle_quote(config, &args, &mut writer),
        CliCommand::Book(args) => handle_book(config, &args, &mut writer),
        CliCommand::Tui => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_desks<W: Write>(config: &AppConfig, args: &DesksArgs, mut writer: W) -> Result<()> {
    let registry = DeskRegistry::seeded(config.layout());
    if args.json {
        serde_json::to_writer_pretty(&mut writer, registry.desks())?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "{:<6} {:<12} {}", "ID", "TYPE", "STATUS")?;
    for desk in registry.desks() {
        writeln!(
            writer,
            "{:<6} {:<12} {}",
            desk.id.to_string(),
            desk.kind.as_str(),
            if desk.is_booked { "booked" } else { "free" }
        )?;
    }
    Ok(())
}

fn handle_quote<W: Write>(config: &AppConfig, args: &QuoteArgs, mut writer: W) -> Result<()> {
    let hours = Hours::parse(&args.hours)?;
    let mut state = BookingState::new(config.layout());
    state.select(args.desk)?;
    state.set_tier(args.tier);
    state.set_hours(hours);

    let (Some(desk), Some(quote)) = (state.selected_desk(), state.preview()) else {
        return Err(anyhow!("Desk {} could not be priced", args.desk));
    };

    let tier = if state.tier_applies() {
        format!(", {}", args.tier.title())
    } else {
        String::new()
    };
    writeln!(
        writer,
        "{} ({}{}): {}h × ${}/hr = {}{}",
        desk.label(),
        desk.kind,
        tier,
        quote.hours,
        quote.rate.normalize(),
        quote.total,
        if quote.discounted {
            " (10% multi-hour discount)"
        } else {
            ""
        }
    )?;
    Ok(())
}

fn handle_book<W: Write>(config: &AppConfig, args: &BookArgs, mut writer: W) -> Result<()> {
    let mut state = BookingState::new(config.layout());
    let mut summary = SessionSummary::default();

    for request in &args.requests {
        match book_one(&mut state, request) {
            Ok(receipt) => {
                writeln!(
                    writer,
                    "{} booked for {}h: Total Charged: {}",
                    request_label(&state, request.desk),
                    receipt.hours,
                    receipt.total()
                )?;
                summary.booked += 1;
            }
            Err(err) => {
                writeln!(writer, "Desk {}: {}", request.desk, err)?;
                summary.rejected += 1;
            }
        }
    }

    writeln!(writer, "{}", summary)?;
    Ok(())
}

fn book_one(state: &mut BookingState, request: &BookingRequest) -> Result<Receipt, BookingError> {
    state.select(request.desk)?;
    state.set_tier(request.tier);
    state.set_hours(request.hours);
    match state.confirm()? {
        Some(receipt) => Ok(receipt),
        None => Err(BookingError::UnknownDesk(request.desk)),
    }
}

fn request_label(state: &BookingState, id: DeskId) -> String {
    state
        .registry()
        .get(id)
        .map(|desk| desk.label())
        .unwrap_or_else(|| format!("Desk {}", id))
}

#[derive(Debug, Default)]
struct SessionSummary {
    booked: usize,
    rejected: usize,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} booking{} confirmed",
            self.booked,
            if self.booked == 1 { "" } else { "s" }
        )?;
        if self.rejected > 0 {
            write!(f, ", {} rejected", self.rejected)?;
        }
        Ok(())
    }
}
