use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{Desk, DeskKind, Receipt};
use crate::pricing::Quote;

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);
pub const FG_INDIVIDUAL: Color = Color::Rgb(120, 200, 140);
pub const FG_TEAM: Color = Color::Rgb(230, 180, 90);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

/// Number of tile rows needed to show `count` desks.
pub fn grid_rows(count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    count.div_ceil(columns)
}

/// Move a grid cursor by `(dx, dy)` cells, clamping to the populated cells.
pub fn move_cursor(cursor: usize, count: usize, columns: usize, dx: isize, dy: isize) -> usize {
    if count == 0 || columns == 0 {
        return 0;
    }
    let row = (cursor / columns) as isize;
    let col = (cursor % columns) as isize;
    let rows = grid_rows(count, columns) as isize;

    let new_row = (row + dy).clamp(0, rows - 1);
    let new_col = (col + dx).clamp(0, columns as isize - 1);
    let target = (new_row * columns as isize + new_col) as usize;
    target.min(count - 1)
}

pub fn kind_color(kind: DeskKind) -> Color {
    match kind {
        DeskKind::Individual => FG_INDIVIDUAL,
        DeskKind::Team => FG_TEAM,
    }
}

pub fn tile_style(desk: &Desk, selected: bool) -> Style {
    if desk.is_booked {
        return Style::default()
            .fg(Color::DarkGray)
            .bg(BG_PANEL)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    let style = Style::default().fg(kind_color(desk.kind)).bg(BG_PANEL);
    if selected {
        style.bg(BG_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn tile_border_style(desk: &Desk, selected: bool, focused: bool) -> Style {
    if selected {
        Style::default().fg(Color::Green)
    } else if focused {
        Style::default().fg(FG_ACCENT)
    } else if desk.is_booked {
        Style::default().fg(Color::Rgb(60, 60, 60))
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn format_quote(quote: &Quote) -> String {
    let mut text = format!(
        "{}h × ${}/hr = {}",
        quote.hours,
        quote.rate.normalize(),
        quote.total
    );
    if quote.discounted {
        text.push_str(" (10% off over 3h)");
    }
    text
}

pub fn format_receipt(receipt: &Receipt) -> String {
    let tier = receipt
        .tier
        .map(|tier| format!(", {}", tier.title()))
        .unwrap_or_default();
    format!(
        "Desk {} ({}{}) for {}h at {}",
        receipt.desk,
        receipt.kind,
        tier,
        receipt.hours,
        receipt.booked_at.format("%H:%M")
    )
}

pub fn total_charged_line(receipt: &Receipt) -> String {
    format!("Total Charged: {}", receipt.total())
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("←/→/↑/↓ or h/l/k/j", "Move between desk tiles"),
        ("Enter / Space", "Select the highlighted desk"),
        ("t / T", "Cycle membership tier (individual desks)"),
        ("+ / -", "Add or remove an hour"),
        ("e", "Type the number of hours"),
        ("c", "Confirm booking"),
        ("r", "Reset the session"),
        ("?", "Toggle this help overlay"),
        ("q / Ctrl+C", "Quit"),
        ("Esc", "Dismiss the error line"),
    ]
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}
