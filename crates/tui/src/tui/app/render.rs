use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::pricing::tier_option_label;
use crate::core::Tier;
use crate::tui::constants::{APP_TITLE, APP_VERSION, GRID_COLUMNS, TILE_HEIGHT};
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, format_quote, format_receipt, grid_rows,
    inset_rect, tile_border_style, tile_style, total_charged_line, BG_ACCENT, BG_BASE, BG_PANEL,
};

use super::{App, InputMode};

const PANEL_HEIGHT: u16 = 7;

impl App {
    pub(crate) fn draw(&self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);

        let rows = grid_rows(self.booking.desks().len(), GRID_COLUMNS) as u16;
        let grid_height = rows.saturating_mul(TILE_HEIGHT).saturating_add(2);
        let panel_height = if self.booking.selected().is_some() {
            PANEL_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(grid_height),
                Constraint::Length(panel_height),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_grid(f, chunks[1]);
        if panel_height > 0 {
            self.draw_booking_panel(f, chunks[2]);
        }
        self.draw_outcome(f, chunks[3]);
        self.draw_footer(f, chunks[5]);

        if self.input_mode == InputMode::Help {
            self.draw_help_overlay(f, size);
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", APP_VERSION),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} of {} desks free",
                    self.booking.registry().available().count(),
                    self.booking.desks().len()
                ),
                Style::default().fg(Color::Gray),
            ),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BASE)),
            area,
        );
    }

    fn draw_grid(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("Desks"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let desks = self.booking.desks();
        let rows = grid_rows(desks.len(), GRID_COLUMNS);
        let mut row_constraints = vec![Constraint::Length(TILE_HEIGHT); rows];
        row_constraints.push(Constraint::Min(0));
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(inner);

        let selected = self.booking.selected();
        for (row_idx, row) in desks.chunks(GRID_COLUMNS).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, GRID_COLUMNS as u32);
                    GRID_COLUMNS
                ])
                .split(row_areas[row_idx]);

            for (col_idx, desk) in row.iter().enumerate() {
                let index = row_idx * GRID_COLUMNS + col_idx;
                let is_selected = selected == Some(desk.id);
                let focused = index == self.cursor;

                let mut label = desk.label();
                if desk.is_booked {
                    label.push_str(" ✓");
                }
                let tile = Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(tile_style(desk, is_selected))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(tile_border_style(desk, is_selected, focused)),
                    );
                f.render_widget(tile, cells[col_idx]);
            }
        }
    }

    fn draw_booking_panel(&self, f: &mut Frame<'_>, area: Rect) {
        let Some(desk) = self.booking.selected_desk() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&format!("Booking Desk {}", desk.id)))
            .border_style(Style::default().fg(Color::Green))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();
        if self.booking.tier_applies() {
            let mut spans = vec![Span::styled("Tier   ", Style::default().fg(Color::Gray))];
            for tier in Tier::ALL {
                let label = format!(" {} ", tier_option_label(self.booking.rates(), tier));
                let style = if tier == self.booking.tier() {
                    Style::default()
                        .fg(Color::Green)
                        .bg(BG_ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(label, style));
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Rate   ", Style::default().fg(Color::Gray)),
                Span::raw(format!(
                    "Team desk (${}/hr)",
                    self.booking.rates().team.normalize()
                )),
            ]));
        }

        let hours_text = if self.input_mode == InputMode::Hours {
            let mut text = self.hours_input.as_str().to_string();
            let byte_idx = text
                .char_indices()
                .nth(self.hours_input.cursor())
                .map(|(idx, _)| idx)
                .unwrap_or(text.len());
            text.insert(byte_idx, '▏');
            text
        } else {
            self.booking.hours().to_string()
        };
        lines.push(Line::from(vec![
            Span::styled("Hours  ", Style::default().fg(Color::Gray)),
            Span::styled(hours_text, Style::default().add_modifier(Modifier::BOLD)),
        ]));

        if let Some(quote) = self.booking.preview() {
            lines.push(Line::from(vec![
                Span::styled("Quote  ", Style::default().fg(Color::Gray)),
                Span::raw(format_quote(&quote)),
            ]));
        }

        lines.push(Line::from(vec![Span::styled(
            "c confirm booking • e type hours • +/- adjust",
            Style::default().fg(Color::DarkGray),
        )]));

        f.render_widget(
            Paragraph::new(lines).style(Style::default().bg(BG_PANEL)),
            inner,
        );
    }

    fn draw_outcome(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = Vec::new();
        if let Some(error) = self.booking.error() {
            lines.push(Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )]));
        }
        if let Some(receipt) = self.booking.last_receipt() {
            lines.push(Line::from(vec![
                Span::styled(
                    total_charged_line(receipt),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format_receipt(receipt), Style::default().fg(Color::DarkGray)),
            ]));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            Line::from(vec![Span::raw("Ready")])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        let help = match self.input_mode {
            InputMode::Normal => {
                "arrows/hjkl move | enter select | t tier | +/- hours | e edit hours | c confirm | r reset | ? help | q quit"
            }
            InputMode::Hours => "Enter to apply • Esc to cancel",
            InputMode::Help => "Enter/Esc to close ❔",
        };
        let help_line = Line::from(vec![Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )]);
        f.render_widget(Paragraph::new(help_line), lines[1]);
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 80);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(8);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(combo, Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::raw(desc),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(help_lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }
}
