use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use rstest::rstest;

use super::input::NormalAction;
use super::{App, InputMode};
use crate::config::AppConfig;
use crate::core::{DeskId, Tier};
use crate::tui::helpers::{centered_rect, grid_rows, move_cursor};

fn app() -> App {
    App::new(&AppConfig::default())
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Move the grid cursor onto `id` (ids are laid out row-major from 1).
fn focus(app: &mut App, id: u32) {
    app.cursor = (id - 1) as usize;
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = centered_rect(40, 10, area);
    assert!(rect.x >= area.x);
    assert!(rect.y >= area.y);
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, 10);
}

#[rstest]
#[case(15, 5, 3)]
#[case(16, 5, 4)]
#[case(0, 5, 0)]
fn grid_rows_rounds_up(#[case] count: usize, #[case] columns: usize, #[case] expected: usize) {
    assert_eq!(grid_rows(count, columns), expected);
}

#[rstest]
#[case(0, -1, 0, 0)]
#[case(4, 1, 0, 4)]
#[case(2, 0, 1, 7)]
#[case(12, 0, 1, 12)]
#[case(7, 0, -1, 2)]
fn move_cursor_clamps_to_grid(
    #[case] cursor: usize,
    #[case] dx: isize,
    #[case] dy: isize,
    #[case] expected: usize,
) {
    assert_eq!(move_cursor(cursor, 15, 5, dx, dy), expected);
}

#[test]
fn ctrl_c_quits_but_plain_c_confirms() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(NormalAction::from_event(&ctrl_c), Some(NormalAction::Quit));
    let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    assert_eq!(NormalAction::from_event(&c), Some(NormalAction::Confirm));
}

#[test]
fn arrow_keys_move_cursor_between_rows() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.cursor, 6);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.cursor, 1);
}

#[test]
fn booking_premium_desk_via_keyboard() {
    let mut app = app();
    focus(&mut app, 3);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.booking.selected(), Some(DeskId(3)));

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.booking.tier(), Tier::Premium);
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('+'));
    }
    assert_eq!(app.booking.hours().get(), 4);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.booking.selected(), None);
    assert_eq!(
        app.booking.total_charge().map(|c| c.to_string()),
        Some("$54.00".to_string())
    );
    assert!(app.booking.registry().get(DeskId(3)).unwrap().is_booked);
}

#[test]
fn selecting_booked_desk_shows_error_and_keeps_total() {
    let mut app = app();
    focus(&mut app, 12);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(
        app.booking.total_charge().map(|c| c.to_string()),
        Some("$50.00".to_string())
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.booking.error(), Some("This desk is already booked!"));
    assert_eq!(app.booking.selected(), None);
    assert_eq!(
        app.booking.total_charge().map(|c| c.to_string()),
        Some("$50.00".to_string())
    );
}

#[test]
fn escape_dismisses_booking_error_line() {
    let mut app = app();
    focus(&mut app, 2);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);
    assert!(app.booking.error().is_some());
    assert!(render(&app).contains("This desk is already booked!"));

    press(&mut app, KeyCode::Esc);
    assert!(app.booking.error().is_none());
    assert!(app.status.is_none());
    assert!(!render(&app).contains("This desk is already booked!"));
}

#[test]
fn tier_cycling_is_ignored_for_team_desks() {
    let mut app = app();
    focus(&mut app, 11);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.booking.tier(), Tier::Basic);
    assert!(app.status.is_some());
}

#[test]
fn typed_hours_are_validated() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.input_mode, InputMode::Hours);

    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "abc");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Hours);
    assert_eq!(app.booking.hours().get(), 1);

    for _ in 0..3 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "6");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.booking.hours().get(), 6);
}

#[test]
fn escape_cancels_hours_edit() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "0");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.booking.hours().get(), 1);
}

#[test]
fn reset_frees_every_desk() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.booking.booked_count(), 1);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.booking.booked_count(), 0);
    assert!(app.booking.total_charge().is_none());
}

#[test]
fn help_overlay_toggles() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.input_mode, InputMode::Help);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn quit_sets_flag() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn render_shows_panel_only_while_selected() {
    let mut app = app();
    let idle = render(&app);
    assert!(idle.contains("Co-working Space Booking"));
    assert!(idle.contains("Indiv. #1"));
    assert!(idle.contains("Team #15"));
    assert!(!idle.contains("Booking Desk"));

    focus(&mut app, 3);
    press(&mut app, KeyCode::Enter);
    let editing = render(&app);
    assert!(editing.contains("Booking Desk #3"));
    assert!(editing.contains("Premium ($15/hr)"));
}

#[test]
fn render_hides_tier_picker_for_team_desks() {
    let mut app = app();
    focus(&mut app, 12);
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Booking Desk #12"));
    assert!(!screen.contains("Basic ($10/hr)"));
}

#[test]
fn render_shows_total_and_error_lines() {
    let mut app = app();
    focus(&mut app, 3);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('t'));
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('+'));
    }
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("Total Charged: $54.00"));
    assert!(screen.contains("This desk is already booked!"));
}
