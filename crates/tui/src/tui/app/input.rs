use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, InputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NormalAction {
    Quit,
    Move { dx: isize, dy: isize },
    SelectDesk,
    NextTier,
    PrevTier,
    MoreHours,
    FewerHours,
    EditHours,
    Confirm,
    Reset,
    ShowHelp,
    DismissError,
}

impl NormalAction {
    pub(crate) fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::Move { dx: -1, dy: 0 }),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::Move { dx: 1, dy: 0 }),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::Move { dx: 0, dy: -1 }),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::Move { dx: 0, dy: 1 }),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::SelectDesk),
            KeyCode::Char('t') | KeyCode::Tab => Some(Self::NextTier),
            KeyCode::Char('T') | KeyCode::BackTab => Some(Self::PrevTier),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Self::MoreHours),
            KeyCode::Char('-') => Some(Self::FewerHours),
            KeyCode::Char('e') => Some(Self::EditHours),
            KeyCode::Char('c') => Some(Self::Confirm),
            KeyCode::Char('r') => Some(Self::Reset),
            KeyCode::Char('?') => Some(Self::ShowHelp),
            KeyCode::Esc => Some(Self::DismissError),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Hours => self.handle_hours_mode(key),
            InputMode::Help => self.handle_help_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action);
        }
    }

    fn execute_normal_action(&mut self, action: NormalAction) {
        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::Move { dx, dy } => self.move_cursor(dx, dy),
            NormalAction::SelectDesk => self.select_cursor_desk(),
            NormalAction::NextTier => self.cycle_tier(true),
            NormalAction::PrevTier => self.cycle_tier(false),
            NormalAction::MoreHours => self.adjust_hours(true),
            NormalAction::FewerHours => self.adjust_hours(false),
            NormalAction::EditHours => self.begin_hours_edit(),
            NormalAction::Confirm => self.confirm_booking(),
            NormalAction::Reset => self.reset_session(),
            NormalAction::ShowHelp => self.show_help_overlay(),
            NormalAction::DismissError => self.dismiss_error(),
        }
    }

    fn handle_hours_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.apply_hours_edit(),
            KeyCode::Esc => self.cancel_hours_edit(),
            KeyCode::Backspace => self.hours_input.backspace(),
            KeyCode::Delete => self.hours_input.delete_char(),
            KeyCode::Left => self.hours_input.move_left(),
            KeyCode::Right => self.hours_input.move_right(),
            KeyCode::Home => self.hours_input.move_home(),
            KeyCode::End => self.hours_input.move_end(),
            KeyCode::Char(c) => self.hours_input.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            _ => {}
        }
    }
}
