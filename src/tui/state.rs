use crate::config::Config;
use crate::model::FormInput;
use crate::model::parser::FIELD_COUNT;
use crate::tui::action::Action;
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

pub struct AppState {
    pub form: FormInput,
    pub focused: usize,
    pub list_state: ListState,
    pub output: String,
    pub message: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut form = FormInput::default();
        if config.prefill_today {
            let today = Local::now().date_naive();
            form.year = today.year().to_string();
            form.month = today.month().to_string();
            form.day = today.day().to_string();
        }
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            form,
            focused: 0,
            list_state,
            output: String::new(),
            message: "Tab: Next Field | ^B: Block | Enter: View | ^D: Del | ^R: Recur".to_string(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused = if self.focused >= FIELD_COUNT - 1 {
            0
        } else {
            self.focused + 1
        };
        self.list_state.select(Some(self.focused));
    }

    pub fn previous_field(&mut self) {
        self.focused = if self.focused == 0 {
            FIELD_COUNT - 1
        } else {
            self.focused - 1
        };
        self.list_state.select(Some(self.focused));
    }

    pub fn enter_char(&mut self, c: char) {
        self.form.get_mut(self.focused).push(c);
    }

    pub fn delete_char(&mut self) {
        self.form.get_mut(self.focused).pop();
    }

    /// Maps a key press to either a form edit (handled here) or an Action
    /// for the dispatcher.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('b') => Some(Action::BlockTime),
                KeyCode::Char('v') => Some(Action::ViewSchedule),
                KeyCode::Char('d') => Some(Action::DeleteEvent),
                KeyCode::Char('r') => Some(Action::AddRecurring),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::ViewSchedule),
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                None
            }
            KeyCode::Char(c) => {
                self.enter_char(c);
                None
            }
            KeyCode::Backspace => {
                self.delete_char();
                None
            }
            _ => None,
        }
    }
}
