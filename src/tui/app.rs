use crate::todo::ids::IdStrategy;
use crate::todo::intent::Intent;
use crate::todo::models::{TodoId, TodoState};
use crate::todo::store::TodoStore;
use crate::tui::handlers::{HelpModeAction, InputModeAction, KeyHandler, ListModeAction};
use crate::tui::input::InputState;
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug)]
pub struct App {
    store: TodoStore,
    pub input: InputState,
    pub focus: Focus,
    pub selected_index: usize,
    pub help_mode: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            store: TodoStore::new(strategy),
            input: InputState::new(),
            focus: Focus::Input,
            selected_index: 0,
            help_mode: false,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else {
            match self.focus {
                Focus::Input => self.handle_input_mode_key(key_event),
                Focus::List => self.handle_list_mode_key(key_event),
            }
        }
        Ok(())
    }

    fn handle_input_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::Quit => self.should_quit = true,
            InputModeAction::Submit => self.submit_input(),
            InputModeAction::FocusList => self.focus = Focus::List,
            InputModeAction::Backspace => self.input.backspace(),
            InputModeAction::Delete => self.input.delete(),
            InputModeAction::DeleteWordBackward => self.input.delete_word_backward(),
            InputModeAction::MoveCursorLeft => self.input.move_cursor_left(),
            InputModeAction::MoveCursorRight => self.input.move_cursor_right(),
            InputModeAction::MoveCursorHome => self.input.move_cursor_home(),
            InputModeAction::MoveCursorEnd => self.input.move_cursor_end(),
            InputModeAction::InsertChar(c) => self.input.insert_char(c),
            InputModeAction::None => {}
        }
    }

    fn handle_list_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_list_mode_key(key_event) {
            ListModeAction::Quit => self.should_quit = true,
            ListModeAction::MoveSelectionUp => self.move_selection_up(),
            ListModeAction::MoveSelectionDown => self.move_selection_down(),
            ListModeAction::ToggleSelected => self.toggle_selected_item(),
            ListModeAction::DeleteSelected => self.delete_selected_item(),
            ListModeAction::FocusInput => self.focus = Focus::Input,
            ListModeAction::ToggleHelpMode => self.help_mode = true,
            ListModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::Quit => self.should_quit = true,
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    /// Adds the input as a new todo and clears it. Blank input is ignored and
    /// left in place.
    fn submit_input(&mut self) {
        match Intent::add_from_input(&self.input.buffer) {
            Some(intent) => {
                self.store.dispatch(intent);
                self.input.clear();
                self.selected_index = self.state().len() - 1;
            }
            None => debug!("ignoring blank input"),
        }
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.state().todos().get(self.selected_index).map(|item| item.id())
    }

    fn toggle_selected_item(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(Intent::Toggle(id));
        }
    }

    fn delete_selected_item(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(Intent::Delete(id));
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.state().len().saturating_sub(1));
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.state().len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn total_items(&self) -> usize {
        self.state().len()
    }

    pub fn completed_items(&self) -> usize {
        self.state().completed_count()
    }
}
