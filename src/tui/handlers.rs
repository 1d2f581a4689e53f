use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_input_mode_key(key_event: KeyEvent) -> InputModeAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => InputModeAction::Quit,
            KeyCode::Char('w') if ctrl => InputModeAction::DeleteWordBackward,
            KeyCode::Enter => InputModeAction::Submit,
            KeyCode::Esc | KeyCode::Tab => InputModeAction::FocusList,
            KeyCode::Backspace => InputModeAction::Backspace,
            KeyCode::Delete => InputModeAction::Delete,
            KeyCode::Left => InputModeAction::MoveCursorLeft,
            KeyCode::Right => InputModeAction::MoveCursorRight,
            KeyCode::Home => InputModeAction::MoveCursorHome,
            KeyCode::End => InputModeAction::MoveCursorEnd,
            KeyCode::Char(c) if !ctrl => InputModeAction::InsertChar(c),
            _ => InputModeAction::None,
        }
    }

    pub fn handle_list_mode_key(key_event: KeyEvent) -> ListModeAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                ListModeAction::Quit
            }
            KeyCode::Char('q') => ListModeAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => ListModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => ListModeAction::MoveSelectionDown,
            KeyCode::Enter | KeyCode::Char(' ') => ListModeAction::ToggleSelected,
            KeyCode::Char('d') | KeyCode::Delete => ListModeAction::DeleteSelected,
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => ListModeAction::FocusInput,
            KeyCode::Char('?') => ListModeAction::ToggleHelpMode,
            _ => ListModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                HelpModeAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InputModeAction {
    None,
    Quit,
    Submit,
    FocusList,
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum ListModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleSelected,
    DeleteSelected,
    FocusInput,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    Quit,
    ExitHelpMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_input_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Submit);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::FocusList);

        let key_event = KeyEvent::from(KeyCode::Tab);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::FocusList);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Home);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::MoveCursorHome);
    }

    #[test]
    fn test_input_mode_letters_are_text() {
        // Keys that are commands in the list are plain text while typing.
        for c in ['q', 'd', 'j', 'k', ' ', '?'] {
            let key_event = KeyEvent::from(KeyCode::Char(c));
            assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::InsertChar(c));
        }
    }

    #[test]
    fn test_input_mode_ctrl_keys() {
        assert_eq!(KeyHandler::handle_input_mode_key(ctrl('c')), InputModeAction::Quit);
        assert_eq!(KeyHandler::handle_input_mode_key(ctrl('w')), InputModeAction::DeleteWordBackward);
        assert_eq!(KeyHandler::handle_input_mode_key(ctrl('x')), InputModeAction::None);
    }

    #[test]
    fn test_list_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::ToggleSelected);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::ToggleSelected);

        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::DeleteSelected);

        let key_event = KeyEvent::from(KeyCode::Char('i'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::FocusInput);

        assert_eq!(KeyHandler::handle_list_mode_key(ctrl('c')), ListModeAction::Quit);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);

        assert_eq!(KeyHandler::handle_help_mode_key(ctrl('c')), HelpModeAction::Quit);
    }
}
