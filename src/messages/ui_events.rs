//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation
    NextField,
    PrevField,

    // Draft editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    AddOption,
    SubmitPoll,

    // Poll list
    SelectPrev,
    SelectNext,
    Vote,
    Refresh,

    // Popups
    ToggleHelp,
    CloseHelp,
    DismissNotice,

    // System
    Quit,
}

/// Focused area of the screen (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Question,
    /// Draft option at this index
    Option(usize),
    Polls,
}

impl Focus {
    pub fn next(&self, option_count: usize) -> Focus {
        match self {
            Focus::Question if option_count > 0 => Focus::Option(0),
            Focus::Question => Focus::Polls,
            Focus::Option(i) if i + 1 < option_count => Focus::Option(i + 1),
            Focus::Option(_) => Focus::Polls,
            Focus::Polls => Focus::Question,
        }
    }

    pub fn prev(&self, option_count: usize) -> Focus {
        match self {
            Focus::Question => Focus::Polls,
            Focus::Option(0) => Focus::Question,
            Focus::Option(i) => Focus::Option(i - 1),
            Focus::Polls if option_count > 0 => Focus::Option(option_count - 1),
            Focus::Polls => Focus::Question,
        }
    }

    pub fn is_form_field(&self) -> bool {
        !matches!(self, Focus::Polls)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: Focus,
    input_mode: InputMode,
    show_help: bool,
    show_notice: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Popups swallow the next key
    if show_notice {
        return Some(UiEvent::DismissNotice);
    }
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char('a') => Some(UiEvent::AddOption),
            KeyCode::Char('s') => Some(UiEvent::SubmitPoll),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Char('e') | KeyCode::Enter if focus.is_form_field() => {
                Some(UiEvent::StartEditing)
            }
            KeyCode::Char('v') | KeyCode::Enter if focus == Focus::Polls => Some(UiEvent::Vote),
            KeyCode::Up if focus == Focus::Polls => Some(UiEvent::SelectPrev),
            KeyCode::Down if focus == Focus::Polls => Some(UiEvent::SelectNext),
            KeyCode::Up => Some(UiEvent::PrevField),
            KeyCode::Down => Some(UiEvent::NextField),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
