use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPane,
    PrevPane,
    Down,
    Up,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    TopPrefix,
    Bottom,
}

impl Action {
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            Self::Down
                | Self::Up
                | Self::HalfPageDown
                | Self::HalfPageUp
                | Self::PageDown
                | Self::PageUp
                | Self::TopPrefix
                | Self::Bottom
        )
    }
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') if !ctrl => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::NextPane),
        KeyCode::Char('p') if ctrl => Some(Action::PrevPane),
        KeyCode::Char('j') if key.modifiers.is_empty() => Some(Action::Down),
        KeyCode::Char('k') if key.modifiers.is_empty() => Some(Action::Up),
        KeyCode::Char('d') if ctrl => Some(Action::HalfPageDown),
        KeyCode::Char('u') if ctrl => Some(Action::HalfPageUp),
        KeyCode::Char('f') if ctrl => Some(Action::PageDown),
        KeyCode::Char('b') if ctrl => Some(Action::PageUp),
        KeyCode::Char('g') if key.modifiers.is_empty() => Some(Action::TopPrefix),
        KeyCode::Char('G') if !ctrl => Some(Action::Bottom),
        _ => None,
    }
}

/// Two-stroke `g g` recognizer. Every input, mapped or not, moves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopGesture {
    #[default]
    Idle,
    AwaitingConfirm,
}

impl TopGesture {
    /// Feeds one input and returns whether it completed the gesture.
    pub fn advance(&mut self, action: Option<Action>) -> bool {
        let (next, fired) = match (*self, action) {
            (Self::Idle, Some(Action::TopPrefix)) => (Self::AwaitingConfirm, false),
            (Self::AwaitingConfirm, Some(Action::TopPrefix)) => (Self::Idle, true),
            _ => (Self::Idle, false),
        };
        *self = next;
        fired
    }
}
