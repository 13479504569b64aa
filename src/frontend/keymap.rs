//! Key bindings for the terminal frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::text_area::Edit;
use crate::editor::Command;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Edit(Edit),
}

/// Shortcut shown next to a menu item
pub fn shortcut(command: Command) -> &'static str {
    match command {
        Command::New => "^N",
        Command::Open => "^O",
        Command::Save => "^S",
        Command::SaveAs => "F12",
        Command::Exit => "^Q",
        Command::About => "F1",
        Command::TextChanged => "",
    }
}

/// Map a key event to an action; `page` is the number of rows PageUp/PageDown move
pub fn action_for(key: &KeyEvent, page: usize) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let action = match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'n' => Action::Command(Command::New),
            'o' => Action::Command(Command::Open),
            's' if shift || c.is_ascii_uppercase() => Action::Command(Command::SaveAs),
            's' => Action::Command(Command::Save),
            'q' => Action::Command(Command::Exit),
            _ => return None,
        },
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => Action::Edit(Edit::Insert(c)),
        KeyCode::F(1) => Action::Command(Command::About),
        KeyCode::F(12) => Action::Command(Command::SaveAs),
        KeyCode::Enter => Action::Edit(Edit::Newline),
        KeyCode::Tab => Action::Edit(Edit::Insert('\t')),
        KeyCode::Backspace => Action::Edit(Edit::Backspace),
        KeyCode::Delete => Action::Edit(Edit::Delete),
        KeyCode::Left => Action::Edit(Edit::Left),
        KeyCode::Right => Action::Edit(Edit::Right),
        KeyCode::Up => Action::Edit(Edit::Up),
        KeyCode::Down => Action::Edit(Edit::Down),
        KeyCode::Home => Action::Edit(Edit::Home),
        KeyCode::End => Action::Edit(Edit::End),
        KeyCode::PageUp => Action::Edit(Edit::PageUp(page)),
        KeyCode::PageDown => Action::Edit(Edit::PageDown(page)),
        _ => return None,
    };

    Some(action)
}
