//! Terminal implementation of the editor UI.
//!
//! Row 0 is the menu bar, the last row is the status line used by dialogs,
//! everything in between is the text region.

use std::io::{self, Stdout, Write, stdout};
use std::path::PathBuf;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::keymap::shortcut;
use super::text_area::TextArea;
use crate::editor::{Choice, Command, FileFilter, MenuState, MessageKind, SaveRequest, Ui};

/// Raw mode and alternate screen for as long as the guard lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen, DisableLineWrap) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, EnableLineWrap, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub struct TerminalUi {
    area: TextArea,
    title: String,
    menu: MenuState,
    out: Stdout,
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUi {
    pub fn new() -> Self {
        Self {
            area: TextArea::new(),
            title: String::new(),
            menu: MenuState::default(),
            out: stdout(),
        }
    }

    pub fn area_mut(&mut self) -> &mut TextArea {
        &mut self.area
    }

    /// Rows in the text region
    pub fn page_height(&self) -> usize {
        terminal::size()
            .map(|(_, height)| usize::from(height).saturating_sub(2))
            .unwrap_or(1)
            .max(1)
    }

    /// Repaint the whole screen
    pub fn draw(&mut self) -> io::Result<()> {
        let width = usize::from(terminal::size()?.0).max(1);
        let body = self.page_height();

        self.area.scroll_to_cursor(width, body);

        queue!(self.out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
        self.draw_menu(width)?;

        let lines: Vec<String> = self.area.visible_lines(width, body).collect();
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16 + 1), Print(line))?;
        }

        let (x, y) = self.area.view_cursor();
        queue!(self.out, MoveTo(x as u16, y as u16 + 1), Show)?;
        self.out.flush()
    }

    fn draw_menu(&mut self, width: usize) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reverse),
            Print(" ".repeat(width)),
            MoveTo(0, 0)
        )?;

        for command in Command::MENU {
            let enabled = match command {
                Command::Save => self.menu.save_enabled,
                Command::SaveAs => self.menu.save_as_enabled,
                _ => true,
            };
            let label = format!(
                " {} {} ",
                command.label().unwrap_or_default(),
                shortcut(command)
            );
            if enabled {
                queue!(self.out, Print(label))?;
            } else {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Dim),
                    Print(label),
                    SetAttribute(Attribute::NormalIntensity)
                )?;
            }
        }

        queue!(
            self.out,
            Print(format!("| {}", self.title)),
            SetAttribute(Attribute::Reset)
        )
    }

    /// Show `text` on the status line and put the cursor after it
    fn draw_status_prompt(&mut self, text: &str) -> io::Result<()> {
        self.draw()?;
        let (width, height) = terminal::size()?;
        let row = height.saturating_sub(1);
        let text = fit(text, usize::from(width));
        let column = text.chars().count().min(usize::from(width).saturating_sub(1));
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset),
            MoveTo(column as u16, row)
        )?;
        self.out.flush()
    }

    /// Line editor on the status line; `None` on Esc or an empty answer
    fn prompt(&mut self, label: &str, initial: &str) -> io::Result<Option<String>> {
        let mut input = initial.to_string();
        loop {
            self.draw_status_prompt(&format!("{label}{input}"))?;
            let key = read_key()?;
            match key.code {
                KeyCode::Enter => {
                    let answer = input.trim();
                    return Ok((!answer.is_empty()).then(|| answer.to_string()));
                }
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.push(c);
                }
                _ => {}
            }
        }
    }

    fn open_dialog(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>> {
        let mut label = format!("Open {filter}: ");
        let mut initial = String::new();
        loop {
            let Some(answer) = self.prompt(&label, &initial)? else {
                return Ok(None);
            };
            let path = PathBuf::from(&answer);
            if filter.matches(&path) {
                return Ok(Some(path));
            }
            label = format!("Not {filter}. Open: ");
            initial = answer;
        }
    }

    fn question_dialog(&mut self, text: &str) -> io::Result<Choice> {
        loop {
            self.draw_status_prompt(text)?;
            let choice = match read_key()?.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Choice::Yes,
                KeyCode::Char('n') | KeyCode::Char('N') => Choice::No,
                KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => Choice::Cancel,
                _ => continue,
            };
            return Ok(choice);
        }
    }
}

impl Ui for TerminalUi {
    fn text(&self) -> String {
        self.area.text()
    }

    fn set_text(&mut self, text: &str) {
        self.area.set_text(text);
    }

    fn set_menu_state(&mut self, state: MenuState) {
        self.menu = state;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        cancel_on_error(self.open_dialog(filter))
    }

    fn pick_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        let label = format!("Save As {}: ", request.filter);
        let initial = request.suggested_path().display().to_string();
        cancel_on_error(self.prompt(&label, &initial)).map(PathBuf::from)
    }

    fn show_message(&mut self, title: &str, body: &str, kind: MessageKind) {
        let text = format!(
            "[{}] {title}: {} (press any key)",
            tag(kind),
            body.replace('\n', " | ")
        );
        if let Err(err) = self.draw_status_prompt(&text).and_then(|()| read_key()) {
            log::error!("Terminal dialog failed: {}", err);
        }
    }

    fn ask_yes_no_cancel(&mut self, title: &str, body: &str, kind: MessageKind) -> Choice {
        let text = format!("[{}] {title}: {body} [y]es / [n]o / [c]ancel", tag(kind));
        cancel_on_error(self.question_dialog(&text).map(Some)).unwrap_or(Choice::Cancel)
    }
}

fn tag(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "Info",
        MessageKind::Warning => "Warning",
        MessageKind::Error => "Error",
    }
}

/// Block until a key is pressed
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(key);
            }
        }
    }
}

/// Log terminal failures inside a dialog and treat them as a cancel
fn cancel_on_error<T>(result: io::Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|err| {
        log::error!("Terminal dialog failed: {}", err);
        None
    })
}

fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
