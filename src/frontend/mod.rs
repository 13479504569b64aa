//! Terminal Frontend
//!
//! Runs the editor in a terminal: reads keys, maps them to commands or text
//! edits and hands commands to the controller.

pub mod keymap;
pub mod terminal;
pub mod text_area;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use crate::config::Config;
use crate::core::OsFileSystem;
use crate::editor::{Command, EditorController, EditorOptions, Outcome};
use keymap::Action;
use terminal::{TerminalGuard, TerminalUi};

pub use text_area::{Edit, TextArea};

/// Run the editor until the user exits
pub fn run(config: &Config) -> Result<()> {
    let _guard = TerminalGuard::enter().context("failed to set up the terminal")?;

    let mut controller =
        EditorController::new(TerminalUi::new(), OsFileSystem, EditorOptions::from(config));

    if let Some(path) = &config.startup_file {
        controller.open_path(path);
    }

    loop {
        controller.ui_mut().draw().context("failed to draw the screen")?;

        // Anything other than a key (resize, focus, mouse) just triggers a redraw
        let Event::Key(key) = event::read().context("failed to read terminal input")? else {
            continue;
        };

        let page = controller.ui().page_height();
        match keymap::action_for(&key, page) {
            Some(Action::Command(command)) => {
                if controller.handle(command) == Outcome::Exit {
                    break;
                }
            }
            Some(Action::Edit(edit)) => {
                if controller.ui_mut().area_mut().apply(edit) {
                    controller.handle(Command::TextChanged);
                }
            }
            None => {}
        }
    }

    Ok(())
}
