//! Scripted UI shared by the integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use textpad::editor::{
    Choice, Command, EditorController, EditorOptions, FileFilter, MenuState, MessageKind,
    SaveRequest, Ui,
};

/// A `Ui` that answers dialogs from queued replies and records what it was shown
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pub text: String,
    pub menu: MenuState,
    pub title: String,
    pub open_replies: VecDeque<Option<PathBuf>>,
    pub save_replies: VecDeque<Option<PathBuf>>,
    pub choices: VecDeque<Choice>,
    pub open_filters: Vec<FileFilter>,
    pub save_requests: Vec<SaveRequest>,
    pub questions: Vec<(String, MessageKind)>,
    pub messages: Vec<(String, String, MessageKind)>,
}

impl ScriptedUi {
    pub fn errors(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(_, _, kind)| *kind == MessageKind::Error)
            .map(|(_, body, _)| body.as_str())
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(_, _, kind)| *kind == MessageKind::Warning)
            .map(|(_, body, _)| body.as_str())
            .collect()
    }
}

impl Ui for ScriptedUi {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_menu_state(&mut self, state: MenuState) {
        self.menu = state;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        self.open_filters.push(filter.clone());
        self.open_replies
            .pop_front()
            .expect("unexpected open dialog")
    }

    fn pick_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        self.save_requests.push(request.clone());
        self.save_replies
            .pop_front()
            .expect("unexpected save dialog")
    }

    fn show_message(&mut self, title: &str, body: &str, kind: MessageKind) {
        self.messages
            .push((title.to_string(), body.to_string(), kind));
    }

    fn ask_yes_no_cancel(&mut self, _title: &str, body: &str, kind: MessageKind) -> Choice {
        self.questions.push((body.to_string(), kind));
        self.choices.pop_front().expect("unexpected question")
    }
}

pub type TestController = EditorController<ScriptedUi>;

/// Options pointing the untitled save location at `dir`
pub fn options_in(dir: &Path) -> EditorOptions {
    EditorOptions {
        documents_dir: dir.to_path_buf(),
        ..EditorOptions::default()
    }
}

pub fn controller_in(dir: &Path) -> TestController {
    EditorController::new(ScriptedUi::default(), textpad::OsFileSystem, options_in(dir))
}

/// Replace the text region as a user would and report the edit
pub fn type_text(controller: &mut TestController, text: &str) {
    controller.ui_mut().text = text.to_string();
    controller.handle(Command::TextChanged);
}
