//! Editor Controller
//!
//! Turns [`Command`]s into document operations, asks before throwing away
//! unsaved work and keeps the menu and title in step with the document.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::{DocumentError, FileSystem, OsFileSystem, TextDocument};
use crate::editor::command::{Command, Outcome};
use crate::editor::ui::{Choice, FileFilter, MenuState, MessageKind, SaveRequest, Ui};

/// Application name used in titles and the About box
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Body of the About message box
pub fn about_text() -> String {
    format!(
        "{} {}\nA minimal plain-text editor",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

/// Behaviour knobs taken from the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Suggested name for the first save of a new document
    pub untitled_name: String,
    /// Suggested directory for the first save of a new document
    pub documents_dir: PathBuf,
    pub filter: FileFilter,
    pub confirm_empty_changes: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            untitled_name: "Untitled.txt".to_string(),
            documents_dir: dirs::document_dir().unwrap_or_else(|| PathBuf::from(".")),
            filter: FileFilter::text_files(),
            confirm_empty_changes: false,
        }
    }
}

impl From<&Config> for EditorOptions {
    fn from(config: &Config) -> Self {
        Self {
            untitled_name: config.settings.untitled_name.clone(),
            documents_dir: config.documents_dir(),
            filter: FileFilter::from(&config.settings.filter),
            confirm_empty_changes: config.settings.confirm_empty_changes,
        }
    }
}

/// Owns the document and drives the UI collaborator
pub struct EditorController<U: Ui, F: FileSystem = OsFileSystem> {
    ui: U,
    fs: F,
    document: TextDocument,
    options: EditorOptions,
    menu: MenuState,
}

impl<U: Ui, F: FileSystem> EditorController<U, F> {
    pub fn new(ui: U, fs: F, options: EditorOptions) -> Self {
        let mut controller = Self {
            ui,
            fs,
            document: TextDocument::new(),
            options,
            menu: MenuState::default(),
        };
        controller.refresh();
        controller
    }

    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    /// Window title, e.g. `notes.txt* - textpad`
    pub fn title(&self) -> String {
        let marker = if self.document.is_modified() { "*" } else { "" };
        format!("{}{} - {}", self.document.display_name(), marker, APP_NAME)
    }

    /// Run one user action to completion
    pub fn handle(&mut self, command: Command) -> Outcome {
        log::debug!("Handling {:?}", command);

        match command {
            Command::New => self.new_document(),
            Command::Open => self.open_document(),
            Command::Save => {
                if self.menu.save_enabled {
                    self.save();
                } else {
                    log::debug!("Save is disabled, ignoring");
                }
            }
            Command::SaveAs => {
                self.save_as();
            }
            Command::Exit => return self.exit(),
            Command::About => self.about(),
            Command::TextChanged => self.text_changed(),
        }

        Outcome::Continue
    }

    /// Load `path` into a fresh document, reporting failures to the user.
    ///
    /// Does not ask about unsaved changes.
    pub fn open_path(&mut self, path: &Path) -> bool {
        match TextDocument::load(&self.fs, path) {
            Ok(document) => {
                self.ui.set_text(document.content());
                self.document = document;
                log::info!("Opened {}", path.display());
                self.refresh();
                if self.document.has_replaced_bytes() {
                    let body = format!(
                        "{} is not valid UTF-8; invalid bytes were replaced and \
                         saving will write the replacement characters",
                        self.document.display_name()
                    );
                    self.ui.show_message("Open", &body, MessageKind::Warning);
                }
                true
            }
            Err(err) => {
                self.report_error("Open", &err);
                false
            }
        }
    }

    fn new_document(&mut self) {
        if !self.confirm_save_changes() {
            return;
        }
        self.document = TextDocument::new();
        self.ui.set_text("");
        self.refresh();
    }

    fn open_document(&mut self) {
        if !self.confirm_save_changes() {
            return;
        }
        match self.ui.pick_open_path(&self.options.filter) {
            Some(path) => {
                self.open_path(&path);
            }
            None => log::debug!("Open cancelled"),
        }
    }

    /// Returns true when the document ended up on disk
    fn save(&mut self) -> bool {
        if self.document.path().is_none() {
            return self.save_as();
        }
        self.document.sync_content(self.ui.text());
        let result = self.document.save(&self.fs);
        self.finish_write("Save", result)
    }

    fn save_as(&mut self) -> bool {
        let request = self.save_request();
        let Some(path) = self.ui.pick_save_path(&request) else {
            log::debug!("Save As cancelled");
            return false;
        };
        self.document.sync_content(self.ui.text());
        let result = self.document.save_as(&self.fs, &path);
        self.finish_write("Save As", result)
    }

    fn finish_write(&mut self, action: &str, result: Result<(), DocumentError>) -> bool {
        let saved = match result {
            Ok(()) => {
                if let Some(path) = self.document.path() {
                    log::info!("Saved {}", path.display());
                }
                true
            }
            Err(err) => {
                self.report_error(action, &err);
                false
            }
        };
        self.refresh();
        saved
    }

    fn save_request(&self) -> SaveRequest {
        match self.document.path() {
            Some(path) => {
                let directory = path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                SaveRequest {
                    suggested_name: self.document.display_name(),
                    directory,
                    filter: self.options.filter.clone(),
                }
            }
            None => SaveRequest {
                suggested_name: self.options.untitled_name.clone(),
                directory: self.options.documents_dir.clone(),
                filter: self.options.filter.clone(),
            },
        }
    }

    fn exit(&mut self) -> Outcome {
        if self.confirm_save_changes() {
            log::info!("Exiting");
            Outcome::Exit
        } else {
            Outcome::Continue
        }
    }

    fn about(&mut self) {
        self.ui
            .show_message("About", &about_text(), MessageKind::Info);
    }

    fn text_changed(&mut self) {
        let text = self.ui.text();
        self.document.edit(text);
        self.refresh();
    }

    /// True when the caller may go on with a destructive action
    fn confirm_save_changes(&mut self) -> bool {
        if !self
            .document
            .needs_confirmation(self.options.confirm_empty_changes)
        {
            return true;
        }

        match self.ui.ask_yes_no_cancel(
            "Save Changes",
            "Do you want to save changes?",
            MessageKind::Warning,
        ) {
            // A failed or cancelled save has already been reported
            Choice::Yes => {
                self.save();
                true
            }
            Choice::No => true,
            Choice::Cancel => false,
        }
    }

    fn refresh(&mut self) {
        self.menu = MenuState {
            save_enabled: self.document.is_modified(),
            save_as_enabled: true,
        };
        self.ui.set_menu_state(self.menu);
        let title = self.title();
        self.ui.set_title(&title);
    }

    fn report_error(&mut self, action: &str, err: &DocumentError) {
        log::warn!("{} failed: {}", action, err);
        self.ui.show_message(action, &err.to_string(), MessageKind::Error);
    }
}
