//! UI Collaborator
//!
//! Everything the controller needs from a window toolkit. Dialog methods are
//! modal: they block until the user answers.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::FilterSettings;

/// Enablement of the File menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub save_enabled: bool,
    pub save_as_enabled: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            save_enabled: false,
            save_as_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// Answer to a Yes / No / Cancel question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Cancel,
}

/// Which files a picker offers, e.g. `Text Files (*.txt)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn text_files() -> Self {
        Self {
            description: "Text Files".to_string(),
            extensions: vec!["txt".to_string()],
        }
    }

    /// Case-insensitive extension match; an empty extension list accepts everything
    pub fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::text_files()
    }
}

impl From<&FilterSettings> for FileFilter {
    fn from(settings: &FilterSettings) -> Self {
        Self {
            description: settings.description.clone(),
            extensions: settings.extensions.clone(),
        }
    }
}

impl fmt::Display for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<String> = if self.extensions.is_empty() {
            vec!["*.*".to_string()]
        } else {
            self.extensions
                .iter()
                .map(|ext| format!("*.{}", ext.trim_start_matches('.')))
                .collect()
        };
        write!(f, "{} ({})", self.description, patterns.join(";"))
    }
}

/// Arguments for the save picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub suggested_name: String,
    pub directory: PathBuf,
    pub filter: FileFilter,
}

impl SaveRequest {
    /// Suggested directory joined with the suggested name
    pub fn suggested_path(&self) -> PathBuf {
        self.directory.join(&self.suggested_name)
    }
}

/// Window, text region, menu and dialogs as seen by the controller
pub trait Ui {
    /// Current contents of the text region
    fn text(&self) -> String;

    /// Replace the text region without reporting it as a user edit
    fn set_text(&mut self, text: &str);

    fn set_menu_state(&mut self, state: MenuState);

    fn set_title(&mut self, title: &str);

    /// Returns `None` when the user cancels
    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf>;

    /// Returns `None` when the user cancels
    fn pick_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf>;

    fn show_message(&mut self, title: &str, body: &str, kind: MessageKind);

    /// `kind` selects the icon shown next to the question
    fn ask_yes_no_cancel(&mut self, title: &str, body: &str, kind: MessageKind) -> Choice;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_extension() {
        let filter = FileFilter::text_files();
        assert!(filter.matches(Path::new("/tmp/notes.txt")));
        assert!(filter.matches(Path::new("README.TXT")));
        assert!(!filter.matches(Path::new("main.rs")));
        assert!(!filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = FileFilter {
            description: "All Files".to_string(),
            extensions: vec![],
        };
        assert!(filter.matches(Path::new("Makefile")));
        assert_eq!(filter.to_string(), "All Files (*.*)");
    }

    #[test]
    fn test_filter_display() {
        let filter = FileFilter {
            description: "Text Files".to_string(),
            extensions: vec!["txt".to_string(), ".md".to_string()],
        };
        assert_eq!(filter.to_string(), "Text Files (*.txt;*.md)");
    }
}
