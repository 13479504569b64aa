//! Document Model
//!
//! A single plain-text document: where it lives on disk, what it contains and
//! whether the content has changed since it was last read or written.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::fs::FileSystem;

/// Name shown for a document that has never been saved
pub const UNTITLED: &str = "Untitled";

const UTF8_BOM: &str = "\u{feff}";

/// Errors raised by document operations
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Plain save was requested for a document that has no file yet
    #[error("the document has not been saved yet; use Save As to choose a file")]
    NoPath,

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory state of the edited file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    path: Option<PathBuf>,
    content: String,
    modified: bool,
    /// Invalid UTF-8 was replaced with U+FFFD when the file was read
    replaced_bytes: bool,
}

impl TextDocument {
    /// Create an empty, unsaved document
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` into a fresh document
    pub fn load(fs: &impl FileSystem, path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let bytes = fs.read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let (content, replaced_bytes) = decode_text(&bytes);
        if replaced_bytes {
            log::warn!(
                "{} is not valid UTF-8, invalid sequences were replaced",
                path.display()
            );
        }

        Ok(Self {
            path: Some(path.to_path_buf()),
            content,
            modified: false,
            replaced_bytes,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// True until the next successful write when the loaded file was not valid UTF-8
    pub fn has_replaced_bytes(&self) -> bool {
        self.replaced_bytes
    }

    /// File name for titles and dialogs, [`UNTITLED`] when there is no file
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Record a user edit
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.modified = true;
    }

    /// Copy the editor buffer in before persisting it; leaves the modified flag alone
    pub fn sync_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Whether discarding this document should ask the user first.
    ///
    /// An empty modified document only counts when `confirm_empty` is set.
    pub fn needs_confirmation(&self, confirm_empty: bool) -> bool {
        self.modified && (confirm_empty || !self.content.is_empty())
    }

    /// Replace this document with the contents of `path`.
    ///
    /// Nothing changes when the file cannot be read.
    pub fn open(
        &mut self,
        fs: &impl FileSystem,
        path: impl AsRef<Path>,
    ) -> Result<(), DocumentError> {
        *self = Self::load(fs, path)?;
        Ok(())
    }

    /// Write the content back to the current path
    pub fn save(&mut self, fs: &impl FileSystem) -> Result<(), DocumentError> {
        let path = self.path.as_deref().ok_or(DocumentError::NoPath)?;
        write_text(fs, path, &self.content)?;
        self.modified = false;
        self.replaced_bytes = false;
        Ok(())
    }

    /// Write the content to `path` and adopt it as the document's file
    pub fn save_as(
        &mut self,
        fs: &impl FileSystem,
        path: impl AsRef<Path>,
    ) -> Result<(), DocumentError> {
        let path = path.as_ref();
        write_text(fs, path, &self.content)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        self.replaced_bytes = false;
        Ok(())
    }
}

fn write_text(fs: &impl FileSystem, path: &Path, content: &str) -> Result<(), DocumentError> {
    fs.write(path, content.as_bytes())
        .map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Decode file bytes as UTF-8, dropping a byte-order mark and replacing invalid sequences.
///
/// The flag is set when anything had to be replaced.
fn decode_text(bytes: &[u8]) -> (String, bool) {
    let text = String::from_utf8_lossy(bytes);
    let replaced = matches!(text, Cow::Owned(_));
    let text = match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    };
    (text, replaced)
}
