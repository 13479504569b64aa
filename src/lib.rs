//! textpad
//!
//! A minimal plain-text editor.
//!
//! This library provides:
//! - The text document model and its filesystem access
//! - Toolkit-independent editor commands and the save-confirmation workflow
//! - A terminal frontend
//! - Configuration management

pub mod config;
pub mod core;
pub mod editor;
pub mod frontend;

// Re-exports for clean public API
pub use config::Config;
pub use self::core::{DocumentError, FileSystem, OsFileSystem, TextDocument};
pub use editor::{Command, EditorController, EditorOptions, Outcome, Ui};
