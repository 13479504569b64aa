//! Editor Logic
//!
//! Toolkit-independent command handling on top of the document model.

pub mod command;
pub mod controller;
pub mod ui;

pub use command::{Command, Outcome};
pub use controller::{EditorController, EditorOptions};
pub use ui::{Choice, FileFilter, MenuState, MessageKind, SaveRequest, Ui};
