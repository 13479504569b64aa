//! Core Document Logic
//!
//! The document model and the filesystem it persists to.

pub mod document;
pub mod fs;

pub use document::{DocumentError, TextDocument};
pub use fs::{FileSystem, OsFileSystem};
