//! Data model for the remote store's metadata responses
//!

pub mod entry;
pub mod stat;

pub use crate::model::entry::{Entry, EntryKind};
pub use crate::model::stat::Stat;

use crate::constants::PATH_SEPARATOR;

/// Last segment of an absolute path; the root keeps its separator.
pub fn display_name(path: &str) -> &str {
    match path.rsplit(PATH_SEPARATOR).next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}
