use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model;

/// Whether an addressed node is a directory or a regular file.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl FromStr for EntryKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directory" => Ok(EntryKind::Directory),
            "file" => Ok(EntryKind::File),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// Lightweight descriptor for one child of a directory listing.
///
/// `path` is the canonical identity of the node for navigation; `cid` names
/// the content and can appear at multiple paths.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Entry {
    pub cid: String,
    pub path: String,
    pub mode: u32,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn display_name(&self) -> &str {
        model::display_name(&self.path)
    }
}
