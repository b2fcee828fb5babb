use serde::{Deserialize, Serialize};

use crate::model;
use crate::model::{Entry, EntryKind};

/// Full metadata snapshot for one addressed node.
///
/// A `Stat` is never constructed or mutated by this client; the store returns
/// one per lookup and the client replaces its copy wholesale on every
/// navigation and after every mutation.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub cid: String,
    pub path: String,
    pub mode: u32,
    pub size: u64,
    /// Count of underlying storage chunks composing the node.
    pub blocks: u64,
    /// Total bytes including all descendants. The store is expected to keep
    /// this >= `size` for directories, but that relationship is an assumption
    /// about the store and is not validated here.
    pub cumulative_size: u64,
    /// Children of a directory, in whatever order the server chose. Absent
    /// for files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Entry>>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Whether block-locality information was resolved for this stat.
    pub with_locality: bool,
}

impl Stat {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn display_name(&self) -> &str {
        model::display_name(&self.path)
    }
}
