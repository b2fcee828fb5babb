use crate::api::endpoint;
use crate::config::StoreConfig;
use crate::constants::DIR_PLACEHOLDER;
use crate::model::Entry;
use crate::route;

/// Visual preview for one listing row. A file row gets a thumbnail straight
/// off the raw-content address; a directory row gets the fixed placeholder —
/// listing a directory never fans out into per-child stat requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowPreview {
    Thumbnail(String),
    Placeholder(&'static str),
}

/// One child of the current directory, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub name: String,
    pub href: String,
    pub preview: RowPreview,
    /// Target handed to the delete affordance, which must confirm before
    /// issuing anything.
    pub delete_path: String,
    pub delete_prompt: String,
}

/// Render a directory's children in the order the server returned them; any
/// ordering guarantee is the store's, and this client does not re-sort.
pub fn render(config: &StoreConfig, children: &[Entry]) -> Vec<TreeRow> {
    children
        .iter()
        .map(|entry| {
            let preview = if entry.is_dir() {
                RowPreview::Placeholder(DIR_PLACEHOLDER)
            } else {
                RowPreview::Thumbnail(endpoint::raw_url(config, &entry.cid))
            };
            TreeRow {
                name: entry.display_name().to_string(),
                href: endpoint::route_url(config, &route::encode(&entry.path)),
                preview,
                delete_path: entry.path.clone(),
                delete_prompt: format!("Delete {}", entry.cid),
            }
        })
        .collect()
}
