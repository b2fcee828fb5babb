//! View-models composed from a [`crate::model::Stat`]
//!
//! These carry everything the rendering shell needs (labels, hrefs, preview
//! sources); visual styling is outside this crate.
//!

pub mod breadcrumbs;
pub mod file;
pub mod forms;
pub mod tree;

pub use crate::view::breadcrumbs::Breadcrumb;
pub use crate::view::file::{FilePage, MediaKind, MediaPreview};
pub use crate::view::tree::{RowPreview, TreeRow};
