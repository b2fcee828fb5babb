//! Navigation state machine composing the client's views
//!
//! [`App`] owns the only mutable view state: the current route and a single
//! [`ViewState`] slot that is replaced wholesale on every navigation and
//! after every mutation. Consistency comes from re-querying the store, never
//! from patching state locally.
//!

use bytes::Bytes;

use crate::api;
use crate::config::StoreConfig;
use crate::constants::ROOT_PATH;
use crate::error::CidnavError;
use crate::model::{EntryKind, Stat};
use crate::route::{self, RouteId};
use crate::view::breadcrumbs::{self, Breadcrumb};
use crate::view::file::{self, FilePage};
use crate::view::forms;
use crate::view::tree::{self, TreeRow};

/// Asks the user before a destructive operation runs. Injected so the delete
/// flow is testable without a real prompt.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// The single current-view slot.
#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Loaded(Stat),
    /// A read failed; rendered as a placeholder and recovered by
    /// re-navigation. Never fatal.
    Unavailable,
}

/// Captured when a fetch is started. A response is applied only if the
/// navigation generation still matches when it arrives; anything else is a
/// late answer for an abandoned navigation and is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub path: String,
}

/// Composed page content for the current state.
#[derive(Debug, Clone)]
pub enum Page {
    Loading,
    Unavailable,
    /// Directory listing; the mutation forms are only offered here.
    Directory {
        breadcrumbs: Vec<Breadcrumb>,
        rows: Vec<TreeRow>,
    },
    File {
        breadcrumbs: Vec<Breadcrumb>,
        file: FilePage,
    },
}

pub struct App {
    config: StoreConfig,
    route: RouteId,
    path: String,
    generation: u64,
    state: ViewState,
}

impl App {
    pub fn new(config: StoreConfig) -> App {
        App {
            config,
            route: RouteId::root(),
            path: ROOT_PATH.to_string(),
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> &RouteId {
        &self.route
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start a navigation: decode the route (an undecodable one falls back
    /// to root), invalidate any fetch still in flight, and enter `Loading`.
    pub fn begin_navigation(&mut self, route: RouteId) -> FetchTicket {
        let (route, path) = match route::decode(&route) {
            Ok(path) => (route, path),
            Err(err) => {
                log::warn!("unknown route {route}, falling back to root: {err}");
                (RouteId::root(), ROOT_PATH.to_string())
            }
        };

        self.route = route;
        self.path = path.clone();
        self.generation += 1;
        self.state = ViewState::Loading;

        FetchTicket {
            generation: self.generation,
            path,
        }
    }

    /// Apply a fetch outcome. Returns false when the response no longer
    /// corresponds to the current navigation and was discarded.
    pub fn complete_navigation(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Stat, CidnavError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale response for {} (generation {}, now {})",
                ticket.path,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(stat) => ViewState::Loaded(stat),
            Err(err) => {
                log::warn!("stat fetch for {} failed: {err}", ticket.path);
                ViewState::Unavailable
            }
        };
        true
    }

    /// Navigate and fetch in one step. Issues exactly one stat request.
    pub async fn goto(&mut self, route: RouteId) {
        let ticket = self.begin_navigation(route);
        let result = api::client::dir::fetch_stat(&self.config, &ticket.path).await;
        self.complete_navigation(&ticket, result);
    }

    /// Re-fetch the current path: the only consistency mechanism after a
    /// mutation.
    pub async fn refresh(&mut self) {
        let route = self.route.clone();
        self.goto(route).await;
    }

    /// Upload a batch into the current directory, one write per file, all in
    /// flight at once. The listing is re-fetched only after every request in
    /// the batch has settled; if any write failed, the error surfaces after
    /// the refresh rather than silently relying on the stale listing.
    pub async fn upload(&mut self, files: Vec<(String, Bytes)>) -> Result<(), CidnavError> {
        self.require_directory_view()?;

        let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
        let targets = forms::upload_targets(&self.path, &names)?;
        let batch: Vec<(String, Bytes)> = targets
            .into_iter()
            .zip(files.into_iter().map(|(_, content)| content))
            .collect();

        let outcomes = api::client::file::write_files(&self.config, batch).await;
        let failures: Vec<String> = outcomes
            .into_iter()
            .filter_map(|(path, result)| result.err().map(|err| format!("{path}: {err}")))
            .collect();

        self.refresh().await;

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CidnavError::mutation_failed(format!(
                "{} of the uploads failed:\n{}",
                failures.len(),
                failures.join("\n")
            )))
        }
    }

    /// Create a directory under the current one, then re-fetch.
    pub async fn make_dir(&mut self, name: &str) -> Result<(), CidnavError> {
        self.require_directory_view()?;

        let target = forms::mkdir_target(&self.path, name)?;
        let result = api::client::dir::mkdir(&self.config, &target).await;
        self.refresh().await;
        result
    }

    /// Delete the node at `path` after explicit confirmation. Returns whether
    /// a request was issued; a declined prompt issues nothing at all.
    pub async fn delete(
        &mut self,
        confirmer: &dyn Confirmer,
        path: &str,
        prompt: &str,
    ) -> Result<bool, CidnavError> {
        if !confirmer.confirm(prompt) {
            log::debug!("delete of {path} declined");
            return Ok(false);
        }

        let result = api::client::entries::delete_entry(&self.config, path).await;
        self.refresh().await;
        result.map(|_| true)
    }

    /// Compose the current page from the view state.
    pub fn page(&self) -> Page {
        match &self.state {
            ViewState::Loading => Page::Loading,
            ViewState::Unavailable => Page::Unavailable,
            ViewState::Loaded(stat) => {
                let crumbs = breadcrumbs::resolve(&stat.path);
                match stat.kind {
                    EntryKind::Directory => Page::Directory {
                        breadcrumbs: crumbs,
                        rows: tree::render(
                            &self.config,
                            stat.children.as_deref().unwrap_or_default(),
                        ),
                    },
                    EntryKind::File => Page::File {
                        breadcrumbs: crumbs,
                        file: file::render(&self.config, stat),
                    },
                }
            }
        }
    }

    fn require_directory_view(&self) -> Result<(), CidnavError> {
        match &self.state {
            ViewState::Loaded(stat) if stat.is_dir() => Ok(()),
            _ => Err(CidnavError::basic_str(
                "Mutation forms are only available in a directory view",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Page, ViewState};
    use crate::config::StoreConfig;
    use crate::error::CidnavError;
    use crate::model::{Entry, EntryKind, Stat};
    use crate::route;

    fn config() -> Result<StoreConfig, CidnavError> {
        StoreConfig::new("http://localhost:7131", "http://localhost:3001")
    }

    fn dir_stat(path: &str, children: Vec<Entry>) -> Stat {
        Stat {
            cid: format!("Qm{}", path.len()),
            path: path.to_string(),
            mode: 493,
            size: 0,
            blocks: 1,
            cumulative_size: 4096,
            children: Some(children),
            kind: EntryKind::Directory,
            with_locality: false,
        }
    }

    #[test]
    fn test_late_response_for_abandoned_navigation_is_discarded() -> Result<(), CidnavError> {
        let mut app = App::new(config()?);

        let ticket_a = app.begin_navigation(route::encode("/a"));
        let ticket_b = app.begin_navigation(route::encode("/b"));

        // A resolves after the user already left for B
        let applied = app.complete_navigation(&ticket_a, Ok(dir_stat("/a", vec![])));
        assert!(!applied);
        assert!(matches!(app.state(), ViewState::Loading));

        let applied = app.complete_navigation(&ticket_b, Ok(dir_stat("/b", vec![])));
        assert!(applied);
        match app.state() {
            ViewState::Loaded(stat) => assert_eq!(stat.path, "/b"),
            other => panic!("expected /b to be loaded, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_late_response_after_current_one_is_also_discarded() -> Result<(), CidnavError> {
        let mut app = App::new(config()?);

        let ticket_a = app.begin_navigation(route::encode("/a"));
        let ticket_b = app.begin_navigation(route::encode("/b"));

        assert!(app.complete_navigation(&ticket_b, Ok(dir_stat("/b", vec![]))));
        // A's answer arrives even later; the view must stay on B
        assert!(!app.complete_navigation(&ticket_a, Ok(dir_stat("/a", vec![]))));
        match app.state() {
            ViewState::Loaded(stat) => assert_eq!(stat.path, "/b"),
            other => panic!("expected /b to stay loaded, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_undecodable_route_falls_back_to_root() -> Result<(), CidnavError> {
        let mut app = App::new(config()?);

        let bogus = route::RouteId::from_location_path("/!!!bogus!!!");
        let ticket = app.begin_navigation(bogus);
        assert_eq!(ticket.path, "/");
        assert_eq!(app.path(), "/");
        assert!(app.route().is_root());
        Ok(())
    }

    #[test]
    fn test_fetch_failure_renders_unavailable() -> Result<(), CidnavError> {
        let mut app = App::new(config()?);

        let ticket = app.begin_navigation(route::encode("/a"));
        let applied =
            app.complete_navigation(&ticket, Err(CidnavError::fetch_failed("boom")));
        assert!(applied);
        assert!(matches!(app.state(), ViewState::Unavailable));
        assert!(matches!(app.page(), Page::Unavailable));
        Ok(())
    }

    #[test]
    fn test_directory_page_offers_rows_and_breadcrumbs() -> Result<(), CidnavError> {
        let mut app = App::new(config()?);

        let children = vec![Entry {
            cid: "Qmchild".to_string(),
            path: "/docs/notes.txt".to_string(),
            mode: 420,
            name: "notes.txt".to_string(),
            size: 64,
            kind: EntryKind::File,
        }];
        let ticket = app.begin_navigation(route::encode("/docs"));
        app.complete_navigation(&ticket, Ok(dir_stat("/docs", children)));

        match app.page() {
            Page::Directory { breadcrumbs, rows } => {
                assert_eq!(breadcrumbs.len(), 2);
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].name, "notes.txt");
            }
            other => panic!("expected a directory page, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_mutation_forms_require_a_directory_view() -> Result<(), CidnavError> {
        let mut app = App::new(config()?);

        // Still loading: nothing to mutate into
        let result = app.make_dir("drafts").await;
        assert!(result.is_err());

        let result = app
            .upload(vec![("x.png".to_string(), bytes::Bytes::from_static(b"x"))])
            .await;
        assert!(result.is_err());
        Ok(())
    }
}
