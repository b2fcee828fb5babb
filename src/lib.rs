//! # cidnav
//!
//! Client for browsing and mutating a remote content-addressed file store.
//!
//! Paths are encoded into opaque, URL-safe routes; metadata arrives as
//! immutable [`model::Stat`] snapshots and is rendered into breadcrumb, tree
//! and file view-models; mutations (write, mkdir, delete) are fire-and-forget
//! and reconciled by a full re-fetch.
//!
//! # Examples
//!
//! Open the root of a store and walk into a directory:
//!
//! ```
//! use cidnav::app::App;
//! use cidnav::config::StoreConfig;
//! use cidnav::route::RouteId;
//!
//! let config = StoreConfig::new("http://localhost:7131", "http://localhost:3001")?;
//! let mut app = App::new(config);
//! app.goto(RouteId::root()).await;
//! app.goto(cidnav::route::encode("/photos")).await;
//! let page = app.page();
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod route;
pub mod view;
