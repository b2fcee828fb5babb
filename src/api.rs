//! # API - functions for talking to the remote content-addressed store
//!
//! Every operation here takes the injected [`crate::config::StoreConfig`];
//! nothing reads ambient state. All of them are fire-and-forget with respect
//! to client view state: the caller re-fetches to observe the effect.
//!

pub mod client;
pub mod endpoint;
