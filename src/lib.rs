//! Airport keyword search over the Amadeus locations API.
//!
//! The crate is split between a thin proxy service (`gateway` + `server`,
//! exposed by the `airport-proxy` binary) and the client-side session layer
//! (`session` with its `cache` and `history`, driven by the default
//! interactive binary). The proxy exchanges stored credentials for a bearer
//! token on every search and forwards the keyword query upstream; the session
//! memoizes result sets per search term and keeps a small persisted history
//! of recent searches.

pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod models;
pub mod server;
pub mod session;
