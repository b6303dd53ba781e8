//! roomkey - client library for a hotel-booking REST backend.
//!
//! The crate wraps the backend's session endpoints behind a small state
//! machine (`auth::Session`), persists the credential triple between runs
//! (`auth::CredentialStore`), gates privileged surfaces
//! (`auth::check_access`), and exposes the hotel, room, and reservation
//! endpoints through one bearer-authenticated client (`api::ApiClient`).
//!
//! Typical startup:
//!
//! ```no_run
//! # async fn start() -> anyhow::Result<()> {
//! use roomkey::{ApiClient, Config, CredentialStore, Session};
//!
//! let config = Config::load()?;
//! let credentials = CredentialStore::new(config.data_dir()?);
//! let api = ApiClient::new(config.api_base_url(), credentials.clone())?;
//!
//! let mut session = Session::new(credentials, api);
//! session.bootstrap().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{check_access, Access, AccessPolicy, CredentialKey, CredentialStore, Session};
pub use config::Config;
