//! Authentication module for managing user sessions and credentials.
//!
//! This module provides:
//! - `Session`: the in-memory session state machine (restore, login,
//!   registration, logout)
//! - `CredentialStore`: durable storage for the token/username triple
//! - `check_access`: synchronous gating for booking and admin surfaces
//!
//! Credentials persist across restarts; a stored token is validated once at
//! startup and wiped if the backend rejects it.

pub mod credentials;
pub mod guard;
pub mod session;

pub use credentials::{CredentialKey, CredentialStore};
pub use guard::{check_access, Access, AccessPolicy};
pub use session::Session;
