//! REST API client module for the hotel-booking backend.
//!
//! This module provides the `ApiClient` for the session endpoints and the
//! hotel, room, and reservation CRUD, plus the `ApiError` taxonomy the rest
//! of the crate matches on.
//!
//! Authenticated requests carry a JWT bearer token read from the credential
//! store at request time.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, FieldErrors};
