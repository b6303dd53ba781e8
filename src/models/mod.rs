//! Data models for the hotel-booking backend.
//!
//! This module contains the data structures exchanged with the REST API:
//!
//! - `User`, `TokenPair`, `Registration`: account and session types
//! - `Hotel`, `Room`: browsable inventory, with admin create/update payloads
//! - `Reservation`: a user's booking of a room for a date range

pub mod hotel;
pub mod reservation;
pub mod user;

pub use hotel::{Hotel, NewHotel, NewRoom, Room, RoomType};
pub use reservation::{NewReservation, Reservation};
pub use user::{Registration, TokenPair, User};
