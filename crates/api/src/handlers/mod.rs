//! Request handlers for the Pri-Pals API.
//!
//! Handlers validate input with the pure checks in `pripals_core`, delegate
//! to the repositories in `pripals_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod friends;
pub mod leagues;
pub mod points;
pub mod uploads;
