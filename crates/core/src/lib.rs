//! Domain logic for the friend ranking service.
//!
//! Everything in this crate is free of I/O: the persistence layer lives in
//! `pripals-db` and the HTTP binding in `pripals-api`.

pub mod error;
pub mod friend;
pub mod image;
pub mod league;
pub mod ledger;
pub mod locks;
pub mod types;
