//! Domain logic for the gigboard listing service.
//!
//! Everything here is database-free so the repository layer, the HTTP
//! layer and tests can share it.

pub mod catalog;
pub mod error;
pub mod grouping;
pub mod search;
pub mod shows;
pub mod types;
pub mod validation;
