//! Request handlers for listings and bookings.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the repositories in `gigboard_db`, build views from
//! [`crate::views`] and map errors via [`crate::error::AppError`].

pub mod artist;
pub mod show;
pub mod venue;
