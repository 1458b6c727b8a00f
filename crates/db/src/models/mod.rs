//! Row structs and form DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The `Deserialize` + `Validate` form DTO used for create and edit
//! - Any joined read-model rows the repositories return

pub mod artist;
pub mod common;
pub mod location;
pub mod show;
pub mod venue;
