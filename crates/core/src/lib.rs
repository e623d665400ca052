//! Domain logic for the inventory service.
//!
//! Pure types and validation rules with no I/O: everything here is usable
//! from both the store and API crates without pulling in the runtime.

pub mod error;
pub mod photo;
pub mod types;
