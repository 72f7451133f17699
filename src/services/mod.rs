//! Service layer for business logic
//!
//! Keeps filesystem work out of the HTTP handlers so it can be tested and
//! run on the blocking pool on its own.

pub mod files;
