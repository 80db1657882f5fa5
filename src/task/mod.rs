//! Task management for taskboard.
//!
//! Implements the CRUD core: creating pending tasks, retrieving them by
//! id, filtered and ordered listings, case-insensitive title search, full
//! and status-only updates, and permanent removal. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;
