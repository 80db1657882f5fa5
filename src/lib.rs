//! taskboard: a task management REST service.
//!
//! This crate provides a CRUD API over task records (title, description,
//! lifecycle status, timestamps) persisted in a single relational table.
//!
//! # Architecture
//!
//! taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence port and adapters, and services
//! - [`http`]: axum routing, request validation, and error mapping

pub mod http;
pub mod task;
