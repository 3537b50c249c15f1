//! Todolist: dated to-do task lifecycle core.
//!
//! This crate provides the business core of a small to-do list API: creating,
//! updating, completing, deleting, and listing dated tasks, with persistence
//! delegated to a pluggable storage backend.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle service, validation, and storage contracts

pub mod task;
