//! Task lifecycle management for the to-do list core.
//!
//! This module implements the dated-task lifecycle: creating tasks with
//! weekend-aware title derivation, replacing a task's title and date,
//! marking tasks done, deleting tasks, and listing tasks by status. All
//! persistence is delegated to a storage collaborator behind a repository
//! port. The module follows hexagonal architecture:
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
mod tests;
