//! Client registry service library
//!
//! This module provides the core components of the registry daemon:
//! - REST API handlers for client CRUD
//! - In-memory storage backend
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod storage;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, StorageError};
pub use model::Client;
pub use server::Server;
pub use storage::{ClientStorage, InMemoryStore};
