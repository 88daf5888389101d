//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the MCP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Rule document model
//! - **xdg**: XDG directory handling
//! - **store**: Rule discovery, front-matter parsing and lookups
//! - **search**: Keyword search over rule metadata
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod store;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{LoadError, Result, RulesError};
pub use services::Services;
pub use store::RuleStore;
