//! rules-mcp - coding rules lookup over MCP
//!
//! Serves a directory of markdown rule documents (coding standards
//! organized by language and category) to MCP clients over stdio.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - store (rule discovery, front-matter parsing, lookups)
//!   - search (keyword matching over rule metadata)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, transport, protocol, tools
//!
//! # Rule files
//!
//! Each rule is a markdown file with YAML front-matter naming its
//! category, tags, concepts, keywords, phase and links to other rules.
//! Files that fail to parse are logged and skipped.

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{LoadError, Result, RulesError};
pub use core::services::Services;
pub use core::store::{LoadReport, RuleStore};
pub use core::types::*;
