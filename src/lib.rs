//! # vidql - a GraphQL API over an in-memory video catalog
//!
//! vidql serves a small set of videos through a Relay-style GraphQL schema:
//! a `Node` interface with global ids, cursor-based connections, and a
//! `createVideo` mutation. Nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API on http://127.0.0.1:4000/graphql
//! vidql serve
//!
//! # Run a query without starting a server
//! vidql query '{ videos { totalCount edges { node { id title } } } }'
//!
//! # Print the schema
//! vidql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: The `Video` record and seed data
//! - [`storage`]: In-memory video store

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.vidql.toml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `VidqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides an async-graphql schema and an axum router serving it.
pub mod graphql;

/// Data models.
pub mod model;

/// In-memory storage layer.
pub mod storage;

/// Logging setup.
///
/// Installs the tracing subscriber for stderr and the optional log file.
pub mod logging;
