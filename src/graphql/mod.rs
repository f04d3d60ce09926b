//! GraphQL schema, resolvers and HTTP endpoint for vidql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! vidql serve --port 4000
//!
//! # Execute a query from CLI
//! vidql query '{ videos(first: 1) { totalCount edges { cursor node { title } } } }'
//!
//! # Execute a mutation from CLI
//! vidql mutate 'createVideo(input: { title: "New", duration: 60, watched: false }) { video { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `foo`, `bar`, `video`, `videos`, `node`
//! - **Mutations**: `createVideo`
//!
//! Every response carries `extensions.runTime` in milliseconds.

mod extension;
mod node;
mod pagination;
mod schema;
mod server;
mod types;

pub use extension::{RUN_TIME_KEY, RunTime};
pub use node::{Node, VIDEO_TYPE, from_global_id, to_global_id};
pub use pagination::{OffsetCursor, Page, page_bounds};
pub use schema::{
    AppState, MutationRoot, QueryRoot, VideoConnection, VidqlSchema, build_default_schema,
    build_schema,
};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
