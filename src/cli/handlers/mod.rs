mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::VidqlConfig;
use crate::graphql::{VidqlSchema, build_default_schema};
use anyhow::Result;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: VidqlConfig,
    pub schema: VidqlSchema,
}

impl CommandContext {
    pub fn new(config: VidqlConfig) -> Self {
        let schema = build_default_schema(&config.data);
        Self { config, schema }
    }
}

/// Parse `--variables` JSON, defaulting to no variables.
pub(crate) fn parse_variables(
    variables: Option<String>,
) -> crate::error::Result<async_graphql::Variables> {
    match variables {
        Some(v) => {
            let json: serde_json::Value = serde_json::from_str(&v)?;
            Ok(async_graphql::Variables::from_json(json))
        }
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run a single request against the schema and print the JSON response.
pub(crate) fn execute_and_print(
    schema: &VidqlSchema,
    query: String,
    variables: async_graphql::Variables,
) -> Result<()> {
    let request = async_graphql::Request::new(query).variables(variables);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
