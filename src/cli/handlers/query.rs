use anyhow::{Context, Result};

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars =
        parse_variables(variables).context("Failed to parse --variables as JSON")?;
    tracing::debug!("Executing query");
    execute_and_print(&ctx.schema, query, vars)
}
