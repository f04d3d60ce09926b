use anyhow::{Context, Result};

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_mutate(ctx: CommandContext, mutation: String, variables: Option<String>) -> Result<()> {
    let vars =
        parse_variables(variables).context("Failed to parse --variables as JSON")?;

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    tracing::debug!("Executing mutation");
    execute_and_print(&ctx.schema, query, vars)
}
