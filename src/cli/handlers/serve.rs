use anyhow::Result;

use crate::graphql::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let settings = ctx.config.server;
    println!(
        "Starting GraphQL server on http://{}{}",
        settings.bind_address(),
        GRAPHQL_PATH
    );
    if settings.graphiql {
        println!(
            "GraphiQL: http://{}{}",
            settings.bind_address(),
            GRAPHQL_PATH
        );
    }

    tokio::runtime::Runtime::new()?.block_on(async { run_server(ctx.schema, &settings).await })?;
    Ok(())
}
