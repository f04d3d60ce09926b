use anyhow::{Context, Result};
use clap::Parser;

use vidql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use vidql::cli::{Cli, Commands};
use vidql::config::VidqlConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    vidql::logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let config = VidqlConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load vidql configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
