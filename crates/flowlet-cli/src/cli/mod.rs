//! CLI for the Flowlet URI helpers and route providers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_add_query, run_default_port, run_password, run_relative_path, run_routes, run_username,
    run_with_query,
};

/// Top-level CLI for Flowlet.
#[derive(Debug, Parser)]
#[command(name = "flowlet")]
#[command(about = "Flowlet: URI helpers and route provider wiring", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/flowlet/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the username from a URI's user-info.
    Username {
        uri: String,
    },

    /// Print the password from a URI's user-info.
    Password {
        uri: String,
    },

    /// Print the path of a URI relative to a base URI.
    RelativePath {
        uri: String,
        /// Base URI; defaults to `base_uri` from the config file.
        #[arg(long)]
        base: Option<String>,
    },

    /// Replace a URI's query with the given parameters (bracket notation, e.g. `a=1&b[c]=2`).
    WithQuery {
        uri: String,
        query: String,
    },

    /// Merge the given parameters into a URI's existing query; new values win.
    AddQuery {
        uri: String,
        query: String,
    },

    /// Print the well-known port for a scheme, or `none`.
    DefaultPort {
        scheme: String,
    },

    /// List the routes produced by the configured routes provider factory.
    Routes {
        /// Factory name; defaults to `routing.factory` from the config file.
        #[arg(long)]
        factory: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config = cli.config.as_deref();

        let output = match cli.command {
            CliCommand::Username { uri } => run_username(&uri)?,
            CliCommand::Password { uri } => run_password(&uri)?,
            CliCommand::RelativePath { uri, base } => {
                run_relative_path(&uri, base.as_deref(), config)?
            }
            CliCommand::WithQuery { uri, query } => run_with_query(&uri, &query)?,
            CliCommand::AddQuery { uri, query } => run_add_query(&uri, &query)?,
            CliCommand::DefaultPort { scheme } => run_default_port(&scheme),
            CliCommand::Routes { factory } => run_routes(config, factory.as_deref())?,
        };
        println!("{output}");

        Ok(())
    }
}

#[cfg(test)]
mod tests;
