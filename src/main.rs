mod client;
mod commands;
mod output;
mod provider;
#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use client::EnvPolicy;
use commands::{DataCommand, ResourceCommand, SchemaCommand};
use provider::ProviderConfig;

#[derive(Parser)]
#[command(name = "pass-provider")]
#[command(about = "Manages entries in a pass(1) password store as declarative resources", long_about = None)]
#[command(version)]
struct Cli {
    /// Absolute path of the password store to use, if not the default
    #[arg(long, global = true, env = "PASS_PROVIDER_STORE", default_value = "")]
    store: String,

    /// Spawn pass with an empty environment instead of inheriting the host's
    #[arg(long, global = true)]
    clean_env: bool,

    /// Check for an existing entry file before insert instead of relying on
    /// pass's own duplicate rejection
    #[arg(long, global = true)]
    duplicate_check: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OpArgs {
    /// File holding the JSON property bag ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    input: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert a new password entry
    Create(OpArgs),

    /// Decrypt an entry and refresh the property bag
    Read(OpArgs),

    /// Overwrite an existing entry in place
    Update(OpArgs),

    /// Remove an entry from the store
    Delete(OpArgs),

    /// Read a password as a data source (never mutates the store)
    Get(OpArgs),

    /// Print the provider, resource, and data source schemas as JSON
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ProviderConfig {
        store: cli.store,
        env_policy: if cli.clean_env {
            EnvPolicy::Clean
        } else {
            EnvPolicy::Inherit
        },
        duplicate_check: cli.duplicate_check,
    };

    match cli.command {
        Commands::Create(args) => ResourceCommand::execute_create(&config, &args.input),
        Commands::Read(args) => ResourceCommand::execute_read(&config, &args.input),
        Commands::Update(args) => ResourceCommand::execute_update(&config, &args.input),
        Commands::Delete(args) => ResourceCommand::execute_delete(&config, &args.input),
        Commands::Get(args) => DataCommand::execute_read(&config, &args.input),
        Commands::Schema => SchemaCommand::execute(),
    }
}
