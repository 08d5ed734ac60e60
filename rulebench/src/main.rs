// rulebench/src/main.rs

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use commands::create::CreateArgs;
use commands::execute::ExecuteArgs;
use commands::update::UpdateArgs;

// Controllers share `Rc` state: everything runs on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // RUST_LOG=debug rulebench list ... to see every HTTP round-trip
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let repository = commands::connect(&cli.config_dir, cli.base_url)?;

    match cli.command {
        Commands::List {
            active_only,
            format,
        } => commands::list::execute(repository, active_only, format).await,

        Commands::Create {
            name,
            description,
            inactive,
            condition_type,
            condition,
        } => {
            let args = CreateArgs {
                name,
                description,
                inactive,
                condition_type,
                condition,
            };
            commands::create::execute(repository, args).await
        }

        Commands::Update {
            id,
            name,
            description,
            active,
            condition_type,
            condition,
        } => {
            let args = UpdateArgs {
                id,
                name,
                description,
                active,
                condition_type,
                condition,
            };
            commands::update::execute(repository, args).await
        }

        Commands::Delete { id } => commands::delete::execute(repository, id).await,

        Commands::Execute {
            payload,
            payload_file,
            rules,
            format,
            check,
        } => {
            let args = ExecuteArgs {
                payload,
                payload_file,
                rules,
                format,
                check,
            };
            commands::execute::execute(repository, args).await
        }
    }
}
