mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stats { username, json } => {
            commands::stats::run(username, json, cli.config, cli.verbose)
        }
        Commands::Generate {
            username,
            linkedin,
            twitter,
            instagram,
            output,
        } => commands::generate::run(
            username,
            linkedin,
            twitter,
            instagram,
            output,
            cli.config,
            cli.verbose,
        ),
        Commands::Token { token, json } => commands::token::run(token, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
