//! Catalog console - CRUD over an in-process product list
//!
//! Usage: catalog-cli [--latency-ms N] [--failure-rate P] [--empty] [-v]

use anyhow::Result;
use clap::Parser;

mod cli;
mod prompt;
mod render;
mod shell;

use cli::Cli;
use shell::{Outcome, Shell};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let shell = Shell::from_cli(&cli);
    println!("Product catalog console\n");

    loop {
        let choice = prompt::menu_choice()?;

        let products = if choice.needs_target() {
            match shell.targets().await {
                Ok(products) => products,
                Err(e) => {
                    tracing::warn!(error = %e, "Could not load products to pick from");
                    println!("{}\n", render::render_error(&e));
                    continue;
                }
            }
        } else {
            Vec::new()
        };

        let Some(action) = prompt::action_for(choice, &products)? else {
            continue;
        };

        match shell.execute(action).await {
            Ok(Outcome::Exit) => break,
            Ok(outcome) => {
                if let Some(text) = render::render_outcome(&outcome) {
                    println!("{}\n", text);
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Action failed");
                println!("{}\n", render::render_error(&e));
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
