mod app;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod heatmap;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Parse command-line arguments and push them into the environment the
    // config layer reads
    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Initialize application state (reads DATA_URL / PALETTE)
    let mut app = App::new();

    // Without a terminal (or when asked to), print the report instead
    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
