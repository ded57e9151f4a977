use clap::Parser;
use mello::cli::{Cli, Commands};
use mello::cli_handlers;
use mello::core::Leaderboard;
use mello::mcp::run_mcp_server;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays free for replies and the MCP channel
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    if let Commands::Serve = cli.command {
        if let Err(e) = run_mcp_server(config).await {
            eprintln!("MCP server error: {e}");
            process::exit(1);
        }
        return;
    }

    let board = Leaderboard::new(config);

    // No command runs without a usable schema
    if let Err(e) = board.initialize() {
        error!(error = %e, "failed to initialize score database");
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Init => cli_handlers::handle_init(&board),
        Commands::Submit { when } => cli_handlers::handle_submit(&board, when),
        Commands::Nick { user, nickname } => cli_handlers::handle_nick(&board, &user, &nickname),
        Commands::Leaderboard => cli_handlers::handle_leaderboard(&board),
        Commands::Serve => return,
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        eprintln!("Error: {}", e.user_message());
        process::exit(1);
    }
}
