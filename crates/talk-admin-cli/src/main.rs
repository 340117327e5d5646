mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TALK_ADMIN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON envelope
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = match &cli.command {
        Commands::Pages { current, total } => return handlers::pages::handle(*current, *total),
        Commands::Push(push_cmd) => return handlers::push::handle(push_cmd.action.clone()),
        Commands::Version => {
            output::output_success(serde_json::json!({
                "version": env!("CARGO_PKG_VERSION"),
                "commit": env!("TALK_ADMIN_COMMIT"),
            }));
            return Ok(());
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "talk-admin", &mut std::io::stdout());
            return Ok(());
        }
        _ => CliContext::load(&cli)?,
    };

    match cli.command {
        Commands::Session(session_cmd) => {
            handlers::session::handle(&ctx, session_cmd.action).await?;
        }
        Commands::Report(report_cmd) => {
            handlers::report::handle(&ctx, report_cmd.action).await?;
        }
        Commands::Analysis(analysis_cmd) => {
            handlers::report::handle_analysis(&ctx, analysis_cmd.action).await?;
        }
        Commands::Opinion(opinion_cmd) => {
            handlers::opinion::handle(&ctx, opinion_cmd.action).await?;
        }
        Commands::Stats(stats_cmd) => {
            handlers::stats::handle(&ctx, stats_cmd.action).await?;
        }
        Commands::Auth(auth_cmd) => {
            handlers::auth::handle(&ctx, auth_cmd.action).await?;
        }
        Commands::Pages { .. }
        | Commands::Push(_)
        | Commands::Version
        | Commands::Completions { .. } => {}
    }

    Ok(())
}
