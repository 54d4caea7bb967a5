mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use taskboard_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(log_file))
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    match &cli.config {
        Some(path) => Ok(AppConfig::load_from(path)?),
        None => Ok(AppConfig::load()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "taskboard", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let mut ctx = CliContext::open(config, cli.file).await;

    match cli.command {
        Commands::Show => handlers::board::handle_show(&ctx)?,
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action).await?,
        Commands::Tag(tag_cmd) => handlers::tag::handle(&mut ctx, tag_cmd.action).await?,
        Commands::Search(args) => handlers::board::handle_search(&ctx, args)?,
        Commands::Stats => handlers::board::handle_stats(&ctx)?,
        Commands::Due => handlers::board::handle_due(&ctx)?,
        Commands::Export(args) => handlers::export::handle_export(&ctx, args)?,
        Commands::Import(args) => handlers::export::handle_import(&mut ctx, args).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
