mod cli;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use corkboard_core::{AuthProvider, CurrentUser};
use corkboard_service::{BoardService, ServiceContext};

/// Identity supplied via --user / CORKBOARD_USER; absent means the request
/// is unauthenticated and every operation is rejected.
struct EnvAuth {
    username: Option<String>,
}

impl AuthProvider for EnvAuth {
    fn current_user(&self) -> Option<CurrentUser> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| CurrentUser {
                username: u.to_string(),
            })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CORKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("--file is required (or set CORKBOARD_FILE)"))?;
    let service = BoardService::new(ServiceContext::load(&file_path).await?);

    let auth = EnvAuth { username: cli.user };
    let user = output::unwrap_or_exit(service.transact(|ctx| ctx.authenticate(&auth)).await);
    tracing::debug!("Acting as {} ({})", user.username, user.id);

    match cli.command {
        Commands::Board(cmd) => handlers::board::handle(&service, user.id, cmd.action).await?,
        Commands::Member(cmd) => handlers::member::handle(&service, user.id, cmd.action).await?,
        Commands::List(cmd) => handlers::list::handle(&service, user.id, cmd.action).await?,
        Commands::Card(cmd) => handlers::card::handle(&service, user.id, cmd.action).await?,
    }

    Ok(())
}
