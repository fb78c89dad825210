mod app;
mod catalog;
mod client;
mod config;
mod endpoint;
mod gallery;
mod input;
mod nonce;
mod sanitize;
mod selection;
mod server;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "gradients", version, about = "Curated gradient presets: admin gallery and save endpoint")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive gallery (default).
    Tui,
    /// Run the HTTP server.
    Serve {
        /// Bind host (overrides config).
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config).
        #[arg(long)]
        port: Option<u16>,
        /// Keep options in memory instead of SQLite.
        #[arg(long)]
        memory: bool,
    },
    /// Print the built-in gradient catalog.
    Catalog,
    /// Print the saved presets from the local database.
    Presets {
        /// Print the raw JSON list instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print a save token for the configured admin user.
    Nonce,
    /// Print the admin key the gallery client authenticates with.
    Key {
        /// Generate a new admin key and nonce secret.
        #[arg(long)]
        rotate: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_logging(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let mut app = app::App::new(&cfg)?;
            let mut session = tui::GallerySession::start().context("init terminal")?;
            app.run(session.terminal()).await?;
        }
        Command::Serve { host, port, memory } => {
            let host = host.unwrap_or_else(|| cfg.server.host.clone());
            let port = port.unwrap_or(cfg.server.port);
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid bind address {host}:{port}"))?;

            let store: Arc<dyn storage::OptionStore> = if memory {
                Arc::new(storage::MemoryStore::new())
            } else {
                let path = cfg.database_path();
                tracing::info!("using database {}", path.display());
                Arc::new(storage::SqliteStore::open(&path)?)
            };

            let state = server::ServerState {
                store,
                nonces: Arc::new(nonce::NonceIssuer::new(
                    cfg.auth.nonce_secret.clone(),
                    cfg.auth.nonce_lifetime_secs,
                )),
                admin_user: cfg.auth.admin_user.clone(),
                admin_key: cfg.auth.admin_key.clone(),
                policy: endpoint::SavePolicy {
                    strict_catalog: cfg.storage.strict_catalog,
                },
            };
            server::serve(state, addr).await?;
        }
        Command::Catalog => {
            for g in catalog::CATALOG {
                println!("{:32} {:32} {}", g.slug(), g.name, g.css);
            }
        }
        Command::Presets { json } => {
            let store = storage::SqliteStore::open(&cfg.database_path())?;
            let saved = storage::load_selection(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&saved.presets())?);
            } else if saved.is_empty() {
                println!("No gradients saved.");
            } else {
                for (i, g) in saved.iter().enumerate() {
                    println!("{:02}. {:32} {:32} {}", i + 1, g.slug, g.name, g.gradient);
                }
            }
        }
        Command::Nonce => {
            let issuer = nonce::NonceIssuer::new(
                cfg.auth.nonce_secret.clone(),
                cfg.auth.nonce_lifetime_secs,
            );
            println!("{}", issuer.create(endpoint::NONCE_ACTION, &cfg.auth.admin_user));
        }
        Command::Key { rotate } => {
            let mut cfg = cfg;
            if rotate {
                cfg.auth.admin_key.clear();
                cfg.auth.nonce_secret.clear();
                config::defaults::fill_secrets(&mut cfg);
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                eprintln!("Rotated admin key and nonce secret. Restart the server.");
            }
            println!("{}", cfg.auth.admin_key);
        }
    }

    Ok(())
}

/// The gallery owns the terminal, so its logs go to a file.
fn init_logging(cfg: &config::Config, to_file: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_target(false).with_level(true);
    if to_file {
        let path = cfg.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}
