use clap::Parser;
use notion_bookshelf::config::{Cli, Config, default_config_path};
use notion_bookshelf::handler::AppState;
use notion_bookshelf::routes::routes;
use tokio::signal;
use tracing;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("notion-bookshelf.svc starting");

    // An explicit --config must load; the default location is optional.
    let cfg = match args.config_path {
        Some(path) => load_config(&path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_config(&path.to_string_lossy())
            } else {
                tracing::info!(path = ?path, "no config file found, using defaults");
                Config::default()
            }
        }
    };

    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let app = routes(AppState::new(&cfg));

    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!(
        api_url = %cfg.notion.api_url,
        notion_version = %cfg.notion.version,
        "notion-bookshelf.svc running on {}",
        &address
    );
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, preparing to shutdown");
        }
    }

    tracing::info!("notion-bookshelf.svc going off");
}

fn load_config(path: &str) -> Config {
    Config::new(path).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = %path, "failed to load config file");
        std::process::exit(1);
    })
}
