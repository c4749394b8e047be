//! Serve command - run the sales API server

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use vend_api::{build_router, AppState};
use vend_auth::{AuthProvider, IdentityConfig, IdentityProvider, LocalJwtProvider};
use vend_config::{AuthProviderKind, Config};
use vend_dataset::SalesStore;

/// Serve command arguments
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file (defaults to configs/vend.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "Vend starting"
    );

    let config = load_config(args.config)?;

    let store = Arc::new(SalesStore::new(config.dataset.path.clone()));
    match store.frame() {
        Ok(frame) => info!(
            rows = frame.height(),
            path = %config.dataset.path.display(),
            "sales snapshot ready"
        ),
        Err(e) => warn!(
            error = %e,
            path = %config.dataset.path.display(),
            "snapshot not loadable at startup; requests will retry"
        ),
    }

    let auth = build_auth_provider(&config)?;
    info!(provider = auth.name(), "auth provider initialized");

    let app = build_router(AppState::new(store, auth)).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Vend shutdown complete");
    Ok(())
}

/// Explicit config must exist; otherwise try default paths, then defaults
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            Config::from_file(&path).context("failed to load configuration")
        }
        None => {
            let default_paths = [PathBuf::from("configs/vend.toml"), PathBuf::from("vend.toml")];

            for path in &default_paths {
                if path.exists() {
                    info!(config = %path.display(), "using config file");
                    return Config::from_file(path).context("failed to load configuration");
                }
            }

            info!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Construct the auth provider the config asks for
fn build_auth_provider(config: &Config) -> Result<Arc<dyn AuthProvider>> {
    match config.auth.provider {
        AuthProviderKind::Identity => {
            let mut identity = IdentityConfig::new(config.auth.api_key.clone());
            if let Some(endpoint) = &config.auth.endpoint {
                identity = identity.with_endpoint(endpoint.clone());
            }
            Ok(Arc::new(IdentityProvider::new(identity)?))
        }
        AuthProviderKind::Local => {
            let provider = if config.auth.jwt_secret.is_empty() {
                warn!("no jwt_secret configured; using a generated secret, tokens will not survive a restart");
                let secret: [u8; 32] = rand::random();
                LocalJwtProvider::new(&secret)
            } else {
                LocalJwtProvider::new(config.auth.jwt_secret.as_bytes())
            };

            let ttl = chrono::Duration::seconds(config.auth.token_ttl_secs as i64);
            Ok(Arc::new(provider.with_ttl(ttl)))
        }
    }
}

/// Resolve on ctrl-c or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
