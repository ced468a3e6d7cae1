use anyhow::{Context, Result};
use nikwetu_core::{
    application::{
        commands::auth::EnsureAdminCommand,
        ports::{
            security::{PasswordHasher, SessionStore},
            time::Clock,
            util::SlugGenerator,
        },
        services::{ApplicationServices, Repositories},
    },
    config::{AppConfig, StoreBackend},
    infrastructure::{
        database,
        repositories::{InMemoryStore, postgres_repositories},
        security::{password::Argon2PasswordHasher, session_store::InMemorySessionStore},
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        routes::{RouterOptions, build_router},
        state::HttpState,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let repositories = open_store(&config).await?;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let session_ttl = chrono::Duration::from_std(config.session_ttl())
        .context("SESSION_TTL_SECONDS out of range")?;
    let sessions: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(session_ttl, Arc::clone(&clock)));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repositories,
        password_hasher,
        sessions,
        clock,
        slugger,
    ));

    if let Some(admin) = config.admin() {
        let created = services
            .auth
            .ensure_admin(EnsureAdminCommand {
                email: admin.email.clone(),
                password: admin.password.clone(),
                display_name: String::new(),
            })
            .await?;
        if !created {
            tracing::info!(email = %admin.email, "bootstrap admin already present");
        }
    }

    let state = HttpState {
        services,
        site_title: Arc::from(config.app_title()),
    };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };

    let app = build_router(state, &options);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_store(config: &AppConfig) -> Result<Repositories> {
    match config.store_backend() {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory store, data is lost on exit");
            Ok(Arc::new(InMemoryStore::new()).repositories())
        }
        StoreBackend::Postgres(url) => {
            let pool = database::init_pool(url)
                .await
                .context("connecting to PostgreSQL")?;
            database::run_migrations(&pool)
                .await
                .context("running migrations")?;
            Ok(postgres_repositories(&pool))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
