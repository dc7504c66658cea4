use anyhow::Result;
use article_feed::application::ports::{
    FileUrlGeneratorPort, ImageStyleRegistryPort, RouteResolverPort,
};
use article_feed::application::queries::articles::ARTICLE_IMAGE_STYLE;
use article_feed::application::services::ApplicationServices;
use article_feed::config::AppConfig;
use article_feed::domain::article::ARTICLE_KIND;
use article_feed::domain::content::{CacheMetadata, ContentStore};
use article_feed::infrastructure::images::{PathImageStyleRegistry, SiteFileUrlGenerator};
use article_feed::infrastructure::routing::SiteRouteResolver;
use article_feed::infrastructure::store::{InMemoryContentStore, seed};
use article_feed::presentation::http::{routes::build_router, state::HttpState};
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = InMemoryContentStore::new();
    if let Some(path) = config.content_seed() {
        seed::load_into(&store, path)?;
        tracing::info!(path = %path.display(), "content store seeded");
    }
    let store: Arc<dyn ContentStore> = Arc::new(store);

    let routes: Arc<RouteResolverPort> = Arc::new(SiteRouteResolver::new(config.site_base_url()));
    let styles: Arc<ImageStyleRegistryPort> = Arc::new(PathImageStyleRegistry::new(
        config.site_base_url(),
        [ARTICLE_IMAGE_STYLE.to_owned()],
    ));
    let file_urls: Arc<FileUrlGeneratorPort> =
        Arc::new(SiteFileUrlGenerator::new(config.site_base_url()));

    let mut base_cache = CacheMetadata::new().with_tag(format!("content_list:{ARTICLE_KIND}"));
    if let Some(secs) = config.article_max_age() {
        base_cache = base_cache.with_max_age(secs);
    }

    let services = Arc::new(ApplicationServices::new(
        store, routes, styles, file_urls, base_cache,
    ));

    let state = HttpState { services };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
