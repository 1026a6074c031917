mod access_log;
mod handlers;
mod openapi;

use std::net::SocketAddr;
use std::process;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use access_log::AccessLogLayer;
use openapi::ApiDoc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// ============================================================
// CLI
// ============================================================

#[derive(Parser)]
#[command(name = "numconv-web", about = "Number representation conversion service", version = numconv_core::VERSION)]
struct Args {
    /// Listen address.
    #[arg(long, default_value = "0.0.0.0:8080", env = "NUMCONV_LISTEN")]
    listen: String,

    /// Maximum accepted request body, in bytes.
    #[arg(long, default_value = "65536", env = "NUMCONV_BODY_LIMIT")]
    body_limit: usize,
}

// ============================================================
// Main
// ============================================================

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("numconv_web=info")),
        )
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            process::exit(1);
        }
    };
    runtime.block_on(async_main(args));
}

async fn async_main(args: Args) {
    info!(version = numconv_core::VERSION, body_limit = args.body_limit, "starting");

    let addr: SocketAddr = match args.listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(listen = %args.listen, error = %e, "invalid listen address");
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            process::exit(1);
        }
    };
    info!(%addr, "listening");

    let app = build_router(args.body_limit).into_make_service_with_connect_info::<SocketAddr>();
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        process::exit(1);
    }
}

/// Routes and middleware. Layers apply outside-in: the last `.layer()` is outermost.
pub(crate) fn build_router(body_limit: usize) -> Router {
    Router::new()
        .route("/", get(handlers::serve_index))
        .route("/convert", post(handlers::handle_convert))
        .route("/health", get(handlers::handle_health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(get(handlers::serve_asset))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(AccessLogLayer)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
