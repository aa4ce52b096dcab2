//! HTTP boundary: router, the wallpaper GET handler, and the serve loop.

use axum::{
    body::Body,
    extract::{ConnectInfo, Query, Request},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use clap::Args;
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

use crate::calendar::{self, YearCalendar};
use crate::params::{WallpaperConfig, WallpaperQuery};
use crate::{raster, render};

/// Command-line arguments for the wallpaper server binary.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        short = 'p',
        long,
        default_value = "8080",
        help = "HTTP server port",
        long_help = "TCP port for the HTTP server. The wallpaper endpoint will be available \
            at http://<bind_address>:<port>/. Default: 8080."
    )]
    pub port: u16,

    #[arg(
        short = 'b',
        long,
        default_value = "0.0.0.0",
        help = "HTTP server bind address",
        long_help = "IP address to bind the HTTP server to. Use '0.0.0.0' to listen on all \
            interfaces (required for remote access), or '127.0.0.1' for localhost-only access."
    )]
    pub bind_address: String,
}

/// GET handler: resolve parameters, build the year model, render, rasterize.
///
/// Every parameter failure degrades to a default, so the only non-200 path
/// is a rasterizer failure. Responses disable caching unconditionally so the
/// device always re-fetches the current date.
pub async fn wallpaper_endpoint(Query(query): Query<WallpaperQuery>) -> Response {
    let config = WallpaperConfig::from_query(&query);
    let today = calendar::local_today(config.tz_hours);
    let calendar = YearCalendar::new(today);

    let svg = render::build_svg(&config, &calendar);

    let png_bytes = match raster::rasterize(&svg, config.device.width, config.device.height) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from(format!("Failed to rasterize wallpaper: {e}")))
                .unwrap()
        }
    };

    tracing::debug!(
        "Rendered {} wallpaper: {}x{}, {} bytes",
        config.device.name,
        config.device.width,
        config.device.height,
        png_bytes.len()
    );

    Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")
        .body(Body::from(png_bytes))
        .unwrap()
}

async fn logging_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    tracing::info!(
        "{} {} from {} - {:.1}ms",
        method,
        uri.path(),
        addr.ip(),
        elapsed.as_secs_f64() * 1000.0
    );

    response
}

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(wallpaper_endpoint))
        .route("/wallpaper", get(wallpaper_endpoint))
        .layer(middleware::from_fn(logging_middleware))
}

pub async fn run_server(args: ServerArgs) -> anyhow::Result<()> {
    let app = create_router();

    let addr = format!("{}:{}", args.bind_address, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Wallpaper server listening on http://{addr}/");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
