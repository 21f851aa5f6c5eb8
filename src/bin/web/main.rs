use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode};
use safe_message::{
	config::Config,
	database::{connection_pool, migrate},
	dependencies::Dependency,
	routes::create_routes,
	services::response::ServiceError,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	timeout::TimeoutLayer,
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	println!("Environment Variable Is Being Set...");
	let config = Config::new()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!(
				"safe_message={level},web={level},tower_http={level},axum::rejection=trace",
				level = config.log_level
			)
			.into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let pool = connection_pool(&config).await?;
	migrate(&pool).await?;

	let dependency = Dependency::new(pool, &config);

	let origins = config
		.allow_origins
		.split(',')
		.map(|origin| origin.trim().parse::<HeaderValue>())
		.collect::<Result<Vec<_>, _>>()
		.map_err(|err| ServiceError::Config(format!("ALLOW_ORIGINS is not valid: {err}")))?;

	let app = create_routes(dependency).layer(
		ServiceBuilder::new()
			.layer(TraceLayer::new_for_http())
			.layer(
				CorsLayer::new()
					.allow_origin(AllowOrigin::list(origins))
					.allow_methods([Method::GET, Method::POST, Method::DELETE])
					.allow_headers([CONTENT_TYPE]),
			)
			.layer(TimeoutLayer::with_status_code(
				StatusCode::REQUEST_TIMEOUT,
				Duration::from_secs(config.request_timeout_secs),
			)),
	);

	let listener = TcpListener::bind(&config.server_ip_port).await?;
	tracing::info!(address = %config.server_ip_port, "Start Web Server...");
	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal : {:?}", err);
		std::future::pending::<()>().await;
	}
	tracing::info!("Shutdown signal received, draining connections");
}
