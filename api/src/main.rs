#![feature(impl_trait_in_assoc_type)]

//! The EventUp API server. This binary serves the JSON API that the browser
//! dashboard talks to: accounts and sign-in, events and attendee
//! registrations, and the per-event organizer tooling (budgets, resources
//! and bookings, tasks, organizer messages), all gated by per-event
//! permissions that the event owner hands out.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{Dispatch, Level};
use tracing_subscriber::{
	filter::LevelFilter,
	fmt::{format::FmtSpan, Layer as FmtLayer},
	layer::SubscriberExt,
	prelude::*,
};

use crate::prelude::*;

/// The global state of the application, along with the request types that
/// carry a request through the tower layers on its way to a handler.
mod app;
/// All database functions, including the schema setup that runs on startup.
pub mod db;
/// Internal models of the API. These are not exposed through the API
/// contract in any way, but are used by the server internally, such as the
/// claims of the access token.
mod models;
/// All the routes of the API, mounted endpoint by endpoint.
mod routes;
/// Utilities for the crate: the config parser, the router extension and the
/// tower layers that every endpoint is mounted behind.
mod utils;

/// The prelude module contains all the commonly used types and traits that
/// are used across the crate. This is mostly used to avoid having to import
/// the same types and traits in every module.
pub mod prelude {
	pub use models::{
		prelude::*,
		utils::*,
		ApiRequest,
		ProcessedApiRequest,
		RequestUserData,
	};
	pub use sqlx::{query, Row};
	pub use tracing::{debug, error, info, instrument, trace, warn};

	pub use crate::{
		app::*,
		db,
		utils::{config::*, constants, RouterExt},
	};

	/// The type of the database. This is currently set to [`sqlx::Postgres`],
	/// and the schema in [`crate::db`] assumes Postgres throughout.
	pub type DatabaseType = sqlx::Postgres;

	/// The type of a connection to the database.
	pub type DatabaseConnection = <DatabaseType as sqlx::Database>::Connection;

	/// The type of a transaction on the database. Every request runs inside
	/// one of these, committed only if the handler succeeds.
	pub type DatabaseTransaction = sqlx::Transaction<'static, DatabaseType>;
}

#[tokio::main]
async fn main() {
	let config = parse_config();

	tracing::dispatcher::set_global_default(Dispatch::new(
		tracing_subscriber::registry().with(
			FmtLayer::new()
				.with_span_events(FmtSpan::NONE)
				.event_format(
					tracing_subscriber::fmt::format()
						.with_ansi(true)
						.with_file(false)
						.without_time()
						.compact(),
				)
				.with_filter(
					tracing_subscriber::filter::Targets::new()
						.with_target(env!("CARGO_PKG_NAME"), LevelFilter::TRACE)
						.with_target("models", LevelFilter::TRACE),
				)
				.with_filter(LevelFilter::from_level(
					if config.environment == RunningEnvironment::Development {
						Level::TRACE
					} else {
						Level::DEBUG
					},
				)),
		),
	))
	.expect("Failed to set global default subscriber");

	debug!(
		"Configuration read. Running environment set to {}",
		config.environment
	);

	let database = db::connect(&config.database).await;
	debug!("Database connection pool established");

	let state = AppState { database, config };

	db::initialize(&state)
		.await
		.expect("Failed to initialize the database");
	debug!("Database initialized");

	let tcp_listener = TcpListener::bind(state.config.bind_addr).await.unwrap();

	info!(
		"Listening for connections on http://{}",
		tcp_listener.local_addr().unwrap()
	);

	axum::serve(
		tcp_listener,
		routes::setup_routes(&state)
			.await
			.into_make_service_with_connect_info::<SocketAddr>(),
	)
	.with_graceful_shutdown(exit_signal())
	.await
	.unwrap();
}

/// Listen for the exit signal and stop the server when the signal is
/// received.
#[tracing::instrument]
async fn exit_signal() {
	let ctrl_c = async {
		tokio::signal::ctrl_c()
			.await
			.expect("Failed to listen for SIGINT")
	};

	#[cfg(unix)]
	let terminate = async {
		tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => (),
		_ = terminate => (),
	}
	info!("Shutdown signal received, shutting down server gracefully");
}
