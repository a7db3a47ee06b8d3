use std::{
	env,
	fmt::{Display, Formatter},
	net::SocketAddr,
};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Parses the configuration of the running environment, from the config file
/// as well as environment variables, and returns the parsed config. Any
/// environment variable prefixed with `APP` overrides the value in the
/// config file.
#[instrument]
pub fn parse_config() -> AppConfig {
	trace!("Reading config data...");

	let env = if cfg!(debug_assertions) {
		"dev".to_string()
	} else {
		env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
	};

	match env.as_ref() {
		"prod" | "production" => Config::builder()
			.add_source(File::with_name("config/prod").required(false))
			.set_default("environment", "production")
			.expect("unable to set environment to production"),
		"dev" | "development" => Config::builder()
			.add_source(File::with_name("config/dev").required(false))
			.set_default("environment", "development")
			.expect("unable to set environment to development"),
		_ => {
			panic!("Unknown running environment found!");
		}
	}
	.add_source(Environment::with_prefix("APP").separator("_"))
	.build()
	.expect("unable to merge with environment variables")
	.try_deserialize()
	.expect("unable to parse settings")
}

/// The configuration of the whole application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
	/// The address and port the server binds to.
	pub bind_addr: SocketAddr,
	/// The base path all endpoints are mounted under.
	pub api_base_path: String,
	/// The pepper mixed into every argon2 hash. Unlike the per-hash salt,
	/// this is not stored next to the hash, so a database dump alone is not
	/// enough to brute-force passwords.
	pub password_pepper: String,
	/// The secret that access tokens are signed with.
	pub jwt_secret: String,
	/// The environment the application is running in. This is set at runtime
	/// based on an environment variable and if the application is compiled
	/// with debug mode.
	pub environment: RunningEnvironment,
	/// The configuration for the database to connect to.
	pub database: DatabaseConfig,
}

/// The environment the application is running in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RunningEnvironment {
	/// The application is running in development mode
	Development,
	/// The application is running in production mode
	Production,
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}

/// The configuration for the database to connect to. This will be the
/// primary data store for all information contained in the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
	/// The host the database is running on
	pub host: String,
	/// The port the database is running on
	pub port: u16,
	/// The user to connect to the database with
	pub user: String,
	/// The password to connect to the database with
	pub password: String,
	/// The name of the database to connect to
	pub database: String,
	/// The maximum number of connections to the database
	#[serde(alias = "connectionlimit")]
	pub connection_limit: u32,
}
