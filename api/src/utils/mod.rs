/// The configuration for the API server.
pub mod config;
/// The extractors used by the request parser layer, such as the IP address
/// that a request came from.
pub mod extractors;

/// Contains the extension traits that will be used with the axum [`Router`][1]
/// to mount the various endpoints on the router.
///
/// [1]: axum::Router
mod router_ext;

/// Contains the [`layer`][1]s that will be used with [`tower`] mounted on the
/// axum [`Router`][2]
///
/// [1]: tower::Layer
/// [2]: axum::Router
mod layers;

pub use self::router_ext::RouterExt;

/// The constants module contains all the constants that are used throughout
/// the project.
pub mod constants {
	use semver::Version;

	/// The version of the database. This is used to determine whether the
	/// database needs to be migrated or not. Bump this whenever the schema
	/// changes.
	pub const DATABASE_VERSION: Version = Version::new(0, 1, 0);
	/// The issuer (iss) of the JWT. This is currently the URL of the EventUp
	/// API.
	pub const JWT_ISSUER: &str = "https://api.eventup.app";
	/// The parameters that will be used to hash, using argon2 as the hashing
	/// algorithm. This is used for all sorts of hashing, from user passwords
	/// to refresh tokens.
	pub const HASHING_PARAMS: argon2::Params =
		if let Ok(params) = argon2::Params::new(8192, 4, 4, None) {
			params
		} else {
			panic!("Failed to create hashing params");
		};
	/// The audience (aud) of the JWT. This is currently set to the domain of
	/// the browser dashboard.
	pub const JWT_AUDIENCE: &str = "eventup.app";
	/// The expiry time for the access token. This is set to 7 days.
	pub const ACCESS_TOKEN_VALIDITY: time::Duration = time::Duration::days(7);
}
