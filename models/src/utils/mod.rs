mod authentication;
mod axum_response;
mod bools;
mod header_utils;
mod one_or_many;
mod paginated;
mod sqlx_utils;
mod tuple_utils;
mod uuid;

pub use self::{
	authentication::*,
	axum_response::*,
	bools::*,
	header_utils::*,
	one_or_many::*,
	paginated::*,
	tuple_utils::*,
	uuid::*,
};

pub(crate) use self::sqlx_utils::impl_sqlx_type_as_text;

/// All the constants used in the application.
/// Constants are used to avoid hardcoding values, since that might introduce
/// typos.
pub mod constants {
	/// The node ID used to generate v1 UUIDs for all database records. Spells
	/// out "eventu" in ASCII.
	pub const UUID_NODE_ID: [u8; 6] = [0x65, 0x76, 0x65, 0x6e, 0x74, 0x75];

	/// The regex that usernames are validated against. Usernames are lowercase
	/// and can contain dots and dashes, but must start and end with an
	/// alphanumeric character or an underscore.
	pub const USERNAME_VALIDITY_REGEX: &str =
		"^[a-z0-9_][a-z0-9_\\.\\-]*[a-z0-9_]$";
}
