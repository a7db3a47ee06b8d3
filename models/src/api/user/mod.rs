use serde::{Deserialize, Serialize};

/// The endpoint to get the details of the currently logged in user
mod get_user_info;

pub use self::get_user_info::*;

/// This is the information that is _allowed_ to be public about a user.
///
/// This is not the entire user object, but only the information that is
/// allowed to be public. For privacy reasons, things like their email address
/// are not part of this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BasicUserInfo {
	/// The username of the user. This is unique to the user.
	pub username: String,
	/// The first name of the user.
	pub first_name: String,
	/// The last name of the user.
	pub last_name: String,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::BasicUserInfo;

	#[test]
	fn assert_basic_user_info_types() {
		assert_tokens(
			&BasicUserInfo {
				username: "john-doe".to_string(),
				first_name: "John".to_string(),
				last_name: "Doe".to_string(),
			},
			&[
				Token::Struct {
					name: "BasicUserInfo",
					len: 3,
				},
				Token::Str("username"),
				Token::Str("john-doe"),
				Token::Str("firstName"),
				Token::Str("John"),
				Token::Str("lastName"),
				Token::Str("Doe"),
				Token::StructEnd,
			],
		);
	}
}
