use std::ops::Deref;

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

/// Implements the serde and conversion traits for a constant-boolean marker
/// type. The type serializes to exactly one boolean value and refuses to
/// deserialize from the other.
macro_rules! constant_bool {
	($type:ident, $value:literal) => {
		impl Serialize for $type {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: Serializer,
			{
				serializer.serialize_bool($value)
			}
		}

		impl<'de> Deserialize<'de> for $type {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: Deserializer<'de>,
			{
				if bool::deserialize(deserializer)? == $value {
					Ok($type)
				} else {
					Err(D::Error::custom(concat!("bool is not ", $value)))
				}
			}
		}

		impl From<$type> for bool {
			fn from(_: $type) -> Self {
				$value
			}
		}

		impl Deref for $type {
			type Target = bool;

			fn deref(&self) -> &Self::Target {
				&$value
			}
		}

		impl AsRef<bool> for $type {
			fn as_ref(&self) -> &bool {
				&$value
			}
		}
	};
}

/// A type that can be used to represent a constant `true` boolean. Used as the
/// `success` field of every API response that succeeded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct True;

/// A type that can be used to represent a constant `false` boolean. Used as
/// the `success` field of every API response that failed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct False;

constant_bool!(True, true);
constant_bool!(False, false);

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};

	use super::{False, True};

	#[test]
	fn assert_true_types() {
		assert_tokens(&True, &[Token::Bool(true)]);
	}

	#[test]
	fn assert_false_types() {
		assert_tokens(&False, &[Token::Bool(false)]);
	}
}
