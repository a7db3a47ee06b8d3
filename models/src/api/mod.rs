/// All auth related endpoints, for signing up, signing in and managing the
/// tokens of a session
pub mod auth;
/// All endpoints that can be performed on an event, which is the central
/// object of the application. Budgets, resources, tasks, the organizer board
/// and permission grants all hang off an event
pub mod event;
/// All endpoints for the notifications a user receives when something happens
/// on an event they help organize
pub mod notification;
/// All endpoints that relate to a user and their data
pub mod user;

use std::ops::Deref;

use headers::HeaderMapExt;
use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::{
	prelude::*,
	utils::{BearerToken, HasHeader, Headers, RequiresResponseHeaders},
};

/// A wrapper for any type that contains an ID. This is used to return data
/// from the API that contains the ID of the object. For example, when listing
/// all events, the API will return a list of `WithId<Event>`. This means that
/// the `Event` struct should not contain the ID field, and the struct
/// contained in the `WithId` struct can be reused in multiple places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, PartialOrd, Hash)]
#[serde(rename_all = "camelCase")]
pub struct WithId<T> {
	/// The ID of the object. For example, in case of an event, this would be
	/// the eventId, and in case of a task, this would be the taskId and so on.
	pub id: Uuid,
	/// The data of the object. This can be any type that contains additional
	/// data that will be flattened. Note: This should not contain an Id field.
	#[serde(flatten)]
	pub data: T,
}

impl<T> WithId<T> {
	/// Create a new `WithId` struct with the given Id and data. This helps
	/// instantiate the struct with the data and Id provided as parameters.
	pub fn new(id: Uuid, data: T) -> Self {
		Self { id, data }
	}
}

impl From<Uuid> for WithId<()> {
	fn from(id: Uuid) -> Self {
		Self::new(id, ())
	}
}

impl<T> Deref for WithId<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

/// The request headers of every route that needs a signed-in user: just the
/// access token. Endpoints share this one struct instead of each declaring
/// their own identical copy.
#[derive(Debug, Clone)]
pub struct AuthenticatedRequestHeaders {
	/// Token used to authorize the user
	pub authorization: BearerToken,
}

impl Headers for AuthenticatedRequestHeaders {
	fn to_header_map(&self) -> HeaderMap {
		let mut map = HeaderMap::new();
		map.typed_insert(self.authorization.clone());
		map
	}

	fn from_header_map(map: &HeaderMap) -> Result<Self, headers::Error> {
		Ok(Self {
			authorization: map
				.typed_try_get::<BearerToken>()?
				.ok_or_else(headers::Error::invalid)?,
		})
	}
}

impl HasHeader<BearerToken> for AuthenticatedRequestHeaders {
	fn get_header(&self) -> &BearerToken {
		&self.authorization
	}
}

impl RequiresResponseHeaders for AuthenticatedRequestHeaders {
	type RequiredResponseHeaders = ();
}

/// The response headers of every paginated list route: the total number of
/// items the query matched, across all pages.
#[derive(Debug)]
pub struct TotalCountResponseHeaders {
	/// The total number of items in the pagination
	pub total_count: TotalCountHeader,
}

impl Headers for TotalCountResponseHeaders {
	fn to_header_map(&self) -> HeaderMap {
		let mut map = HeaderMap::new();
		map.typed_insert(self.total_count);
		map
	}

	fn from_header_map(map: &HeaderMap) -> Result<Self, headers::Error> {
		Ok(Self {
			total_count: map
				.typed_try_get::<TotalCountHeader>()?
				.ok_or_else(headers::Error::invalid)?,
		})
	}
}

impl HasHeader<TotalCountHeader> for TotalCountResponseHeaders {
	fn get_header(&self) -> &TotalCountHeader {
		&self.total_count
	}
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::WithId;
	use crate::prelude::Uuid;

	#[test]
	pub fn test_with_id_empty() {
		assert_tokens(
			&WithId::new(Uuid::nil(), ()),
			&[
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("00000000000000000000000000000000"),
				Token::MapEnd,
			],
		);
	}
}
