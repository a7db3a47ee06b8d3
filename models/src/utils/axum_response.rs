use axum::{
	response::{IntoResponse, Response},
	Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{response::ApiSuccessResponseBody, utils::True};

/// Converts an endpoint's response body into an axum [`Response`]. Any
/// serializable body is wrapped in the standard success envelope and sent as
/// JSON.
pub trait IntoAxumResponse {
	/// Convert the body into an axum [`Response`]
	fn into_axum_response(self) -> Response;
}

impl<T> IntoAxumResponse for T
where
	T: Serialize + DeserializeOwned,
{
	fn into_axum_response(self) -> Response {
		Json(ApiSuccessResponseBody {
			success: True,
			response: self,
		})
		.into_response()
	}
}
