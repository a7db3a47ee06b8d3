use preprocess::Preprocessable;
use typed_builder::TypedBuilder;

use crate::prelude::*;

/// This struct represents a request to the API. It contains the path, query,
/// headers and body of the request, exactly as the client sent them. This
/// struct provides a builder API to make it easier to construct requests.
#[derive(TypedBuilder)]
pub struct ApiRequest<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	/// The path of the request. This is the part of the URL after the domain
	/// and port.
	pub path: E::RequestPath,
	/// The query of the request. This is the part of the URL after the `?`.
	pub query: E::RequestQuery,
	/// The headers of the request.
	pub headers: E::RequestHeaders,
	/// The body of the request. This is the actual data that was sent by the
	/// client, not yet validated.
	pub body: E::RequestBody,
}

/// An [`ApiRequest`] whose body has been run through its preprocessor. All
/// validation of the body happens in that step, so handlers (and the
/// authentication layer before them) only ever see data that has already
/// passed it.
pub struct ProcessedApiRequest<E>
where
	E: ApiEndpoint,
{
	/// The path of the request. This is the part of the URL after the domain
	/// and port.
	pub path: E::RequestPath,
	/// The query of the request. This is the part of the URL after the `?`.
	pub query: E::RequestQuery,
	/// The headers of the request.
	pub headers: E::RequestHeaders,
	/// The preprocessed body of the request.
	pub body: <E::RequestBody as Preprocessable>::Processed,
}

impl<E> TryFrom<ApiRequest<E>> for ProcessedApiRequest<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	type Error = preprocess::Error;

	fn try_from(request: ApiRequest<E>) -> Result<Self, Self::Error> {
		let ApiRequest {
			path,
			query,
			headers,
			body,
		} = request;
		Ok(Self {
			path,
			query,
			headers,
			body: body.preprocess()?,
		})
	}
}
