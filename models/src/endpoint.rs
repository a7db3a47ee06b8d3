use std::fmt::Debug;

use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use serde::{de::DeserializeOwned, Serialize};

use crate::utils::{
	HasAuthentication,
	HasHeaders,
	Headers,
	IntoAxumResponse,
	RequiresRequestHeaders as RequestHeaders,
	RequiresResponseHeaders as ResponseHeaders,
};

/// A trait that defines an API endpoint. This is used to generate the routes
/// for the API, as well as the corresponding path, request query, request
/// headers, request body, response headers, and response body types.
///
/// Ideally, this trait would contain all the information needed to define the
/// functionality of a route, including what authentication it requires.
pub trait ApiEndpoint
where
	Self: Sized + Clone + Send + 'static,
	Self::RequestPath:
		TypedPath + ResponseHeaders + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
	Self::RequestQuery:
		ResponseHeaders + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
	Self::RequestHeaders: Headers
		+ ResponseHeaders
		+ HasHeaders<<Self::ResponseBody as RequestHeaders>::RequiredRequestHeaders>
		+ Clone
		+ Send
		+ Sync
		+ 'static,
	Self::RequestBody: Preprocessable
		+ ResponseHeaders
		+ Serialize
		+ DeserializeOwned
		+ Clone
		+ Send
		+ Sync
		+ 'static,
	Self::Authenticator: HasAuthentication + Send + Sync + 'static,
	Self::ResponseHeaders: Headers
		+ HasHeaders<<Self::RequestPath as ResponseHeaders>::RequiredResponseHeaders>
		+ HasHeaders<<Self::RequestQuery as ResponseHeaders>::RequiredResponseHeaders>
		+ HasHeaders<<Self::RequestBody as ResponseHeaders>::RequiredResponseHeaders>
		+ HasHeaders<<Self::RequestHeaders as ResponseHeaders>::RequiredResponseHeaders>
		+ Debug
		+ Send
		+ Sync
		+ 'static,
	Self::ResponseBody:
		IntoAxumResponse + RequestHeaders + ResponseHeaders + Debug + Send + Sync + 'static,
{
	/// The HTTP method that should be used for this endpoint
	const METHOD: reqwest::Method;
	/// How requests to this endpoint are authenticated. Declared as a value so
	/// that the authentication layer can read, for example, which permission
	/// the endpoint needs and how to find the event it is acting on.
	const AUTHENTICATION: Self::Authenticator;

	/// The path that should be used for this endpoint. This should be a valid
	/// URL path and can contain URL parameters as a struct. For example,
	/// `/event/:event_id` would be a valid path. The provided struct must
	/// implement [`serde::Deserialize`] and [`serde::Serialize`], in order to
	/// parse and serialize the URL parameters. This is internally implemented
	/// using [`axum_extra::routing::TypedPath`]
	type RequestPath;
	/// The query that should be used for this endpoint. This should be a valid
	/// URL query and can contain any query parameters that can be serialized
	/// and deserialized by serde
	type RequestQuery;
	/// The request headers that should be used for this endpoint. This should
	/// be a struct that implements [`Headers`]. Each field in this struct
	/// should be a valid header and should implement [`headers::Header`]
	type RequestHeaders;
	/// The request body that should be used for this endpoint. This should be
	/// a struct that implements [`serde::Deserialize`], [`serde::Serialize`]
	/// and [`Preprocessable`] for validation. Any request should be of JSON
	/// type.
	type RequestBody;

	/// The kind of authentication this endpoint uses. [`NoAuthentication`] for
	/// public routes, [`AppAuthentication`] for routes that need a signed-in
	/// user.
	///
	/// [`NoAuthentication`]: crate::utils::NoAuthentication
	/// [`AppAuthentication`]: crate::utils::AppAuthentication
	type Authenticator;

	/// The response headers that should be used for this endpoint. This should
	/// be a struct that implements [`Headers`]. Each field in this struct
	/// should be a valid header and should implement [`headers::Header`]
	type ResponseHeaders;
	/// The response body that should be used for this endpoint. This should be
	/// a struct that implements [`IntoAxumResponse`].
	type ResponseBody;
}
