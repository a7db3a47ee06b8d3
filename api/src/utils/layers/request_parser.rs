use std::{
	convert::Infallible,
	error::Error as StdError,
	future::Future,
	marker::PhantomData,
	task::{Context, Poll},
};

use axum::{
	body::HttpBody,
	extract::{FromRequest, FromRequestParts, Path, Query},
	http::{Method, Request},
	response::{IntoResponse, Response},
	Json,
};
use models::ApiErrorResponse;
use preprocess::Preprocessable;
use serde_json::Value;
use tower::{Layer, Service};

use crate::{prelude::*, utils::extractors::ClientIP};

/// The [`tower::Layer`] that parses an incoming [`Request`] into an
/// [`UnprocessedAppRequest`] for the given endpoint. This is the outermost
/// layer of every mounted endpoint. It parses the URL, query, headers and
/// body of the request, extracts the client IP, and opens the database
/// transaction that the rest of the layers and the handler run in. The
/// transaction is committed if the handler succeeds and rolled back if it
/// fails.
#[derive(Clone, Debug)]
pub struct RequestParserLayer<E>
where
	E: ApiEndpoint,
{
	/// The endpoint type that this layer will handle.
	phantom: PhantomData<E>,
	/// The state of the application, containing the database connection
	/// pool and the config.
	state: AppState,
}

impl<E> RequestParserLayer<E>
where
	E: ApiEndpoint,
{
	/// Create a new [`RequestParserLayer`] with the given state.
	pub fn with_state(state: AppState) -> Self {
		Self {
			phantom: PhantomData,
			state,
		}
	}
}

impl<S, E> Layer<S> for RequestParserLayer<E>
where
	for<'a> S: Service<UnprocessedAppRequest<'a, E>>,
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	type Service = RequestParser<S, E>;

	fn layer(&self, inner: S) -> Self::Service {
		RequestParser {
			inner,
			state: self.state.clone(),
			phantom: PhantomData,
		}
	}
}

/// The underlying service that runs when the [`RequestParserLayer`] is
/// used.
#[derive(Clone, Debug)]
pub struct RequestParser<S, E>
where
	for<'a> S: Service<UnprocessedAppRequest<'a, E>>,
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	/// The inner service that will be called with the parsed request.
	inner: S,
	/// The state of the application.
	state: AppState,
	/// The endpoint type that this service will handle.
	phantom: PhantomData<E>,
}

impl<B, S, E> Service<Request<B>> for RequestParser<S, E>
where
	B: HttpBody + Send + 'static,
	B::Data: Send,
	B::Error: StdError + Send + Sync,
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
	for<'a> S: Service<
			UnprocessedAppRequest<'a, E>,
			Response = AppResponse<E>,
			Error = ErrorType,
		> + Clone,
{
	type Error = Infallible;
	type Response = Response;

	type Future = impl Future<Output = Result<Self::Response, Self::Error>>;

	fn poll_ready(
		&mut self,
		cx: &mut Context<'_>,
	) -> Poll<Result<(), Self::Error>> {
		self.inner
			.poll_ready(cx)
			.map_err(|_| unreachable!("Layers must always be ready"))
	}

	#[instrument(skip(self, req))]
	fn call(&mut self, req: Request<B>) -> Self::Future {
		let state = self.state.clone();
		let mut inner = self.inner.clone();
		async {
			let (mut parts, body) = req.into_parts();
			let Ok(Path(path)) =
				FromRequestParts::from_request_parts(&mut parts, &state).await
			else {
				debug!("Failed to parse path: {}", parts.uri.path());
				return Ok(ApiErrorResponse::error_with_message(
					ErrorType::WrongParameters,
					"Invalid Request URL",
				)
				.into_response());
			};

			let Ok(Query(query)) =
				FromRequestParts::from_request_parts(&mut parts, &state).await
			else {
				debug!("Failed to parse query: {:?}", parts.uri.query());
				return Ok(ApiErrorResponse::error_with_message(
					ErrorType::WrongParameters,
					"Invalid Query Parameters",
				)
				.into_response());
			};

			let Ok(headers) =
				<E::RequestHeaders as Headers>::from_header_map(&parts.headers)
			else {
				debug!("Failed to parse headers");
				return Ok(ApiErrorResponse::error_with_message(
					ErrorType::WrongParameters,
					"Invalid Headers",
				)
				.into_response());
			};

			let Ok(ClientIP(client_ip)) =
				ClientIP::from_request_parts(&mut parts, &state).await
			else {
				debug!("Failed to extract client IP");
				return Ok(ApiErrorResponse::internal_error(
					"unable to determine client IP",
				)
				.into_response());
			};

			// GET and DELETE requests carry no body, and neither do some
			// POST endpoints like sign-out. Those endpoints declare a unit
			// body type, which deserializes from null
			let body = if E::METHOD == Method::GET ||
				E::METHOD == Method::DELETE ||
				body.is_end_stream()
			{
				let Ok(body) = serde_json::from_value(Value::Null) else {
					debug!("Failed to parse body");
					return Ok(ApiErrorResponse::error_with_message(
						ErrorType::WrongParameters,
						"Invalid body",
					)
					.into_response());
				};
				body
			} else {
				let req = Request::from_parts(parts, body);
				let Ok(Json(body)) =
					FromRequest::from_request(req, &state).await
				else {
					debug!("Failed to parse body");
					return Ok(ApiErrorResponse::error_with_message(
						ErrorType::WrongParameters,
						"Invalid body",
					)
					.into_response());
				};
				body
			};

			let Ok(mut database) = state.database.begin().await else {
				debug!("Failed to begin database transaction");
				return Ok(ApiErrorResponse::internal_error(
					"unable to begin database transaction",
				)
				.into_response());
			};

			let req = UnprocessedAppRequest {
				request: ApiRequest {
					path,
					query,
					headers,
					body,
				},
				database: &mut database,
				client_ip,
				config: state.config.clone(),
			};

			match inner.call(req).await {
				Ok(response) => {
					let Ok(()) = database.commit().await else {
						debug!("Failed to commit database transaction");
						return Ok(ApiErrorResponse::internal_error(
							"unable to commit database transaction",
						)
						.into_response());
					};
					Ok((
						response.status_code,
						response.headers.to_header_map(),
						response.body.into_axum_response(),
					)
						.into_response())
				}
				Err(error) => {
					let Ok(()) = database.rollback().await else {
						debug!("Failed to rollback database transaction");
						return Ok(ApiErrorResponse::internal_error(
							"unable to rollback database transaction",
						)
						.into_response());
					};

					Ok(ApiErrorResponse::error(error).into_response())
				}
			}
		}
	}
}
