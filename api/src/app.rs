use std::net::IpAddr;

use models::ApiSuccessResponse;
use preprocess::Preprocessable;

use crate::prelude::*;

/// The global state of the application.
/// This contains the database connection pool and the parsed configuration.
#[derive(Clone)]
pub struct AppState {
	/// The database connection pool.
	pub database: sqlx::Pool<DatabaseType>,
	/// The application configuration.
	pub config: AppConfig,
}

/// A request that has been parsed off the wire, but whose body has not been
/// run through its preprocessor yet. This is what the request parser layer
/// hands to the preprocess layer along with everything else a handler will
/// eventually need.
pub struct UnprocessedAppRequest<'a, E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	/// The request, exactly as the client sent it.
	pub request: ApiRequest<E>,
	/// The database transaction for this request. This is committed only if
	/// the handler (and every layer in between) succeeds, and rolled back
	/// otherwise.
	pub database: &'a mut DatabaseTransaction,
	/// The IP address the request came from.
	pub client_ip: IpAddr,
	/// The application configuration.
	pub config: AppConfig,
}

/// A request whose body has passed its preprocessor. Endpoints that don't
/// require authentication are handed this directly; the rest go through the
/// authentication layer first.
pub struct AppRequest<'a, E>
where
	E: ApiEndpoint,
{
	/// The preprocessed request.
	pub request: ProcessedApiRequest<E>,
	/// The database transaction for this request. This is committed only if
	/// the handler (and every layer in between) succeeds, and rolled back
	/// otherwise.
	pub database: &'a mut DatabaseTransaction,
	/// The IP address the request came from.
	pub client_ip: IpAddr,
	/// The application configuration.
	pub config: AppConfig,
}

/// A request that has passed the authentication layer. Carries the data of
/// the user the access token was minted for, on top of everything in
/// [`AppRequest`].
pub struct AuthenticatedAppRequest<'a, E>
where
	E: ApiEndpoint,
{
	/// The preprocessed request.
	pub request: ProcessedApiRequest<E>,
	/// The database transaction for this request. This is committed only if
	/// the handler (and every layer in between) succeeds, and rolled back
	/// otherwise.
	pub database: &'a mut DatabaseTransaction,
	/// The IP address the request came from.
	pub client_ip: IpAddr,
	/// The application configuration.
	pub config: AppConfig,
	/// The data of the user that made the request.
	pub user_data: RequestUserData,
}

/// The response that a handler returns for its endpoint. Handlers build this
/// with [`ApiSuccessResponse::builder`] and wrap it with
/// [`ApiSuccessResponse::into_result`] as their final expression.
pub type AppResponse<E> = ApiSuccessResponse<E>;
