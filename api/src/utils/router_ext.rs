use axum::{
	routing::{MethodFilter, MethodRouter},
	Router,
};
use axum_extra::routing::TypedPath;
use models::{
	utils::{AppAuthentication, BearerToken, HasHeader, NoAuthentication},
	ApiEndpoint,
};
use preprocess::Preprocessable;
use tower::ServiceBuilder;

use super::layers::{
	AuthEndpointHandler,
	AuthEndpointLayer,
	AuthenticationLayer,
	EndpointHandler,
	EndpointLayer,
	PreprocessLayer,
	RequestParserLayer,
};
use crate::prelude::*;

/// Extension trait for axum [`Router`] to mount an [`ApiEndpoint`] along
/// with the layers that parse, preprocess and (where required)
/// authenticate the request before it reaches the handler.
pub trait RouterExt<S>
where
	S: Clone + Send + Sync + 'static,
{
	/// Mount an API endpoint that does not require authentication, along
	/// with the required request parser and preprocessor for that
	/// endpoint.
	#[track_caller]
	fn mount_endpoint<E, H>(self, handler: H, state: &AppState) -> Self
	where
		for<'req> H: EndpointHandler<'req, E> + Clone + Send + Sync + 'static,
		E: ApiEndpoint<Authenticator = NoAuthentication> + Sync,
		<E::RequestBody as Preprocessable>::Processed: Send;

	/// Mount an API endpoint that requires authentication. The provided
	/// handler will only be called once the access token is validated and
	/// the authentication rules for the endpoint pass.
	#[track_caller]
	fn mount_auth_endpoint<E, H>(self, handler: H, state: &AppState) -> Self
	where
		H: AuthEndpointHandler<E> + Clone + Send + Sync + 'static,
		E: ApiEndpoint<Authenticator = AppAuthentication<E>> + Sync,
		<E::RequestBody as Preprocessable>::Processed: Send,
		E::RequestHeaders: HasHeader<BearerToken>;
}

impl<S> RouterExt<S> for Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	#[track_caller]
	fn mount_endpoint<E, H>(self, handler: H, state: &AppState) -> Self
	where
		for<'req> H: EndpointHandler<'req, E> + Clone + Send + Sync + 'static,
		E: ApiEndpoint<Authenticator = NoAuthentication> + Sync,
		<E::RequestBody as Preprocessable>::Processed: Send,
	{
		self.route(
			<<E as ApiEndpoint>::RequestPath as TypedPath>::PATH,
			MethodRouter::<S>::new()
				.on(
					MethodFilter::try_from(<E as ApiEndpoint>::METHOD).unwrap(),
					|| async { unreachable!() },
				)
				.layer(
					ServiceBuilder::new()
						.layer(RequestParserLayer::with_state(state.clone()))
						.layer(PreprocessLayer::new())
						.layer(EndpointLayer::new(handler)),
				),
		)
	}

	#[track_caller]
	fn mount_auth_endpoint<E, H>(self, handler: H, state: &AppState) -> Self
	where
		H: AuthEndpointHandler<E> + Clone + Send + Sync + 'static,
		E: ApiEndpoint<Authenticator = AppAuthentication<E>> + Sync,
		<E::RequestBody as Preprocessable>::Processed: Send,
		E::RequestHeaders: HasHeader<BearerToken>,
	{
		self.route(
			<<E as ApiEndpoint>::RequestPath as TypedPath>::PATH,
			MethodRouter::<S>::new()
				.on(
					MethodFilter::try_from(<E as ApiEndpoint>::METHOD).unwrap(),
					|| async { unreachable!() },
				)
				.layer(
					ServiceBuilder::new()
						.layer(RequestParserLayer::with_state(state.clone()))
						.layer(PreprocessLayer::new())
						.layer(AuthenticationLayer::new())
						.layer(AuthEndpointLayer::new(handler)),
				),
		)
	}
}
