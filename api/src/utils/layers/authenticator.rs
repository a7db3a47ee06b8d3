use std::{
	future::Future,
	marker::PhantomData,
	ops::Sub,
	task::{Context, Poll},
};

use jsonwebtoken::{DecodingKey, TokenData, Validation};
use models::utils::{
	AppAuthentication,
	BearerToken,
	HasAuthentication,
	HasHeader,
};
use preprocess::Preprocessable;
use time::OffsetDateTime;
use tower::{Layer, Service};

use crate::{
	db::AccessDecision,
	models::access_token_data::AccessTokenData,
	prelude::*,
	utils::constants,
};

/// The [`tower::Layer`] used to authenticate requests. This will parse the
/// [`BearerToken`] header and verify it against the database. If the token
/// is valid, the [`RequestUserData`] will be added to the request, and the
/// authentication rules declared by the endpoint (plain token, event owner
/// or event permission) are enforced. All subsequent underlying layers will
/// recieve an [`AuthenticatedAppRequest`] with the appropriate
/// [`RequestUserData`] filled.
pub struct AuthenticationLayer<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	/// The endpoint type that this layer will handle.
	endpoint: PhantomData<E>,
}

impl<E> Default for AuthenticationLayer<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<E> AuthenticationLayer<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	/// Helper function to initialize an authentication layer
	pub const fn new() -> Self {
		Self {
			endpoint: PhantomData,
		}
	}
}

impl<E, S> Layer<S> for AuthenticationLayer<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
	for<'a> S: Service<AuthenticatedAppRequest<'a, E>>,
{
	type Service = AuthenticationService<E::Authenticator, E, S>;

	fn layer(&self, inner: S) -> Self::Service {
		AuthenticationService {
			inner,
			authenticator: PhantomData,
			endpoint: PhantomData,
		}
	}
}

impl<E> Clone for AuthenticationLayer<E>
where
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	fn clone(&self) -> Self {
		Self {
			endpoint: PhantomData,
		}
	}
}

/// The underlying service that runs when the [`AuthenticationLayer`] is
/// used.
pub struct AuthenticationService<A, E, S>
where
	A: HasAuthentication,
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
{
	/// The inner service that will be called once the request is
	/// authenticated.
	inner: S,
	/// The authenticator declared by the endpoint.
	authenticator: PhantomData<A>,
	/// The endpoint type that this service will handle.
	endpoint: PhantomData<E>,
}

impl<'a, E, S> Service<AppRequest<'a, E>>
	for AuthenticationService<AppAuthentication<E>, E, S>
where
	E: ApiEndpoint<Authenticator = AppAuthentication<E>>,
	<E::RequestBody as Preprocessable>::Processed: Send,
	E::RequestHeaders: HasHeader<BearerToken>,
	for<'b> S: Service<
			AuthenticatedAppRequest<'b, E>,
			Response = AppResponse<E>,
			Error = ErrorType,
		> + Clone,
{
	type Error = ErrorType;
	type Response = AppResponse<E>;

	type Future = impl Future<Output = Result<Self::Response, Self::Error>>;

	fn poll_ready(
		&mut self,
		cx: &mut Context<'_>,
	) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	#[instrument(skip(self, req))]
	fn call(&mut self, req: AppRequest<'a, E>) -> Self::Future {
		let mut inner = self.inner.clone();
		async move {
			trace!("Authenticating request");
			let BearerToken(token) = req.request.headers.get_header();
			let token = token.token();

			let TokenData {
				header: _,
				claims:
					AccessTokenData {
						iss,
						sub,
						aud: _,
						exp,
						nbf,
						iat: _,
						jti,
					},
			} = jsonwebtoken::decode(
				token,
				&DecodingKey::from_secret(req.config.jwt_secret.as_ref()),
				&{
					let mut validation = Validation::default();

					// We'll manually do this
					validation.validate_exp = false;
					validation.validate_nbf = false;

					validation
				},
			)
			.map_err(|err| {
				warn!("Invalid JWT provided: {}", err);
				ErrorType::MalformedAccessToken
			})?;
			trace!("Authentication header is a valid JWT");

			if iss != constants::JWT_ISSUER {
				warn!("Invalid JWT issuer: {}", iss);
				return Err(ErrorType::MalformedAccessToken);
			}
			trace!("JWT issuer valid");

			// The token should have been issued within the last
			// `REFRESH_TOKEN_VALIDITY` duration
			if OffsetDateTime::now_utc().sub(
				jti.get_timestamp()
					.ok_or_else(|| ErrorType::MalformedAccessToken)?,
			) > AccessTokenData::REFRESH_TOKEN_VALIDITY
			{
				warn!("JWT is too old");
				return Err(ErrorType::AuthorizationTokenInvalid);
			}
			trace!("JWT JTI valid");

			if OffsetDateTime::now_utc() < nbf {
				warn!("JWT is not valid yet");
				return Err(ErrorType::AuthorizationTokenInvalid);
			}
			trace!("JWT NBF valid");

			if OffsetDateTime::now_utc() > exp {
				warn!("JWT has expired");
				return Err(ErrorType::AuthorizationTokenInvalid);
			}
			trace!("JWT EXP valid");

			let Some(user) = query(
				r#"
				SELECT
					"user".id,
					"user".username,
					"user".first_name,
					"user".last_name,
					"user".created
				FROM
					"user"
				INNER JOIN
					user_login
				ON
					"user".id = user_login.user_id
				WHERE
					user_login.login_id = $1;
				"#,
			)
			.bind(sub)
			.fetch_optional(&mut **req.database)
			.await?
			else {
				// No specific error for the login not being found, since we
				// don't want to leak information about whether a loginId is
				// valid or if it's expired
				warn!("login not found");
				return Err(ErrorType::AuthorizationTokenInvalid);
			};
			trace!("Login exists in the database");

			let user_data = RequestUserData::builder()
				.id(user.try_get::<Uuid, _>("id")?)
				.username(user.try_get::<String, _>("username")?)
				.first_name(user.try_get::<String, _>("first_name")?)
				.last_name(user.try_get::<String, _>("last_name")?)
				.created(user.try_get::<OffsetDateTime, _>("created")?)
				.login_id(sub)
				.build();

			match E::AUTHENTICATION {
				AppAuthentication::PlainTokenAuthenticator => {
					trace!("Endpoint needs no further authorization");
				}
				AppAuthentication::EventOwnerAuthenticator {
					extract_event_id,
				} => {
					let event_id = extract_event_id(&req.request);
					let access = match db::get_event_access(
						&mut **req.database,
						&event_id,
						&user_data.id,
					)
					.await
					{
						Ok(access) => access,
						Err(err) => {
							// Errors during an authorization check deny
							// access, they never grant it
							error!(
								"Error getting access to event `{}`: {}",
								event_id, err
							);
							return Err(ErrorType::Unauthorized);
						}
					};
					if !access.is_some_and(|access| access.is_owner()) {
						info!(
							"User `{}` is not the owner of event `{}`",
							user_data.id, event_id
						);
						return Err(ErrorType::Unauthorized);
					}
					trace!("User is the owner of event `{}`", event_id);
				}
				AppAuthentication::EventPermissionAuthenticator {
					extract_event_id,
					permission,
				} => {
					let event_id = extract_event_id(&req.request);
					match db::can_do(
						&mut **req.database,
						&event_id,
						&user_data.id,
						permission,
					)
					.await
					{
						AccessDecision::Allowed => {
							trace!(
								"User can `{}` on event `{}`",
								permission,
								event_id
							);
						}
						AccessDecision::Denied => {
							info!(
								"User `{}` cannot `{}` on event `{}`",
								user_data.id, permission, event_id
							);
							return Err(ErrorType::Unauthorized);
						}
						AccessDecision::EvaluationError(err) => {
							error!(
								"Error evaluating `{}` on event `{}`: {}",
								permission, event_id, err
							);
							return Err(ErrorType::Unauthorized);
						}
					}
				}
			}

			let AppRequest {
				request,
				database,
				client_ip,
				config,
			} = req;
			let req = AuthenticatedAppRequest {
				request,
				database,
				client_ip,
				config,
				user_data,
			};
			inner.call(req).await
		}
	}
}

impl<A, E, S> Clone for AuthenticationService<A, E, S>
where
	A: HasAuthentication,
	E: ApiEndpoint,
	<E::RequestBody as Preprocessable>::Processed: Send,
	for<'b> S: Service<
			AuthenticatedAppRequest<'b, E>,
			Response = AppResponse<E>,
			Error = ErrorType,
		> + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			authenticator: PhantomData,
			endpoint: PhantomData,
		}
	}
}
