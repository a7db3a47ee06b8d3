use std::ops::Add;

use argon2::{
	password_hash::SaltString,
	Algorithm,
	PasswordHash,
	PasswordHasher,
	PasswordVerifier,
	Version,
};
use axum::http::StatusCode;
use jsonwebtoken::EncodingKey;
use models::api::auth::*;
use sqlx::types::ipnetwork::IpNetwork;
use time::OffsetDateTime;

use crate::{models::access_token_data::AccessTokenData, prelude::*};

pub async fn login(
	AppRequest {
		request:
			ProcessedApiRequest {
				path: LoginPath,
				query: (),
				headers: (),
				body: LoginRequestProcessed { user_id, password },
			},
		database,
		client_ip,
		config,
	}: AppRequest<'_, LoginRequest>,
) -> Result<AppResponse<LoginRequest>, ErrorType> {
	info!("Logging in user `{}`", user_id);

	let row = query(
		r#"
		SELECT
			id,
			password
		FROM
			"user"
		WHERE
			username = $1 OR
			email = $1;
		"#,
	)
	.bind(&user_id)
	.fetch_optional(&mut **database)
	.await?
	.ok_or(ErrorType::UserNotFound)?;

	let user_id = row.try_get::<Uuid, _>("id")?;
	let password_hash = row.try_get::<String, _>("password")?;

	let success = argon2::Argon2::new_with_secret(
		config.password_pepper.as_ref(),
		Algorithm::Argon2id,
		Version::V0x13,
		constants::HASHING_PARAMS,
	)
	.inspect_err(|err| {
		error!("Error creating Argon2: `{}`", err);
	})
	.map_err(ErrorType::server_error)?
	.verify_password(
		password.as_bytes(),
		&PasswordHash::new(&password_hash).map_err(ErrorType::server_error)?,
	)
	.is_ok();

	if !success {
		return Err(ErrorType::InvalidPassword);
	}
	trace!("Password verified");

	let now = OffsetDateTime::now_utc();
	let login_id = Uuid::now_v1();
	let refresh_token = Uuid::new_v4().to_string();

	let hashed_refresh_token = argon2::Argon2::new_with_secret(
		config.password_pepper.as_ref(),
		Algorithm::Argon2id,
		Version::V0x13,
		constants::HASHING_PARAMS,
	)
	.inspect_err(|err| {
		error!("Error creating Argon2: `{}`", err);
	})
	.map_err(ErrorType::server_error)?
	.hash_password(
		refresh_token.as_bytes(),
		SaltString::generate(&mut rand::thread_rng()).as_salt(),
	)
	.inspect_err(|err| {
		error!("Error hashing refresh token: `{}`", err);
	})
	.map_err(ErrorType::server_error)?
	.to_string();

	query(
		r#"
		INSERT INTO
			user_login(
				login_id,
				user_id,
				refresh_token,
				token_expiry,
				created,
				created_ip
			)
		VALUES
			($1, $2, $3, $4, NOW(), $5);
		"#,
	)
	.bind(login_id)
	.bind(user_id)
	.bind(hashed_refresh_token)
	.bind(now.add(AccessTokenData::REFRESH_TOKEN_VALIDITY))
	.bind(IpNetwork::from(client_ip))
	.execute(&mut **database)
	.await?;

	trace!("Login created with loginId `{}`", login_id);

	let access_token = AccessTokenData {
		iss: constants::JWT_ISSUER.to_string(),
		sub: login_id,
		aud: OneOrMore::One(constants::JWT_AUDIENCE.to_string()),
		exp: now.add(constants::ACCESS_TOKEN_VALIDITY),
		nbf: now,
		iat: now,
		jti: Uuid::now_v1(),
	};

	let access_token = jsonwebtoken::encode(
		&Default::default(),
		&access_token,
		&EncodingKey::from_secret(config.jwt_secret.as_ref()),
	)
	.inspect_err(|err| {
		error!("Error encoding JWT: `{}`", err);
	})?;

	trace!("Access token generated");

	AppResponse::builder()
		.body(LoginResponse {
			access_token,
			refresh_token: format!("{}.{}", login_id, refresh_token),
		})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
