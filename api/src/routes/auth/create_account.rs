use argon2::{password_hash::SaltString, Algorithm, PasswordHasher, Version};
use axum::http::StatusCode;
use models::api::auth::*;

use crate::prelude::*;

pub async fn create_account(
	AppRequest {
		request:
			ProcessedApiRequest {
				path: CreateAccountPath,
				query: (),
				headers: (),
				body:
					CreateAccountRequestProcessed {
						username,
						password,
						first_name,
						last_name,
						email,
					},
			},
		database,
		client_ip: _,
		config,
	}: AppRequest<'_, CreateAccountRequest>,
) -> Result<AppResponse<CreateAccountRequest>, ErrorType> {
	info!("Creating account for username `{}`", username);

	let username_taken = query(
		r#"
		SELECT
			id
		FROM
			"user"
		WHERE
			username = $1;
		"#,
	)
	.bind(&username)
	.fetch_optional(&mut **database)
	.await?
	.is_some();

	if username_taken {
		return Err(ErrorType::UsernameUnavailable);
	}
	trace!("Username is available");

	let email_taken = query(
		r#"
		SELECT
			id
		FROM
			"user"
		WHERE
			email = $1;
		"#,
	)
	.bind(&email)
	.fetch_optional(&mut **database)
	.await?
	.is_some();

	if email_taken {
		return Err(ErrorType::EmailUnavailable);
	}
	trace!("Email is available");

	let hashed_password = argon2::Argon2::new_with_secret(
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
		password.as_bytes(),
		SaltString::generate(&mut rand::thread_rng()).as_salt(),
	)
	.inspect_err(|err| {
		error!("Error hashing password: `{}`", err);
	})
	.map_err(ErrorType::server_error)?
	.to_string();

	let user_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			"user"(
				id,
				username,
				password,
				first_name,
				last_name,
				email,
				created
			)
		VALUES
			($1, $2, $3, $4, $5, $6, NOW());
		"#,
	)
	.bind(user_id)
	.bind(&username)
	.bind(hashed_password)
	.bind(&first_name)
	.bind(&last_name)
	.bind(&email)
	.execute(&mut **database)
	.await?;

	trace!("User inserted into the database");

	AppResponse::builder()
		.body(CreateAccountResponse {})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
