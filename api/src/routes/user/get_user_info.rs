use axum::http::StatusCode;
use models::api::{user::*, AuthenticatedRequestHeaders};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn get_user_info(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: GetUserInfoPath,
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: GetUserInfoRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, GetUserInfoRequest>,
) -> Result<AppResponse<GetUserInfoRequest>, ErrorType> {
	info!("Getting user info for user `{}`", user_data.id);

	let user_info = query(
		r#"
		SELECT
			username,
			first_name,
			last_name,
			email,
			created
		FROM
			"user"
		WHERE
			id = $1;
		"#,
	)
	.bind(user_data.id)
	.fetch_optional(&mut **database)
	.await?
	.ok_or(ErrorType::UserNotFound)?;

	AppResponse::builder()
		.body(GetUserInfoResponse {
			basic_user_info: WithId::new(
				user_data.id,
				BasicUserInfo {
					username: user_info.try_get::<String, _>("username")?,
					first_name: user_info.try_get::<String, _>("first_name")?,
					last_name: user_info.try_get::<String, _>("last_name")?,
				},
			),
			email: user_info.try_get::<String, _>("email")?,
			created: user_info.try_get::<OffsetDateTime, _>("created")?,
		})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
