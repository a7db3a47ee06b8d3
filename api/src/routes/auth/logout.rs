use axum::http::StatusCode;
use models::api::{auth::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn logout(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: LogoutPath,
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: LogoutRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, LogoutRequest>,
) -> Result<AppResponse<LogoutRequest>, ErrorType> {
	info!("Logging out loginId `{}`", user_data.login_id);

	query(
		r#"
		DELETE FROM
			user_login
		WHERE
			login_id = $1;
		"#,
	)
	.bind(user_data.login_id)
	.execute(&mut **database)
	.await?;

	trace!("Login deleted");

	AppResponse::builder()
		.body(LogoutResponse {})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
