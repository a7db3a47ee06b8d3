use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn list_event_permissions(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListEventPermissionsPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListEventPermissionsRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, ListEventPermissionsRequest>,
) -> Result<AppResponse<ListEventPermissionsRequest>, ErrorType> {
	info!("Listing permission grants on event `{}`", event_id);

	let grants = query(
		r#"
		SELECT
			user_id,
			permission,
			is_allowed,
			granted_by,
			granted
		FROM
			event_permission
		WHERE
			event_id = $1
		ORDER BY
			granted ASC;
		"#,
	)
	.bind(event_id)
	.fetch_all(&mut **database)
	.await?
	.into_iter()
	.map(|row| {
		Ok(EventPermissionGrant {
			user_id: row.try_get::<Uuid, _>("user_id")?,
			permission: row.try_get::<Permission, _>("permission")?,
			allowed: row.try_get::<bool, _>("is_allowed")?,
			granted_by: row.try_get::<Uuid, _>("granted_by")?,
			granted: row.try_get::<OffsetDateTime, _>("granted")?,
		})
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListEventPermissionsResponse { grants })
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
