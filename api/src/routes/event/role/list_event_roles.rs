use std::collections::BTreeSet;

use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to list the organizing team of an event, with every role each
/// member holds. The team is only visible to the owner and to the team
/// itself. Everyone else is told the event does not exist or that they cannot
/// see it, depending on whether they could know about it at all.
pub async fn list_event_roles(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListEventRolesPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListEventRolesRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, ListEventRolesRequest>,
) -> Result<AppResponse<ListEventRolesRequest>, ErrorType> {
	info!("Listing the organizing team of event `{}`", event_id);

	let access = db::get_event_access(&mut **database, &event_id, &user_data.id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	if !(access.is_organizer() || access.is_admin()) {
		return Err(ErrorType::Unauthorized);
	}

	let rows = query(
		r#"
		SELECT
			event_role.user_id,
			"user".username,
			event_role.role
		FROM
			event_role
		INNER JOIN
			"user"
		ON
			event_role.user_id = "user".id
		WHERE
			event_role.event_id = $1
		ORDER BY
			"user".username ASC,
			event_role.role ASC;
		"#,
	)
	.bind(event_id)
	.fetch_all(&mut **database)
	.await?;

	// Rows are sorted by user, so every member's roles arrive back to back
	let mut members = Vec::<WithId<EventRoleMember>>::new();
	for row in rows {
		let user_id = row.try_get::<Uuid, _>("user_id")?;
		let role = row.try_get::<EventRole, _>("role")?;
		match members.last_mut() {
			Some(member) if member.id == user_id => {
				member.data.roles.insert(role);
			}
			_ => {
				members.push(WithId::new(
					user_id,
					EventRoleMember {
						username: row.try_get::<String, _>("username")?,
						roles: BTreeSet::from([role]),
					},
				));
			}
		}
	}

	AppResponse::builder()
		.body(ListEventRolesResponse { members })
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
