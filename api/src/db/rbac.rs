use std::collections::{BTreeMap, BTreeSet};

use crate::prelude::*;

/// Initializes the rbac tables
#[instrument(skip(connection))]
pub async fn initialize_rbac_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up rbac tables");
	query(
		r#"
		CREATE TABLE event_role(
			event_id UUID NOT NULL CONSTRAINT event_role_fk_event_id
				REFERENCES event(id),
			user_id UUID NOT NULL CONSTRAINT event_role_fk_user_id
				REFERENCES "user"(id),
			role TEXT NOT NULL CONSTRAINT event_role_chk_role CHECK(
				role IN ('organizer', 'admin')
			),
			CONSTRAINT event_role_pk PRIMARY KEY(event_id, user_id, role)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE TABLE event_permission(
			event_id UUID NOT NULL CONSTRAINT event_permission_fk_event_id
				REFERENCES event(id),
			user_id UUID NOT NULL CONSTRAINT event_permission_fk_user_id
				REFERENCES "user"(id),
			permission TEXT NOT NULL,
			is_allowed BOOLEAN NOT NULL,
			granted_by UUID NOT NULL CONSTRAINT event_permission_fk_granted_by
				REFERENCES "user"(id),
			granted TIMESTAMPTZ NOT NULL,
			CONSTRAINT event_permission_pk
				PRIMARY KEY(event_id, user_id, permission)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the rbac table indices
#[instrument(skip(connection))]
pub async fn initialize_rbac_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up rbac tables indices");
	query(
		r#"
		CREATE INDEX
			event_role_idx_user_id
		ON
			event_role(user_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the rbac tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_rbac_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up rbac tables constraints");
	Ok(())
}

/// The outcome of an authorization check. Unlike a plain boolean, this keeps
/// the reason a check did not pass: a clean denial and a database failure are
/// both refusals, but only one of them is worth an error log.
#[derive(Debug)]
pub enum AccessDecision {
	/// The user holds the permission on the event (or owns the event).
	Allowed,
	/// The user does not hold the permission, or the event does not exist.
	Denied,
	/// The access lookup itself failed. Callers must treat this as a denial.
	EvaluationError(sqlx::Error),
}

/// Fetches the access a user has on an event. Returns `None` if the event
/// itself does not exist, [`EventAccess::Owner`] if the user created the
/// event, and a [`EventAccess::Collaborator`] with their roles and grants
/// otherwise. The grants are read fresh on every call, so a change applies
/// to the very next request.
#[instrument(skip(connection))]
pub async fn get_event_access(
	connection: &mut DatabaseConnection,
	event_id: &Uuid,
	user_id: &Uuid,
) -> Result<Option<EventAccess>, sqlx::Error> {
	let Some(event) = query(
		r#"
		SELECT
			owner_id
		FROM
			event
		WHERE
			id = $1;
		"#,
	)
	.bind(event_id)
	.fetch_optional(&mut *connection)
	.await?
	else {
		return Ok(None);
	};

	if event.try_get::<Uuid, _>("owner_id")? == *user_id {
		return Ok(Some(EventAccess::Owner));
	}

	let roles = query(
		r#"
		SELECT
			role
		FROM
			event_role
		WHERE
			event_id = $1 AND
			user_id = $2;
		"#,
	)
	.bind(event_id)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await?
	.into_iter()
	.map(|row| row.try_get::<EventRole, _>("role"))
	.collect::<Result<BTreeSet<_>, _>>()?;

	let permissions = query(
		r#"
		SELECT
			permission,
			is_allowed
		FROM
			event_permission
		WHERE
			event_id = $1 AND
			user_id = $2;
		"#,
	)
	.bind(event_id)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await?
	.into_iter()
	.map(|row| {
		Ok((
			row.try_get::<Permission, _>("permission")?,
			row.try_get::<bool, _>("is_allowed")?,
		))
	})
	.collect::<Result<BTreeMap<_, _>, sqlx::Error>>()?;

	Ok(Some(EventAccess::Collaborator { roles, permissions }))
}

/// Checks whether a user holds a permission on an event. The owner of an
/// event passes every check. A collaborator passes only with an explicit
/// `true` grant for exactly this permission. A missing event, a missing
/// grant, an explicit `false` grant and a failed lookup all refuse; the
/// seperate [`AccessDecision`] variants only exist so that the caller can
/// log a failed lookup differently from a clean denial.
#[instrument(skip(connection))]
pub async fn can_do(
	connection: &mut DatabaseConnection,
	event_id: &Uuid,
	user_id: &Uuid,
	permission: Permission,
) -> AccessDecision {
	decide(
		get_event_access(connection, event_id, user_id).await,
		permission,
	)
}

/// Maps an access lookup to a decision for one permission.
fn decide(
	access: Result<Option<EventAccess>, sqlx::Error>,
	permission: Permission,
) -> AccessDecision {
	match access {
		Ok(Some(access)) if access.allows(permission) => {
			AccessDecision::Allowed
		}
		Ok(_) => AccessDecision::Denied,
		Err(err) => AccessDecision::EvaluationError(err),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::{BTreeMap, BTreeSet};

	use models::prelude::*;

	use super::{decide, AccessDecision};

	#[test]
	fn owner_is_always_allowed() {
		// An owner passes even with a deny row on the same permission. The
		// grant table is never consulted for the owner.
		assert!(matches!(
			decide(Ok(Some(EventAccess::Owner)), Permission::EditBudget),
			AccessDecision::Allowed
		));
	}

	#[test]
	fn missing_event_is_denied() {
		assert!(matches!(
			decide(Ok(None), Permission::EditBudget),
			AccessDecision::Denied
		));
	}

	#[test]
	fn collaborator_needs_an_explicit_true_grant() {
		let access = EventAccess::Collaborator {
			roles: BTreeSet::from([EventRole::Admin]),
			permissions: BTreeMap::from([
				(Permission::ViewBudget, true),
				(Permission::EditBudget, false),
			]),
		};

		assert!(matches!(
			decide(Ok(Some(access.clone())), Permission::ViewBudget),
			AccessDecision::Allowed
		));
		assert!(matches!(
			decide(Ok(Some(access.clone())), Permission::EditBudget),
			AccessDecision::Denied
		));
		assert!(matches!(
			decide(Ok(Some(access)), Permission::ManageTasks),
			AccessDecision::Denied
		));
	}

	#[test]
	fn failed_lookup_is_not_an_allowance() {
		assert!(matches!(
			decide(Err(sqlx::Error::PoolClosed), Permission::ViewBudget),
			AccessDecision::EvaluationError(_)
		));
	}
}
