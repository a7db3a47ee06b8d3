use crate::prelude::*;

/// Initializes the event tables
#[instrument(skip(connection))]
pub async fn initialize_event_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up event tables");
	query(
		r#"
		CREATE TABLE event(
			id UUID CONSTRAINT event_pk PRIMARY KEY,
			owner_id UUID NOT NULL CONSTRAINT event_fk_owner_id
				REFERENCES "user"(id),
			name TEXT NOT NULL,
			description TEXT NOT NULL,
			venue TEXT NOT NULL,
			starts TIMESTAMPTZ NOT NULL,
			ends TIMESTAMPTZ NOT NULL,
			status TEXT NOT NULL CONSTRAINT event_chk_status CHECK(
				status IN ('draft', 'published', 'cancelled')
			),
			created TIMESTAMPTZ NOT NULL,
			CONSTRAINT event_chk_starts_before_ends CHECK(starts < ends)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE TABLE event_attendee(
			event_id UUID NOT NULL CONSTRAINT event_attendee_fk_event_id
				REFERENCES event(id),
			user_id UUID NOT NULL CONSTRAINT event_attendee_fk_user_id
				REFERENCES "user"(id),
			registered TIMESTAMPTZ NOT NULL,
			CONSTRAINT event_attendee_pk PRIMARY KEY(event_id, user_id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the event table indices
#[instrument(skip(connection))]
pub async fn initialize_event_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up event tables indices");
	query(
		r#"
		CREATE INDEX
			event_idx_owner_id
		ON
			event(owner_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE INDEX
			event_idx_status
		ON
			event(status);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the event tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_event_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up event tables constraints");
	Ok(())
}
