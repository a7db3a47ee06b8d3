use crate::prelude::*;

/// Initializes the message tables
#[instrument(skip(connection))]
pub async fn initialize_message_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up message tables");
	query(
		r#"
		CREATE TABLE event_message(
			id UUID CONSTRAINT event_message_pk PRIMARY KEY,
			event_id UUID NOT NULL CONSTRAINT event_message_fk_event_id
				REFERENCES event(id),
			posted_by UUID NOT NULL CONSTRAINT event_message_fk_posted_by
				REFERENCES "user"(id),
			body TEXT NOT NULL,
			posted TIMESTAMPTZ NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the message table indices
#[instrument(skip(connection))]
pub async fn initialize_message_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up message tables indices");
	query(
		r#"
		CREATE INDEX
			event_message_idx_event_id
		ON
			event_message(event_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the message tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_message_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up message tables constraints");
	Ok(())
}
