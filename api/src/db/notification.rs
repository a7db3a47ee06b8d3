use crate::prelude::*;

/// Initializes the notification tables
#[instrument(skip(connection))]
pub async fn initialize_notification_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up notification tables");
	query(
		r#"
		CREATE TABLE notification(
			id UUID CONSTRAINT notification_pk PRIMARY KEY,
			user_id UUID NOT NULL CONSTRAINT notification_fk_user_id
				REFERENCES "user"(id),
			event_id UUID CONSTRAINT notification_fk_event_id
				REFERENCES event(id),
			message TEXT NOT NULL,
			read BOOLEAN NOT NULL,
			created TIMESTAMPTZ NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the notification table indices
#[instrument(skip(connection))]
pub async fn initialize_notification_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up notification tables indices");
	query(
		r#"
		CREATE INDEX
			notification_idx_user_id
		ON
			notification(user_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the notification tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_notification_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up notification tables constraints");
	Ok(())
}

/// Drops an unread notification into a user's inbox. The notification is
/// written in the caller's transaction, so it only becomes visible if the
/// action it describes goes through.
pub async fn add_notification(
	connection: &mut DatabaseConnection,
	user_id: &Uuid,
	event_id: Option<&Uuid>,
	message: &str,
) -> Result<Uuid, sqlx::Error> {
	let id = Uuid::now_v1();
	query(
		r#"
		INSERT INTO
			notification(
				id,
				user_id,
				event_id,
				message,
				read,
				created
			)
		VALUES
			($1, $2, $3, $4, FALSE, NOW());
		"#,
	)
	.bind(id)
	.bind(user_id)
	.bind(event_id)
	.bind(message)
	.execute(&mut *connection)
	.await?;

	Ok(id)
}
