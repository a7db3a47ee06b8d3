use crate::prelude::*;

/// Initializes the resource tables
#[instrument(skip(connection))]
pub async fn initialize_resource_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up resource tables");

	// Needed for the equality part of the booking overlap exclusion
	query(
		r#"
		CREATE EXTENSION IF NOT EXISTS btree_gist;
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE TABLE resource(
			id UUID CONSTRAINT resource_pk PRIMARY KEY,
			event_id UUID NOT NULL CONSTRAINT resource_fk_event_id
				REFERENCES event(id),
			name TEXT NOT NULL,
			kind TEXT NOT NULL,
			capacity INTEGER CONSTRAINT resource_chk_capacity_positive CHECK(
				capacity IS NULL OR capacity > 0
			),
			created TIMESTAMPTZ NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE TABLE resource_booking(
			id UUID CONSTRAINT resource_booking_pk PRIMARY KEY,
			resource_id UUID NOT NULL CONSTRAINT resource_booking_fk_resource_id
				REFERENCES resource(id),
			booked_by UUID NOT NULL CONSTRAINT resource_booking_fk_booked_by
				REFERENCES "user"(id),
			starts TIMESTAMPTZ NOT NULL,
			ends TIMESTAMPTZ NOT NULL,
			note TEXT,
			status TEXT NOT NULL CONSTRAINT resource_booking_chk_status CHECK(
				status IN ('pending', 'confirmed', 'rejected', 'cancelled')
			),
			created TIMESTAMPTZ NOT NULL,
			CONSTRAINT resource_booking_chk_starts_before_ends CHECK(
				starts < ends
			)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the resource table indices
#[instrument(skip(connection))]
pub async fn initialize_resource_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up resource tables indices");
	query(
		r#"
		CREATE INDEX
			resource_idx_event_id
		ON
			resource(event_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE INDEX
			resource_booking_idx_resource_id
		ON
			resource_booking(resource_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the resource tables constraints
#[instrument(skip(connection))]
pub async fn initialize_resource_constraints(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up resource tables constraints");

	// Two bookings of the same resource must not overlap in time while both
	// of them still count against the resource, meaning pending or confirmed.
	// The handler checks this as well to give a clean error, but only this
	// constraint holds under concurrent requests.
	query(
		r#"
		ALTER TABLE
			resource_booking
		ADD CONSTRAINT resource_booking_excl_overlap EXCLUDE USING gist (
			resource_id WITH =,
			tstzrange(starts, ends) WITH &&
		) WHERE (status IN ('pending', 'confirmed'));
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}
