/// Implements [`sqlx::Type`], [`sqlx::Encode`] and [`sqlx::Decode`] for a type
/// that is stored in the database as its string representation. The type must
/// implement [`Display`](std::fmt::Display) and
/// [`FromStr`](std::str::FromStr), which the permission and status enums of
/// this crate get from strum.
macro_rules! impl_sqlx_type_as_text {
	($type:ty) => {
		impl<DB> sqlx::Type<DB> for $type
		where
			DB: sqlx::Database,
			String: sqlx::Type<DB>,
		{
			fn type_info() -> <DB as sqlx::Database>::TypeInfo {
				<String as sqlx::Type<DB>>::type_info()
			}

			fn compatible(ty: &<DB as sqlx::Database>::TypeInfo) -> bool {
				<String as sqlx::Type<DB>>::compatible(ty)
			}
		}

		impl<'q, DB> sqlx::Encode<'q, DB> for $type
		where
			DB: sqlx::Database,
			String: sqlx::Encode<'q, DB>,
		{
			fn encode_by_ref(
				&self,
				buf: &mut <DB as sqlx::Database>::ArgumentBuffer<'q>,
			) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
				<String as sqlx::Encode<'q, DB>>::encode(self.to_string(), buf)
			}
		}

		impl<'q, DB> sqlx::Decode<'q, DB> for $type
		where
			DB: sqlx::Database,
			String: sqlx::Decode<'q, DB>,
		{
			fn decode(
				value: <DB as sqlx::Database>::ValueRef<'q>,
			) -> Result<Self, sqlx::error::BoxDynError> {
				let value = <String as sqlx::Decode<'q, DB>>::decode(value)?;
				Ok(::std::str::FromStr::from_str(&value)?)
			}
		}
	};
}

pub(crate) use impl_sqlx_type_as_text;
