use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use axum::http::StatusCode;
use serde::{de::Error, Deserialize, Serialize};

/// A list of all the possible errors that can be returned by the API
#[derive(Debug)]
pub enum ErrorType {
	/// The email provided is invalid
	InvalidEmail,
	/// The user was not found
	UserNotFound,
	/// The password provided is invalid
	InvalidPassword,
	/// The parameters sent with the request is invalid. This would ideally not
	/// happen unless there is a bug in the client
	WrongParameters,
	/// The access token (JWT) provided is malformed
	MalformedAccessToken,
	/// The refresh token provided is malformed
	MalformedRefreshToken,
	/// The authentication token provided is not authorized to perform the
	/// requested action
	Unauthorized,
	/// The access token (JWT) provided is invalid
	AuthorizationTokenInvalid,
	/// The username provided is not available. It is being used by another
	/// account
	UsernameUnavailable,
	/// The email provided is not available. It is being used by another account
	EmailUnavailable,
	/// The resource that the user is trying to access does not exist.
	ResourceDoesNotExist,
	/// The event is not accepting registrations, either because it is still a
	/// draft or because it has been cancelled
	EventNotPublished,
	/// The user is already registered as an attendee of the event
	AlreadyRegistered,
	/// The requested booking overlaps with an existing booking for the same
	/// resource
	BookingConflict,
	/// The requested status change is not valid from the current status. For
	/// example, a rejected booking cannot be confirmed afterwards
	InvalidStatusTransition,
	/// An internal server error occurred. This should not happen unless there
	/// is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can override
	/// this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::InvalidEmail => StatusCode::BAD_REQUEST,
			Self::UserNotFound => StatusCode::BAD_REQUEST,
			Self::InvalidPassword => StatusCode::UNAUTHORIZED,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::MalformedAccessToken => StatusCode::BAD_REQUEST,
			Self::MalformedRefreshToken => StatusCode::BAD_REQUEST,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::AuthorizationTokenInvalid => StatusCode::UNAUTHORIZED,
			Self::UsernameUnavailable => StatusCode::CONFLICT,
			Self::EmailUnavailable => StatusCode::CONFLICT,
			Self::ResourceDoesNotExist => StatusCode::NOT_FOUND,
			Self::EventNotPublished => StatusCode::CONFLICT,
			Self::AlreadyRegistered => StatusCode::CONFLICT,
			Self::BookingConflict => StatusCode::CONFLICT,
			Self::InvalidStatusTransition => StatusCode::CONFLICT,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::InvalidEmail => "Invalid email",
			Self::UserNotFound => "No user exists with those credentials",
			Self::InvalidPassword => "Invalid Password",
			Self::WrongParameters => "The parameters sent with that request is invalid",
			Self::MalformedAccessToken => "Your access token is invalid. Please login again",
			Self::MalformedRefreshToken => "Your refresh token is invalid. Please login again",
			Self::Unauthorized => "You are not authorized to perform that action",
			Self::AuthorizationTokenInvalid => "Your access token has expired. Please login again",
			Self::UsernameUnavailable => "An account already exists with that username",
			Self::EmailUnavailable => "An account already exists with that email",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::EventNotPublished => "That event is not open for registrations",
			Self::AlreadyRegistered => "You are already registered for that event",
			Self::BookingConflict => {
				"That resource is already booked for an overlapping time window"
			}
			Self::InvalidStatusTransition => {
				"That status change is not allowed from the current status"
			}
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::InvalidEmail => Self::InvalidEmail,
			Self::UserNotFound => Self::UserNotFound,
			Self::InvalidPassword => Self::InvalidPassword,
			Self::WrongParameters => Self::WrongParameters,
			Self::MalformedAccessToken => Self::MalformedAccessToken,
			Self::MalformedRefreshToken => Self::MalformedRefreshToken,
			Self::Unauthorized => Self::Unauthorized,
			Self::AuthorizationTokenInvalid => Self::AuthorizationTokenInvalid,
			Self::UsernameUnavailable => Self::UsernameUnavailable,
			Self::EmailUnavailable => Self::EmailUnavailable,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::EventNotPublished => Self::EventNotPublished,
			Self::AlreadyRegistered => Self::AlreadyRegistered,
			Self::BookingConflict => Self::BookingConflict,
			Self::InvalidStatusTransition => Self::InvalidStatusTransition,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::InvalidEmail => serializer.serialize_str("invalidEmail"),
			Self::UserNotFound => serializer.serialize_str("userNotFound"),
			Self::InvalidPassword => serializer.serialize_str("invalidPassword"),
			Self::WrongParameters => serializer.serialize_str("wrongParameters"),
			Self::MalformedAccessToken => serializer.serialize_str("malformedAccessToken"),
			Self::MalformedRefreshToken => serializer.serialize_str("malformedRefreshToken"),
			Self::Unauthorized => serializer.serialize_str("unauthorized"),
			Self::AuthorizationTokenInvalid => {
				serializer.serialize_str("authorizationTokenInvalid")
			}
			Self::UsernameUnavailable => serializer.serialize_str("usernameUnavailable"),
			Self::EmailUnavailable => serializer.serialize_str("emailUnavailable"),
			Self::ResourceDoesNotExist => serializer.serialize_str("resourceDoesNotExist"),
			Self::EventNotPublished => serializer.serialize_str("eventNotPublished"),
			Self::AlreadyRegistered => serializer.serialize_str("alreadyRegistered"),
			Self::BookingConflict => serializer.serialize_str("bookingConflict"),
			Self::InvalidStatusTransition => serializer.serialize_str("invalidStatusTransition"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"invalidEmail" => Self::InvalidEmail,
			"userNotFound" => Self::UserNotFound,
			"invalidPassword" => Self::InvalidPassword,
			"wrongParameters" => Self::WrongParameters,
			"malformedAccessToken" => Self::MalformedAccessToken,
			"malformedRefreshToken" => Self::MalformedRefreshToken,
			"unauthorized" => Self::Unauthorized,
			"authorizationTokenInvalid" => Self::AuthorizationTokenInvalid,
			"usernameUnavailable" => Self::UsernameUnavailable,
			"emailUnavailable" => Self::EmailUnavailable,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"eventNotPublished" => Self::EventNotPublished,
			"alreadyRegistered" => Self::AlreadyRegistered,
			"bookingConflict" => Self::BookingConflict,
			"invalidStatusTransition" => Self::InvalidStatusTransition,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}
