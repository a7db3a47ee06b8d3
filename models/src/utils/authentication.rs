use crate::{prelude::*, request::ProcessedApiRequest};

/// A marker for the kinds of authentication an endpoint can declare. The
/// router only knows how to mount endpoints whose authenticator implements
/// this trait.
pub trait HasAuthentication {}

/// The authentication type of an endpoint that anyone can call, without any
/// token at all. Sign up, sign in and token renewal use this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoAuthentication;

impl HasAuthentication for NoAuthentication {}

/// The authentication type of an endpoint that needs a signed-in user. This
/// carries everything the authentication layer needs in order to decide
/// whether a given request is allowed to proceed, including how to find the
/// event that the request is acting on.
pub enum AppAuthentication<E>
where
	E: ApiEndpoint,
{
	/// Any valid access token is enough. Used for routes that act on the
	/// requesting user's own data, like listing their notifications or
	/// registering to attend an event.
	PlainTokenAuthenticator,
	/// The requesting user must be the owner of the event that the request is
	/// acting on. Granting and revoking permissions, and deleting the event,
	/// are owner-only.
	EventOwnerAuthenticator {
		/// Extracts the ID of the event the request is acting on, so that the
		/// authentication layer can check ownership before the handler runs.
		extract_event_id: fn(&ProcessedApiRequest<E>) -> Uuid,
	},
	/// The requesting user must hold a specific permission on the event that
	/// the request is acting on. The owner of the event always passes this
	/// check.
	EventPermissionAuthenticator {
		/// Extracts the ID of the event the request is acting on.
		extract_event_id: fn(&ProcessedApiRequest<E>) -> Uuid,
		/// The permission the user must hold on that event.
		permission: Permission,
	},
}

impl<E> HasAuthentication for AppAuthentication<E> where E: ApiEndpoint {}

impl<E> Clone for AppAuthentication<E>
where
	E: ApiEndpoint,
{
	fn clone(&self) -> Self {
		match self {
			Self::PlainTokenAuthenticator => Self::PlainTokenAuthenticator,
			Self::EventOwnerAuthenticator { extract_event_id } => {
				Self::EventOwnerAuthenticator {
					extract_event_id: *extract_event_id,
				}
			}
			Self::EventPermissionAuthenticator {
				extract_event_id,
				permission,
			} => Self::EventPermissionAuthenticator {
				extract_event_id: *extract_event_id,
				permission: *permission,
			},
		}
	}
}
