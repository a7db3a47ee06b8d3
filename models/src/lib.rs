#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]
#![cfg_attr(
	debug_assertions,
	allow(unused_variables, dead_code, unused_mut),
	allow(missing_docs, clippy::missing_docs_in_private_items)
)]

//! Common models for the EventUp API. This crate contains the types that make
//! up the API contract: every endpoint, along with its path, query, headers,
//! request body and response body, as well as the permission vocabulary that
//! the API server enforces.

pub mod api;
pub mod utils;

pub mod prelude {
	//! The most commonly used types of this crate, re-exported for easy
	//! access.

	pub use crate::{
		api::WithId,
		endpoint::ApiEndpoint,
		error::ErrorType,
		permission::{EventAccess, EventRole, Permission},
		utils::{Paginated, TotalCountHeader, Uuid},
	};
}

mod endpoint;
mod error;
mod permission;
mod request;
mod response;
mod user_data;

pub use self::{
	endpoint::*,
	error::*,
	permission::*,
	request::*,
	response::*,
	user_data::*,
};
