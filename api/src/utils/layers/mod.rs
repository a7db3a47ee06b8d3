mod auth_endpoint_handler;
mod authenticator;
mod endpoint_handler;
mod preprocess_handler;
mod request_parser;

pub use self::{
	auth_endpoint_handler::*,
	authenticator::*,
	endpoint_handler::*,
	preprocess_handler::*,
	request_parser::*,
};
