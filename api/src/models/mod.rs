/// The claims of the access token (JWT) that the API mints on login and
/// verifies on every authenticated request.
pub mod access_token_data;
