mod create_account;
mod login;
mod logout;
mod renew_access_token;

pub use self::{create_account::*, login::*, logout::*, renew_access_token::*};
