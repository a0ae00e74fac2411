/// Create a new account (and log straight into it).
mod create_account;
/// Log in with an email and password.
mod login;
/// End the current session server-side.
mod logout;

pub use self::{create_account::*, login::*, logout::*};
