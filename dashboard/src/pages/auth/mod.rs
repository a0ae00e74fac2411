/// The login form.
mod login;
/// The citizen registration form.
mod sign_up;

pub use self::{login::*, sign_up::*};
