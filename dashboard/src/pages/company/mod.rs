/// The platform-wide company management page.
mod list;
/// The company admin's settings page for their own company.
mod settings;

pub use self::{list::*, settings::*};
