/// Login and sign up.
mod auth;
/// The camera grid.
mod camera;
/// Company management and company settings.
mod company;
/// Events list, detail and form.
mod event;
/// The role-aware landing page.
mod home;
/// Reports list, detail, submission and review.
mod report;
/// Platform user management.
mod user;

pub use self::{auth::*, camera::*, company::*, event::*, home::*, report::*, user::*};
