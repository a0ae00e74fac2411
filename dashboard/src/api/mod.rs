/// All auth related endpoints
mod auth;
/// The camera endpoints
mod camera;
/// The company management endpoints
mod company;
/// The event endpoints
mod event;
/// The event type catalogue endpoint
mod event_type;
/// The report endpoints, including the verification workflow
mod report;
/// The platform user management endpoints
mod user;

pub use self::{auth::*, camera::*, company::*, event::*, event_type::*, report::*, user::*};
