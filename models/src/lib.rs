//! Typed contracts for the event monitoring platform API.
//!
//! Everything the console sends to or receives from the backend is described
//! here: entities, endpoint definitions, the response envelope, roles and
//! their capabilities, and the client-side validation rules that the forms
//! share (coordinate bounds, attachment limits).

/// The API module. Contains one submodule per backend resource, each with its
/// entity types and endpoint definitions.
pub mod api;
/// Error codes returned by the API, with user-facing messages.
mod error;
/// Roles and the capability policy that gates pages and navigation.
pub mod rbac;
/// The identity of the currently logged in user, as cached on the client.
mod user_data;
/// Shared utility types: pagination, the response envelope, geo locations
/// and the attachment acceptance policy.
pub mod utils;

pub use self::{error::*, user_data::*};

/// Prelude module. Re-exports the items that nearly every consumer needs.
pub mod prelude {
	pub use uuid::Uuid;

	pub use crate::{
		api::*,
		rbac::{Capability, UserRole},
		utils::*,
		ErrorType,
		UserIdentity,
	};
}
