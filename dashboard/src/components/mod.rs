/// The optional location fieldset shared by the submission forms.
mod location_picker;
/// Turning pushed notifications into toasts.
mod notification_bridge;
/// Gating a routed page behind a role allow-list.
mod require_role;
/// The toast queue context.
mod toaster;

pub use self::{location_picker::*, notification_bridge::*, require_role::*, toaster::*};
