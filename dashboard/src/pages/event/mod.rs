use models::api::event::EventPriority;

use crate::prelude::*;

/// The event detail page.
mod detail;
/// The shared create/update form.
mod form;
/// The events list.
mod list;

pub use self::{detail::*, form::*, list::*};

/// The badge colour for an event priority.
pub(crate) fn priority_color(priority: EventPriority) -> Color {
	match priority {
		EventPriority::Low => Color::Secondary,
		EventPriority::Medium => Color::Primary,
		EventPriority::High => Color::Warning,
		EventPriority::Critical => Color::Error,
	}
}
