//! Reusable UI components for the event monitoring console. Everything in
//! here is presentation only: no API calls, no session state, no routing.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{
		alert::*,
		containers::*,
		input::*,
		input_dropdown::*,
		link::*,
		modal::*,
		page_title::*,
		pagination::*,
		sidebar::*,
		spinner::*,
		status_badge::*,
		table_dashboard::*,
		textbox::*,
		toast::*,
		utils::*,
	};
}

mod imports {
	pub use leptos::*;

	pub use crate::prelude::*;
}

/// Inline error and success banners.
pub mod alert;
/// The page-level container skeleton every page renders into.
pub mod containers;
/// Single-line text inputs.
pub mod input;
/// A select dropdown with typed options.
pub mod input_dropdown;
/// Links and buttons.
pub mod link;
/// A blocking modal dialog.
pub mod modal;
/// Page titles and descriptions.
pub mod page_title;
/// The page button row under list views.
pub mod pagination;
/// The navigation sidebar.
pub mod sidebar;
/// A loading spinner.
pub mod spinner;
/// Coloured status badges.
pub mod status_badge;
/// The table layout used by the list views.
pub mod table_dashboard;
/// Multi-line text inputs.
pub mod textbox;
/// Transient toast messages.
pub mod toast;
/// Shared size / colour / variant enums.
pub mod utils;
