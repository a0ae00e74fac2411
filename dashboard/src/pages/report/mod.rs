use models::api::report::ReportStatus;

use crate::prelude::*;

/// The report detail page, including the review actions.
mod detail;
/// The reports list.
mod list;
/// The citizen submission form.
mod submit;

pub use self::{detail::*, list::*, submit::*};

/// The badge colour for a report status.
pub(crate) fn status_color(status: ReportStatus) -> Color {
	match status {
		ReportStatus::Pending => Color::Warning,
		ReportStatus::Verified => Color::Success,
		ReportStatus::Rejected => Color::Error,
	}
}
