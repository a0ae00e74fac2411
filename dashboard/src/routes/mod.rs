use std::fmt::Display;

use strum::EnumIter;

/// The list of all the routes on the console.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AppRoutes {
	/// The Empty Route, used for fallback routes.
	#[default]
	Empty,
	/// The routes that can be taken when the user is logged out.
	LoggedOutRoute(LoggedOutRoute),
	/// The routes that can be taken when the user is logged in.
	LoggedInRoute(LoggedInRoute),
}

/// Logged in routes, the routes that can be accessed by the user if and only
/// if the user is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Default)]
pub enum LoggedInRoute {
	/// The home page
	#[default]
	Home,
	/// The events list
	Events,
	/// The event detail page. Takes the event ID as a param
	EventDetail,
	/// The event creation form
	CreateEvent,
	/// The reports list
	Reports,
	/// The report detail page. Takes the report ID as a param
	ReportDetail,
	/// The report submission form
	SubmitReport,
	/// The companies list
	Companies,
	/// The platform users list
	Users,
	/// The company settings page
	CompanySettings,
	/// The camera grid
	Cameras,
}

/// Logged out routes, the routes that can be accessed by the user if and only
/// if the user is logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Default)]
pub enum LoggedOutRoute {
	/// Login page
	#[default]
	Login,
	/// Sign up page
	SignUp,
}

impl Display for AppRoutes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Empty => write!(f, "/"),
			Self::LoggedInRoute(logged_in_route) => {
				write!(f, "{}", logged_in_route)
			}
			Self::LoggedOutRoute(logged_out_route) => {
				write!(f, "{}", logged_out_route)
			}
		}
	}
}

impl Display for LoggedOutRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Login => "/login",
				Self::SignUp => "/sign-up",
			}
		)
	}
}

impl Display for LoggedInRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Home => "/",
				Self::Events => "/events",
				Self::EventDetail => "/events/:event_id",
				Self::CreateEvent => "/events/create",
				Self::Reports => "/reports",
				Self::ReportDetail => "/reports/:report_id",
				Self::SubmitReport => "/reports/submit",
				Self::Companies => "/companies",
				Self::Users => "/users",
				Self::CompanySettings => "/company-settings",
				Self::Cameras => "/cameras",
			}
		)
	}
}

impl LoggedInRoute {
	/// The concrete path of a param-less route, used for navigation links.
	/// Param-ed routes get their paths built by the caller.
	pub fn path(self) -> String {
		self.to_string()
	}
}

#[cfg(test)]
mod test {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn every_route_renders_a_path() {
		for route in AppRoutes::iter()
			.filter(|route| *route == AppRoutes::Empty)
			.chain(LoggedOutRoute::iter().map(AppRoutes::LoggedOutRoute))
			.chain(LoggedInRoute::iter().map(AppRoutes::LoggedInRoute))
		{
			assert!(route.to_string().starts_with('/'));
		}
	}

	#[test]
	fn detail_routes_take_params() {
		assert_eq!(LoggedInRoute::EventDetail.to_string(), "/events/:event_id");
		assert_eq!(
			LoggedInRoute::ReportDetail.to_string(),
			"/reports/:report_id"
		);
	}
}
