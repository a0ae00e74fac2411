use crate::prelude::*;

/// The roles that may view events and cameras.
pub const EVENT_VIEWERS: &[UserRole] = &[
	UserRole::Operator,
	UserRole::Admin,
	UserRole::CompanyAdmin,
	UserRole::SuperAdmin,
];

/// The roles that may create and update events, and review reports.
pub const EVENT_MANAGERS: &[UserRole] =
	&[UserRole::Operator, UserRole::Admin, UserRole::SuperAdmin];

/// The roles that may manage platform users.
pub const USER_MANAGERS: &[UserRole] =
	&[UserRole::Admin, UserRole::CompanyAdmin, UserRole::SuperAdmin];

/// The roles that may edit their own company's settings.
pub const COMPANY_SETTINGS_MANAGERS: &[UserRole] =
	&[UserRole::CompanyAdmin, UserRole::SuperAdmin];

/// The roles that may manage every company on the platform.
pub const COMPANY_MANAGERS: &[UserRole] = &[UserRole::SuperAdmin];

/// Gates a routed page behind a role allow-list. Logged in users whose role
/// is not in the list get the access denied view instead of the page; they
/// are not bounced to login, since they do have a session.
#[component]
pub fn RequireRole(
	/// The roles that may see the page. A list containing
	/// [`UserRole::Citizen`] admits everyone, since citizen is the baseline
	/// every account holds
	allowed: &'static [UserRole],
	/// The gated page
	children: ChildrenFn,
) -> impl IntoView {
	let (state, _) = AuthState::load();

	let permitted = create_memo(move |_| {
		state
			.get()
			.role()
			.is_some_and(|role| role.is_allowed(allowed))
	});

	view! {
		<Show when={move || permitted.get()} fallback={AccessDenied} clone:children>
			{children()}
		</Show>
	}
}

/// Shown in place of a page the current role may not see.
#[component]
pub fn AccessDenied() -> impl IntoView {
	view! {
		<ContainerMain class="fc-ct-ct">
			<Title text="Access denied"/>
			<h2 class="text-lg">"Access denied"</h2>
			<p class="text-sm txt-grey">
				"Your account does not have permission to view this page."
			</p>
			<Link to={LoggedInRoute::Home.path()} r#type={Variant::Link}>
				"Back to the dashboard"
			</Link>
		</ContainerMain>
	}
}

#[cfg(test)]
mod test {
	use models::prelude::*;
	use strum::IntoEnumIterator;

	use super::*;

	fn roles_with(capability: Capability) -> Vec<UserRole> {
		UserRole::iter()
			.filter(|role| role.can(capability))
			.collect()
	}

	#[test]
	fn allow_lists_match_the_capability_table() {
		assert_eq!(EVENT_VIEWERS, roles_with(Capability::ViewEvents));
		assert_eq!(EVENT_VIEWERS, roles_with(Capability::ViewCameras));
		assert_eq!(EVENT_MANAGERS, roles_with(Capability::ManageEvents));
		assert_eq!(EVENT_MANAGERS, roles_with(Capability::ReviewReports));
		assert_eq!(USER_MANAGERS, roles_with(Capability::ManageUsers));
		assert_eq!(
			COMPANY_SETTINGS_MANAGERS,
			roles_with(Capability::ManageCompanySettings)
		);
		assert_eq!(COMPANY_MANAGERS, roles_with(Capability::ManageAllCompanies));
	}
}
