use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

/// A list of all the roles a user can hold on the platform. The role is a
/// claim on the session and determines which pages and actions are visible in
/// the console. It is re-checked by the server on every request, so the
/// client-side checks are purely cosmetic.
#[derive(
	Eq,
	Copy,
	Hash,
	Debug,
	Clone,
	Display,
	Default,
	EnumIter,
	PartialEq,
	Serialize,
	EnumString,
	Deserialize,
	VariantNames,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
	/// The baseline role. Every registered user holds at least this role, and
	/// every other role implicitly satisfies a citizen requirement.
	#[default]
	Citizen,
	/// An operator monitors events and camera feeds for their company.
	Operator,
	/// A platform admin reviews citizen reports and manages users across the
	/// platform. Admins do not manage company settings.
	Admin,
	/// A company admin manages the users and settings of their own company.
	/// Company admins do not review reports platform-wide.
	CompanyAdmin,
	/// The super admin manages all companies on the platform, in addition to
	/// everything the other roles can do.
	SuperAdmin,
}

/// The actions a role can be granted in the console. Each page declares the
/// capability it needs; the mapping from role to capability is an explicit
/// allow-list rather than a strict hierarchy, since admin and company admin
/// overlap without either containing the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Capability {
	/// Submit citizen reports
	SubmitReports,
	/// View the events list and event details
	ViewEvents,
	/// Create and update events
	ManageEvents,
	/// Verify or reject citizen reports
	ReviewReports,
	/// View live camera feeds
	ViewCameras,
	/// Manage the users of a company (or of the platform, for admins)
	ManageUsers,
	/// Manage the settings of the user's own company
	ManageCompanySettings,
	/// Manage every company on the platform
	ManageAllCompanies,
}

impl UserRole {
	/// Whether this role is granted the given capability. This is the single
	/// policy table used for route guarding, sidebar filtering and action
	/// buttons across the console.
	pub const fn can(self, capability: Capability) -> bool {
		use Capability::*;
		match capability {
			SubmitReports => true,
			ViewEvents | ViewCameras => !matches!(self, Self::Citizen),
			ManageEvents => matches!(self, Self::Operator | Self::Admin | Self::SuperAdmin),
			ReviewReports => matches!(self, Self::Operator | Self::Admin | Self::SuperAdmin),
			ManageUsers => {
				matches!(self, Self::Admin | Self::CompanyAdmin | Self::SuperAdmin)
			}
			ManageCompanySettings => matches!(self, Self::CompanyAdmin | Self::SuperAdmin),
			ManageAllCompanies => matches!(self, Self::SuperAdmin),
		}
	}

	/// Whether this role appears in the given allow-list. A requirement of
	/// [`UserRole::Citizen`] is satisfied by any role, since citizen is the
	/// baseline every account holds.
	pub fn is_allowed(self, allowed: &[UserRole]) -> bool {
		allowed.contains(&Self::Citizen) || allowed.contains(&self)
	}
}

#[cfg(test)]
mod test {
	use strum::IntoEnumIterator;

	use super::{Capability, UserRole};

	#[test]
	fn every_role_satisfies_a_citizen_requirement() {
		for role in UserRole::iter() {
			assert!(role.is_allowed(&[UserRole::Citizen]), "{role} denied");
		}
	}

	#[test]
	fn citizen_never_passes_an_admin_allow_list() {
		assert!(!UserRole::Citizen.is_allowed(&[UserRole::Admin]));
		assert!(!UserRole::Citizen.is_allowed(&[
			UserRole::Operator,
			UserRole::Admin,
			UserRole::CompanyAdmin,
			UserRole::SuperAdmin,
		]));
	}

	#[test]
	fn admin_and_company_admin_overlap_but_differ() {
		assert!(UserRole::Admin.can(Capability::ManageUsers));
		assert!(UserRole::CompanyAdmin.can(Capability::ManageUsers));

		assert!(UserRole::Admin.can(Capability::ReviewReports));
		assert!(!UserRole::CompanyAdmin.can(Capability::ReviewReports));

		assert!(UserRole::CompanyAdmin.can(Capability::ManageCompanySettings));
		assert!(!UserRole::Admin.can(Capability::ManageCompanySettings));
	}

	#[test]
	fn only_super_admin_manages_all_companies() {
		for role in UserRole::iter() {
			assert_eq!(
				role.can(Capability::ManageAllCompanies),
				role == UserRole::SuperAdmin
			);
		}
	}

	#[test]
	fn every_role_can_submit_reports() {
		for role in UserRole::iter() {
			assert!(role.can(Capability::SubmitReports));
		}
	}

	#[test]
	fn roles_use_snake_case_on_the_wire() {
		assert_eq!(
			serde_json::to_string(&UserRole::CompanyAdmin).unwrap(),
			"\"company_admin\""
		);
		assert_eq!(UserRole::SuperAdmin.to_string(), "super_admin");
	}
}
