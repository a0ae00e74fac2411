use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use time::OffsetDateTime;
use uuid::Uuid;

/// Create a new company.
mod create_company;
/// List all companies on the platform.
mod list_companies;
/// Rename a company or change its status.
mod update_company;

pub use self::{create_company::*, list_companies::*, update_company::*};

/// The commercial tier a company is on.
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
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
	/// A regular monitoring company
	#[default]
	Standard,
	/// A partner operating mobile patrol units
	MobilePartner,
	/// An enterprise customer with a dedicated deployment
	Enterprise,
}

/// Whether a company is currently allowed to operate on the platform.
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
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
	/// Operating normally
	#[default]
	Active,
	/// Temporarily barred; members cannot mutate anything
	Suspended,
	/// No longer on the platform
	Inactive,
}

/// A company registered on the platform. Operators, company admins and
/// cameras all belong to exactly one company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
	/// The id of the company
	pub id: Uuid,
	/// The display name of the company
	pub name: String,
	/// The commercial tier of the company
	#[serde(rename = "type")]
	pub company_type: CompanyType,
	/// Whether the company is allowed to operate
	pub status: CompanyStatus,
	/// When the company was registered
	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,
	/// When the company was last updated
	#[serde(with = "time::serde::rfc3339")]
	pub last_updated: OffsetDateTime,
}
