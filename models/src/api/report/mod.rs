use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::utils::GeoLocation;

/// Attach staged files to a freshly created report.
mod attach_files;
/// Get one report by id.
mod get_report_info;
/// List reports with filters and pagination.
mod list_reports;
/// Reject a pending report with a reason.
mod reject_report;
/// Submit a new citizen report.
mod submit_report;
/// Verify a pending report.
mod verify_report;

pub use self::{
	attach_files::*,
	get_report_info::*,
	list_reports::*,
	reject_report::*,
	submit_report::*,
	verify_report::*,
};

/// What a citizen report is about. The platform ships a fixed set of
/// categories, but a reporter can always supply their own free-text category,
/// which travels as its raw string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportType {
	/// A security incident (theft, intrusion, etc)
	SecurityIncident,
	/// Broken or degraded infrastructure
	Maintenance,
	/// A traffic hazard or obstruction
	Traffic,
	/// An environmental issue (flooding, pollution, etc)
	Environment,
	/// A reporter-supplied category outside the fixed set
	Custom(String),
}

impl ReportType {
	/// The fixed categories offered in the submission dropdown, in display
	/// order. `Custom` is offered separately with a free-text field.
	pub const WELL_KNOWN: [ReportType; 4] = [
		Self::SecurityIncident,
		Self::Maintenance,
		Self::Traffic,
		Self::Environment,
	];

	/// The wire code for this type. Custom types travel as their raw string.
	pub fn as_wire_code(&self) -> &str {
		match self {
			Self::SecurityIncident => "securityIncident",
			Self::Maintenance => "maintenance",
			Self::Traffic => "traffic",
			Self::Environment => "environment",
			Self::Custom(raw) => raw,
		}
	}

	/// The human-readable label shown in dropdowns and badges.
	pub fn label(&self) -> &str {
		match self {
			Self::SecurityIncident => "Security incident",
			Self::Maintenance => "Maintenance",
			Self::Traffic => "Traffic",
			Self::Environment => "Environment",
			Self::Custom(raw) => raw,
		}
	}
}

impl Display for ReportType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

impl From<&str> for ReportType {
	fn from(code: &str) -> Self {
		match code {
			"securityIncident" => Self::SecurityIncident,
			"maintenance" => Self::Maintenance,
			"traffic" => Self::Traffic,
			"environment" => Self::Environment,
			raw => Self::Custom(raw.to_string()),
		}
	}
}

impl Serialize for ReportType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.as_wire_code())
	}
}

impl<'de> Deserialize<'de> for ReportType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Self::from(String::deserialize(deserializer)?.as_str()))
	}
}

/// Where a report stands in the verification workflow. Transitions are
/// server-authoritative; the console only requests them and reloads.
#[derive(
	Eq,
	Copy,
	Hash,
	Debug,
	Clone,
	Default,
	EnumIter,
	PartialEq,
	Serialize,
	EnumString,
	Deserialize,
	StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
	/// Submitted and awaiting review
	#[default]
	Pending,
	/// Reviewed and confirmed as genuine
	Verified,
	/// Reviewed and rejected, with a reason
	Rejected,
}

/// An opaque reference to a file attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportAttachment {
	/// The id of the stored file
	pub id: Uuid,
	/// The original file name
	pub file_name: String,
	/// The content type the file was uploaded with
	pub content_type: String,
}

/// A citizen-submitted record of an incident, subject to the verification
/// workflow. Owned by the API; the console holds disposable copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
	/// The id of the report
	pub id: Uuid,
	/// The short title shown in lists
	pub title: String,
	/// The full description of the incident
	pub description: String,
	/// The category of the report
	pub report_type: ReportType,
	/// Where the report stands in the verification workflow
	pub status: ReportStatus,
	/// Why the report was rejected, when it was
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rejection_reason: Option<String>,
	/// Where the incident happened, if the reporter shared a location
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<GeoLocation>,
	/// Files the reporter attached
	#[serde(default)]
	pub attachments: Vec<ReportAttachment>,
	/// The email of the reporter
	pub reporter_email: String,
	/// When the report was submitted
	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,
	/// When the report was last updated
	#[serde(with = "time::serde::rfc3339")]
	pub last_updated: OffsetDateTime,
}

#[cfg(test)]
mod test {
	use super::ReportType;

	#[test]
	fn well_known_types_round_trip_as_codes() {
		for report_type in ReportType::WELL_KNOWN {
			let json = serde_json::to_string(&report_type).unwrap();
			let parsed: ReportType = serde_json::from_str(&json).unwrap();
			assert_eq!(parsed, report_type);
		}
		assert_eq!(
			serde_json::to_string(&ReportType::SecurityIncident).unwrap(),
			"\"securityIncident\""
		);
	}

	#[test]
	fn unknown_codes_become_custom_types() {
		let parsed: ReportType = serde_json::from_str("\"fallen tree\"").unwrap();
		assert_eq!(parsed, ReportType::Custom("fallen tree".to_string()));
		assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"fallen tree\"");
	}
}
