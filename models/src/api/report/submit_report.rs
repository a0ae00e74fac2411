use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};

use super::{Report, ReportType};
use crate::{api::ApiEndpoint, utils::GeoLocation};

/// The path for the report submission endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitReportPath;

impl Display for SubmitReportPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/report")
	}
}

/// The fields of a new citizen report. Title and description are sent
/// trimmed; a report without a location serializes without the key at all.
/// Attachments are not part of this call; they follow in a second call to
/// [`super::AttachFilesToReport`] once the report id exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
	/// The title of the report
	pub title: String,
	/// The description of the report
	pub description: String,
	/// The category of the report
	#[serde(rename = "type")]
	pub report_type: ReportType,
	/// Where the incident happened, if the reporter shared a location
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<GeoLocation>,
}

/// The response of the report submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitReportResponse {
	/// The report as the server created it, in pending status
	pub report: Report,
}

/// Route to submit a new citizen report.
pub struct SubmitReport;

impl ApiEndpoint for SubmitReport {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = SubmitReportRequest;
	type RequestPath = SubmitReportPath;
	type RequestQuery = ();
	type ResponseBody = SubmitReportResponse;
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::SubmitReportRequest;
	use crate::api::ReportType;

	#[test]
	fn absent_location_leaves_no_payload_key() {
		let body = serde_json::to_value(SubmitReportRequest {
			title: "Broken light".to_string(),
			description: "Lamp post #12 is dark".to_string(),
			report_type: ReportType::Maintenance,
			location: None,
		})
		.unwrap();
		assert_eq!(
			body,
			json!({
				"title": "Broken light",
				"description": "Lamp post #12 is dark",
				"type": "maintenance",
			})
		);
	}
}
