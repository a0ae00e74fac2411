use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Report;
use crate::api::ApiEndpoint;

/// The path for rejecting a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectReportPath {
	/// The id of the report to reject
	pub report_id: Uuid,
}

impl Display for RejectReportPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/report/{}/reject", self.report_id)
	}
}

/// Why the report is being rejected. The console never issues this call with
/// an empty reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectReportRequest {
	/// The reviewer's reason, shown to the reporter
	pub reason: String,
}

impl RejectReportRequest {
	/// Builds the request from the reviewer's input, trimmed. A reason that
	/// is empty after trimming yields no request, so a rejection can never
	/// reach the wire without one.
	pub fn from_reason(reason: &str) -> Option<Self> {
		let reason = reason.trim();
		if reason.is_empty() {
			None
		} else {
			Some(Self {
				reason: reason.to_owned(),
			})
		}
	}
}

/// The response of the reject endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectReportResponse {
	/// The report with its new status and rejection reason
	pub report: Report,
}

/// Route to mark a pending report as rejected, with a reason.
pub struct RejectReport;

impl ApiEndpoint for RejectReport {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = RejectReportRequest;
	type RequestPath = RejectReportPath;
	type RequestQuery = ();
	type ResponseBody = RejectReportResponse;
}

#[cfg(test)]
mod test {
	use super::RejectReportRequest;

	#[test]
	fn an_empty_reason_yields_no_request() {
		assert_eq!(RejectReportRequest::from_reason(""), None);
		assert_eq!(RejectReportRequest::from_reason("   "), None);
		assert_eq!(RejectReportRequest::from_reason("\t\n"), None);
	}

	#[test]
	fn the_reason_is_trimmed() {
		assert_eq!(
			RejectReportRequest::from_reason("  duplicate of an earlier report "),
			Some(RejectReportRequest {
				reason: "duplicate of an earlier report".to_owned(),
			})
		);
	}
}
