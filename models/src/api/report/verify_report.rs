use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Report;
use crate::api::ApiEndpoint;

/// The path for verifying a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReportPath {
	/// The id of the report to verify
	pub report_id: Uuid,
}

impl Display for VerifyReportPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/report/{}/verify", self.report_id)
	}
}

/// The response of the verify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyReportResponse {
	/// The report with its new status
	pub report: Report,
}

/// Route to mark a pending report as verified. The transition itself is
/// server-authoritative; the console reloads the list afterwards.
pub struct VerifyReport;

impl ApiEndpoint for VerifyReport {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = ();
	type RequestPath = VerifyReportPath;
	type RequestQuery = ();
	type ResponseBody = VerifyReportResponse;
}
