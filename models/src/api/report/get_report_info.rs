use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Report;
use crate::api::ApiEndpoint;

/// The path for fetching a single report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetReportInfoPath {
	/// The id of the report to fetch
	pub report_id: Uuid,
}

impl Display for GetReportInfoPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/report/{}", self.report_id)
	}
}

/// The response for a single report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetReportInfoResponse {
	/// The requested report
	pub report: Report,
}

/// Route to get the details of one report.
pub struct GetReportInfo;

impl ApiEndpoint for GetReportInfo {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = GetReportInfoPath;
	type RequestQuery = ();
	type ResponseBody = GetReportInfoResponse;
}
