use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};

use super::{Report, ReportStatus, ReportType};
use crate::{
	api::ApiEndpoint,
	utils::{Paginated, PaginatedList},
};

/// The path for the report list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListReportsPath;

impl Display for ListReportsPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/report")
	}
}

/// The filters the reports list accepts. Absent filters are left out of the
/// query string entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
	/// Only return reports in this status
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<ReportStatus>,
	/// Only return reports of this category
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub report_type: Option<ReportType>,
}

/// Route to list reports, filtered and paginated. Citizens only ever receive
/// their own reports; reviewers receive all of them.
pub struct ListReports;

impl ApiEndpoint for ListReports {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListReportsPath;
	type RequestQuery = Paginated<ReportFilter>;
	type ResponseBody = PaginatedList<Report>;
}
