use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReportAttachment;
use crate::api::ApiEndpoint;

/// The path for attaching files to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachFilesToReportPath {
	/// The id of the report the files belong to
	pub report_id: Uuid,
}

impl Display for AttachFilesToReportPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/report/{}/attachments", self.report_id)
	}
}

/// One staged file, carried as the data URL the browser produced for it. The
/// client has already enforced the size and content type limits, but the
/// server checks them again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentUpload {
	/// The original file name
	pub file_name: String,
	/// The content type of the file
	pub content_type: String,
	/// The file content as a data URL
	pub data: String,
}

/// The files to attach, in the order the reporter staged them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttachFilesToReportRequest {
	/// The staged files
	pub files: Vec<AttachmentUpload>,
}

/// The response of the attach endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttachFilesToReportResponse {
	/// The stored attachment references
	pub attachments: Vec<ReportAttachment>,
}

/// Route to attach staged files to a freshly created report. Called at most
/// once, directly after [`super::SubmitReport`]. A failure here leaves the
/// report itself in place.
pub struct AttachFilesToReport;

impl ApiEndpoint for AttachFilesToReport {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = AttachFilesToReportRequest;
	type RequestPath = AttachFilesToReportPath;
	type RequestQuery = ();
	type ResponseBody = AttachFilesToReportResponse;
}
