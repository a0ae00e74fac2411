use models::api::report::*;

use crate::prelude::*;

/// Lists reports for the given page and filter.
pub async fn list_reports(
	access_token: Option<String>,
	query: Paginated<ReportFilter>,
) -> Result<PaginatedList<Report>, ApiErrorResponse> {
	make_request::<ListReports>(ApiRequest::new(ListReportsPath, query, ()), access_token).await
}

/// Fetches a single report by id.
pub async fn get_report_info(
	access_token: Option<String>,
	report_id: Uuid,
) -> Result<GetReportInfoResponse, ApiErrorResponse> {
	make_request::<GetReportInfo>(
		ApiRequest::new(GetReportInfoPath { report_id }, (), ()),
		access_token,
	)
	.await
}

/// Submits a new report. Attachments follow in a second call to
/// [`attach_files_to_report`] once the report id exists.
pub async fn submit_report(
	access_token: Option<String>,
	request: SubmitReportRequest,
) -> Result<SubmitReportResponse, ApiErrorResponse> {
	make_request::<SubmitReport>(ApiRequest::new(SubmitReportPath, (), request), access_token)
		.await
}

/// Attaches the staged files to an already created report.
pub async fn attach_files_to_report(
	access_token: Option<String>,
	report_id: Uuid,
	files: Vec<AttachmentUpload>,
) -> Result<AttachFilesToReportResponse, ApiErrorResponse> {
	make_request::<AttachFilesToReport>(
		ApiRequest::new(
			AttachFilesToReportPath { report_id },
			(),
			AttachFilesToReportRequest { files },
		),
		access_token,
	)
	.await
}

/// Marks a pending report as verified.
pub async fn verify_report(
	access_token: Option<String>,
	report_id: Uuid,
) -> Result<VerifyReportResponse, ApiErrorResponse> {
	make_request::<VerifyReport>(
		ApiRequest::new(VerifyReportPath { report_id }, (), ()),
		access_token,
	)
	.await
}

/// Marks a pending report as rejected. The caller builds the request with
/// [`RejectReportRequest::from_reason`], which refuses an empty reason.
pub async fn reject_report(
	access_token: Option<String>,
	report_id: Uuid,
	request: RejectReportRequest,
) -> Result<RejectReportResponse, ApiErrorResponse> {
	make_request::<RejectReport>(
		ApiRequest::new(RejectReportPath { report_id }, (), request),
		access_token,
	)
	.await
}
