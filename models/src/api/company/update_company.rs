use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Company, CompanyStatus};
use crate::api::ApiEndpoint;

/// The path for updating a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCompanyPath {
	/// The id of the company to update
	pub company_id: Uuid,
}

impl Display for UpdateCompanyPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/company/{}", self.company_id)
	}
}

/// The fields of a company that can change after creation. Absent fields are
/// left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
	/// A new display name for the company
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// A new status for the company
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<CompanyStatus>,
}

/// The response of the company update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCompanyResponse {
	/// The company as the server stored it
	pub company: Company,
}

/// Route to rename a company or change its status. Company admins may rename
/// their own company; status transitions are super admin only.
pub struct UpdateCompany;

impl ApiEndpoint for UpdateCompany {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::PATCH;

	type RequestBody = UpdateCompanyRequest;
	type RequestPath = UpdateCompanyPath;
	type RequestQuery = ();
	type ResponseBody = UpdateCompanyResponse;
}
