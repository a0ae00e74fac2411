use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};

use super::{Company, CompanyType};
use crate::api::ApiEndpoint;

/// The path for the company creation endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateCompanyPath;

impl Display for CreateCompanyPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/company")
	}
}

/// The details of a new company. New companies always start active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
	/// The display name of the company
	pub name: String,
	/// The commercial tier of the company
	#[serde(rename = "type")]
	pub company_type: CompanyType,
}

/// The response of the company creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCompanyResponse {
	/// The company as the server created it
	pub company: Company,
}

/// Route to register a new company. Super admin only.
pub struct CreateCompany;

impl ApiEndpoint for CreateCompany {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = CreateCompanyRequest;
	type RequestPath = CreateCompanyPath;
	type RequestQuery = ();
	type ResponseBody = CreateCompanyResponse;
}
