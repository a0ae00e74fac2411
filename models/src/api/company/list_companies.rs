use std::fmt::{Display, Formatter};

use http::Method;

use super::Company;
use crate::{
	api::ApiEndpoint,
	utils::{Paginated, PaginatedList},
};

/// The path for the company list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCompaniesPath;

impl Display for ListCompaniesPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/company")
	}
}

/// Route to list every company on the platform. Super admin only.
pub struct ListCompanies;

impl ApiEndpoint for ListCompanies {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListCompaniesPath;
	type RequestQuery = Paginated;
	type ResponseBody = PaginatedList<Company>;
}
