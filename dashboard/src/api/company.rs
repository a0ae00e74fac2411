use models::api::company::*;

use crate::prelude::*;

/// Lists companies for the given page.
pub async fn list_companies(
	access_token: Option<String>,
	query: Paginated,
) -> Result<PaginatedList<Company>, ApiErrorResponse> {
	make_request::<ListCompanies>(ApiRequest::new(ListCompaniesPath, query, ()), access_token)
		.await
}

/// Registers a new company.
pub async fn create_company(
	access_token: Option<String>,
	name: String,
	company_type: CompanyType,
) -> Result<CreateCompanyResponse, ApiErrorResponse> {
	make_request::<CreateCompany>(
		ApiRequest::new(
			CreateCompanyPath,
			(),
			CreateCompanyRequest { name, company_type },
		),
		access_token,
	)
	.await
}

/// Updates a company's name or status. Fields left as `None` are not
/// touched.
pub async fn update_company(
	access_token: Option<String>,
	company_id: Uuid,
	request: UpdateCompanyRequest,
) -> Result<UpdateCompanyResponse, ApiErrorResponse> {
	make_request::<UpdateCompany>(
		ApiRequest::new(UpdateCompanyPath { company_id }, (), request),
		access_token,
	)
	.await
}
