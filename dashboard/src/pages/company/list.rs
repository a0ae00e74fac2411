use models::api::company::{Company, CompanyStatus, CompanyType, UpdateCompanyRequest};
use strum::IntoEnumIterator;

use crate::prelude::*;

/// The company management page, super admin only.
#[component]
pub fn CompaniesDashboard() -> impl IntoView {
	view! {
		<RequireRole allowed={COMPANY_MANAGERS}>
			<CompaniesList/>
		</RequireRole>
	}
}

/// The paginated companies table with the registration form above it.
#[component]
fn CompaniesList() -> impl IntoView {
	let (state, _) = AuthState::load();
	let toaster = expect_toaster();

	let page = create_rw_signal(1usize);

	let query = ListQuery::new(move || {
		let access_token = state.with_untracked(AuthState::access_token);
		let query = Paginated {
			data: (),
			page: page.get_untracked(),
			limit: Paginated::<()>::DEFAULT_PAGE_SIZE,
		};
		async move { list_companies(access_token, query).await }
	});

	let on_page_change = Callback::new(move |number: usize| {
		page.set(number);
		query.reload();
	});

	// registration form state
	let name = create_rw_signal("".to_owned());
	let company_type = create_rw_signal(CompanyType::Standard.to_string());
	let name_error = create_rw_signal("".to_owned());
	let creating = create_rw_signal(false);

	let type_options = CompanyType::iter()
		.map(|tier| InputDropdownOption::new(tier.to_string(), tier.to_string()))
		.collect::<Vec<_>>();

	let on_create = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		name_error.set("".to_owned());

		let Some(name_value) = name.get_untracked().trim().to_owned().some_if_not_empty()
		else {
			name_error.set("Please provide a company name".to_owned());
			return;
		};
		let tier = company_type
			.get_untracked()
			.parse::<CompanyType>()
			.unwrap_or_default();

		creating.set(true);
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			match create_company(access_token, name_value, tier).await {
				Ok(_) => {
					toaster.toast("Company registered", constants::STATUS_FLASH_DURATION);
					name.set("".to_owned());
					query.reload();
				}
				Err(error) => name_error.set(error.to_string()),
			}
			creating.set(false);
		});
	};

	view! {
		<ContainerMain>
			<Title text="Companies"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Companies"</PageTitle>
				</PageTitleContainer>
			</ContainerHead>
			<ContainerBody>
				<form on:submit={on_create} class="fr-fs-fe gap-md full-width">
					<Input
						id="company-name"
						label="Register a company"
						placeholder="Company name"
						disabled={Signal::derive(move || creating.get())}
						value={name}
						on_input={Callback::new(move |ev: ev::Event| {
							name.set(event_target_value(&ev))
						})}
						error={name_error}
					/>
					<InputDropdown
						id="company-type"
						label="Tier"
						options={type_options}
						disabled={Signal::derive(move || creating.get())}
						value={company_type}
						on_select={Callback::new(move |value: String| company_type.set(value))}
					/>
					<Link
						r#type={Variant::Button}
						style_variant={LinkStyleVariant::Contained}
						should_submit=true
						disabled={Signal::derive(move || creating.get())}
					>
						"Register"
					</Link>
				</form>

				<Show when={move || query.error.get().is_some()}>
					<Alert r#type={AlertType::Error} class="full-width">
						{move || query.error.get().unwrap_or_default()}
					</Alert>
				</Show>

				<Show
					when={move || !query.loading.get()}
					fallback={|| view! { <Spinner class="mx-auto"/> }}
				>
					<TableDashboard headings={vec![
						"Name".to_string(),
						"Tier".to_string(),
						"Status".to_string(),
					]}>
						<For
							each={move || query.data.get()}
							key={|company| company.id}
							let:company
						>
							<CompanyRow company={company} query={query}/>
						</For>
					</TableDashboard>
				</Show>

				<p class="text-xs txt-grey">
					{move || format!("{} companies", query.meta.get().total)}
				</p>
				<Pagination
					page={Signal::derive(move || query.meta.get().page)}
					total_pages={Signal::derive(move || query.meta.get().total_pages)}
					on_page_change={on_page_change}
				/>
			</ContainerBody>
		</ContainerMain>
	}
}

/// One row of the companies table, with an inline status dropdown. Changing
/// the status fires the update and reloads the list.
#[component]
fn CompanyRow(
	/// The company of this row
	company: Company,
	/// The list query to reload after a status change
	query: ListQuery<Company>,
) -> impl IntoView {
	let (state, _) = AuthState::load();
	let toaster = expect_toaster();

	let company_id = company.id;
	let busy = create_rw_signal(false);

	let status_options = CompanyStatus::iter()
		.map(|status| InputDropdownOption::new(status.to_string(), status.to_string()))
		.collect::<Vec<_>>();

	let on_status_select = Callback::new(move |value: String| {
		let Ok(status) = value.parse::<CompanyStatus>() else {
			return;
		};
		busy.set(true);
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			let request = UpdateCompanyRequest {
				name: None,
				status: Some(status),
			};
			match update_company(access_token, company_id, request).await {
				Ok(_) => {
					toaster.toast("Company status updated", constants::STATUS_FLASH_DURATION);
				}
				Err(error) => {
					toaster.toast(error.to_string(), constants::STATUS_FLASH_DURATION);
				}
			}
			busy.set(false);
			query.reload();
		});
	});

	view! {
		<tr class="table-row">
			<td>{company.name.clone()}</td>
			<td>{company.company_type.to_string()}</td>
			<td>
				<InputDropdown
					id={format!("company-status-{company_id}")}
					options={status_options}
					disabled={Signal::derive(move || busy.get())}
					value={company.status.to_string()}
					on_select={on_status_select}
				/>
			</td>
		</tr>
	}
}
