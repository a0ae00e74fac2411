use models::api::report::{Report, ReportFilter, ReportStatus, ReportType};
use strum::IntoEnumIterator;

use super::status_color;
use crate::prelude::*;

/// The reports list. Citizens see their own reports here; reviewers see all
/// of them, so no role gate beyond the session itself.
#[component]
pub fn ReportsDashboard() -> impl IntoView {
	let (state, _) = AuthState::load();

	let status_filter = create_rw_signal("".to_owned());
	let type_filter = create_rw_signal("".to_owned());
	let page = create_rw_signal(1usize);

	let query = ListQuery::new(move || {
		let access_token = state.with_untracked(AuthState::access_token);
		let query = Paginated {
			data: ReportFilter {
				status: status_filter
					.get_untracked()
					.parse::<ReportStatus>()
					.ok(),
				report_type: type_filter
					.get_untracked()
					.some_if_not_empty()
					.map(|code| ReportType::from(code.as_str())),
			},
			page: page.get_untracked(),
			limit: Paginated::<ReportFilter>::DEFAULT_PAGE_SIZE,
		};
		async move { list_reports(access_token, query).await }
	});

	// any filter change lands back on page 1 with exactly one reload
	let on_status_select = Callback::new(move |value: String| {
		status_filter.set(value);
		page.set(1);
		query.reload();
	});
	let on_type_select = Callback::new(move |value: String| {
		type_filter.set(value);
		page.set(1);
		query.reload();
	});
	let on_page_change = Callback::new(move |number: usize| {
		page.set(number);
		query.reload();
	});

	let status_options = ReportStatus::iter()
		.map(|status| InputDropdownOption::new(status.to_string(), status.to_string()))
		.collect::<Vec<_>>();
	let type_options = ReportType::WELL_KNOWN
		.iter()
		.map(|report_type| {
			InputDropdownOption::new(report_type.as_wire_code(), report_type.label())
		})
		.collect::<Vec<_>>();

	view! {
		<ContainerMain>
			<Title text="Reports"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Reports"</PageTitle>
				</PageTitleContainer>
				<Link
					to={LoggedInRoute::SubmitReport.path()}
					r#type={Variant::Link}
					style_variant={LinkStyleVariant::Contained}
				>
					"Submit a report"
				</Link>
			</ContainerHead>
			<ContainerBody>
				<div class="fr-fs-fs gap-md full-width">
					<InputDropdown
						id="status-filter"
						placeholder="All statuses"
						options={status_options}
						value={status_filter}
						on_select={on_status_select}
					/>
					<InputDropdown
						id="type-filter"
						placeholder="All categories"
						options={type_options}
						value={type_filter}
						on_select={on_type_select}
					/>
				</div>

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
						"Title".to_string(),
						"Category".to_string(),
						"Status".to_string(),
						"Submitted".to_string(),
					]}>
						<For
							each={move || query.data.get()}
							key={|report| report.id}
							let:report
						>
							<ReportRow report={report}/>
						</For>
					</TableDashboard>
				</Show>

				<p class="text-xs txt-grey">
					{move || format!("{} reports", query.meta.get().total)}
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

/// One row of the reports table, linking to the report's detail page.
#[component]
fn ReportRow(
	/// The report of this row
	report: Report,
) -> impl IntoView {
	let path = format!("/reports/{}", report.id);

	view! {
		<tr class="table-row">
			<td>
				<a href={path}>{report.title.clone()}</a>
			</td>
			<td>{report.report_type.label().to_owned()}</td>
			<td>
				<StatusBadge
					text={report.status.to_string()}
					color={status_color(report.status)}
				/>
			</td>
			<td>{report.created.to_string()}</td>
		</tr>
	}
}
