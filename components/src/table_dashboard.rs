use crate::imports::*;

/// The table layout used by every list view: a heading row plus whatever
/// rows the page renders into it.
#[component]
pub fn TableDashboard(
	/// The column headings, in order
	#[prop(into)]
	headings: Vec<String>,
	/// The rows of the table
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<table class="table-dashboard full-width">
			<thead>
				<tr class="table-heading-row">
					{headings
						.into_iter()
						.map(|heading| view! { <th>{heading}</th> })
						.collect_view()}
				</tr>
			</thead>
			<tbody>{children()}</tbody>
		</table>
	}
}
