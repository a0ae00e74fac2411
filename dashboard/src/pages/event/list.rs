use models::api::{
	event::{Event, EventFilter, EventPriority},
	event_type::EventType,
};
use strum::IntoEnumIterator;

use super::priority_color;
use crate::prelude::*;

/// The events list, gated to roles that may view events.
#[component]
pub fn EventsDashboard() -> impl IntoView {
	view! {
		<RequireRole allowed={EVENT_VIEWERS}>
			<EventsList/>
		</RequireRole>
	}
}

/// The filtered, paginated events table.
#[component]
fn EventsList() -> impl IntoView {
	let (state, _) = AuthState::load();

	let priority_filter = create_rw_signal("".to_owned());
	let type_filter = create_rw_signal("".to_owned());
	let page = create_rw_signal(1usize);

	let event_types = create_local_resource(
		|| (),
		move |_| {
			let access_token = state.with_untracked(AuthState::access_token);
			async move { list_event_types(access_token).await }
		},
	);

	let query = ListQuery::new(move || {
		let access_token = state.with_untracked(AuthState::access_token);
		let query = Paginated {
			data: EventFilter {
				priority: priority_filter
					.get_untracked()
					.parse::<EventPriority>()
					.ok(),
				event_type: Uuid::parse_str(&type_filter.get_untracked()).ok(),
			},
			page: page.get_untracked(),
			limit: Paginated::<EventFilter>::DEFAULT_PAGE_SIZE,
		};
		async move { list_events(access_token, query).await }
	});

	// any filter change lands back on page 1 with exactly one reload
	let on_priority_select = Callback::new(move |value: String| {
		priority_filter.set(value);
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

	let priority_options = EventPriority::iter()
		.map(|priority| InputDropdownOption::new(priority.to_string(), priority.to_string()))
		.collect::<Vec<_>>();
	let type_options = Signal::derive(move || {
		event_types
			.get()
			.and_then(Result::ok)
			.map(|response| {
				response
					.event_types
					.into_iter()
					.map(|EventType { id, name, .. }| InputDropdownOption::new(id.to_string(), name))
					.collect::<Vec<_>>()
			})
			.unwrap_or_default()
	});

	let can_manage = create_memo(move |_| {
		state
			.with(AuthState::role)
			.is_some_and(|role| role.can(Capability::ManageEvents))
	});

	view! {
		<ContainerMain>
			<Title text="Events"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Events"</PageTitle>
				</PageTitleContainer>
				<Show when={move || can_manage.get()}>
					<Link
						to={LoggedInRoute::CreateEvent.path()}
						r#type={Variant::Link}
						style_variant={LinkStyleVariant::Contained}
					>
						"Create event"
					</Link>
				</Show>
			</ContainerHead>
			<ContainerBody>
				<div class="fr-fs-fs gap-md full-width">
					<InputDropdown
						id="priority-filter"
						placeholder="All priorities"
						options={priority_options}
						value={priority_filter}
						on_select={on_priority_select}
					/>
					<InputDropdown
						id="type-filter"
						placeholder="All event types"
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
						"Priority".to_string(),
						"Last updated".to_string(),
					]}>
						<For
							each={move || query.data.get()}
							key={|event| event.id}
							let:event
						>
							<EventRow event={event}/>
						</For>
					</TableDashboard>
				</Show>

				<p class="text-xs txt-grey">
					{move || format!("{} events", query.meta.get().total)}
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

/// One row of the events table, linking to the event's detail page.
#[component]
fn EventRow(
	/// The event of this row
	event: Event,
) -> impl IntoView {
	let path = format!("/events/{}", event.id);

	view! {
		<tr class="table-row">
			<td>
				<a href={path}>{event.title.clone()}</a>
			</td>
			<td>
				<StatusBadge
					text={event.priority.to_string()}
					color={priority_color(event.priority)}
				/>
			</td>
			<td>{event.last_updated.to_string()}</td>
		</tr>
	}
}
