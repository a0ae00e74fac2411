use leptos_router::use_params_map;
use models::api::event::Event;

use super::{priority_color, EventForm};
use crate::prelude::*;

/// The event detail page, gated to roles that may view events. Roles that
/// may manage events can switch to an edit form in place.
#[component]
pub fn EventDetailPage() -> impl IntoView {
	view! {
		<RequireRole allowed={EVENT_VIEWERS}>
			<EventDetail/>
		</RequireRole>
	}
}

/// Fetches and renders one event.
#[component]
fn EventDetail() -> impl IntoView {
	let (state, _) = AuthState::load();
	let params = use_params_map();

	let event_id = create_memo(move |_| {
		params.with(|params| {
			params
				.get("event_id")
				.and_then(|id| Uuid::parse_str(id).ok())
		})
	});

	let event = create_local_resource(
		move || event_id.get(),
		move |event_id| {
			let access_token = state.with_untracked(AuthState::access_token);
			async move {
				let Some(event_id) = event_id else {
					return Err(ApiErrorResponse::internal_error("invalid event id"));
				};
				get_event_info(access_token, event_id)
					.await
					.map(|response| response.event)
			}
		},
	);

	let editing = create_rw_signal(false);

	let can_manage = create_memo(move |_| {
		state
			.with(AuthState::role)
			.is_some_and(|role| role.can(Capability::ManageEvents))
	});

	view! {
		<ContainerMain>
			<Title text="Event"/>
			<Transition fallback={|| view! { <Spinner class="mx-auto"/> }}>
				{move || {
					event
						.get()
						.map(|event| match event {
							Ok(event) => {
								view! {
									<Show
										when={move || !editing.get()}
										fallback={
											let event = event.clone();
											move || {
												view! {
													<EventForm existing={event.clone()}/>
												}
											}
										}
									>
										<EventInfo event={event.clone()}/>
										<Show when={move || can_manage.get()}>
											<Link
												r#type={Variant::Button}
												style_variant={LinkStyleVariant::Contained}
												on_click={Callback::new(move |_| editing.set(true))}
											>
												"Edit"
											</Link>
										</Show>
									</Show>
								}
								.into_view()
							}
							Err(error) => view! {
								<Alert r#type={AlertType::Error} class="full-width">
									{error.to_string()}
								</Alert>
							}
							.into_view(),
						})
				}}
			</Transition>
		</ContainerMain>
	}
}

/// The read-only rendering of an event.
#[component]
fn EventInfo(
	/// The event to render
	event: Event,
) -> impl IntoView {
	view! {
		<ContainerHead>
			<PageTitleContainer>
				<PageTitle>{event.title.clone()}</PageTitle>
			</PageTitleContainer>
			<StatusBadge
				text={event.priority.to_string()}
				color={priority_color(event.priority)}
			/>
		</ContainerHead>
		<ContainerBody>
			<p class="text-sm full-width">{event.description.clone()}</p>
			{event
				.location
				.map(|location| {
					view! {
						<p class="text-xs txt-grey">
							{format!("Location: {}, {}", location.latitude, location.longitude)}
						</p>
					}
				})}
			{event
				.location_details
				.map(|details| {
					view! {
						<p class="text-xs txt-grey">{format!("Where: {details}")}</p>
					}
				})}
			{event
				.notes
				.map(|notes| {
					view! {
						<p class="text-xs txt-grey">{format!("Notes: {notes}")}</p>
					}
				})}
			<p class="text-xs txt-grey">
				{format!("Created {}, last updated {}", event.created, event.last_updated)}
			</p>
		</ContainerBody>
	}
}
