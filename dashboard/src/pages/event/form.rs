use leptos_router::{use_navigate, NavigateOptions};
use models::api::{
	event::{CreateEventRequest, Event, EventPriority},
	event_type::EventType,
};
use strum::IntoEnumIterator;

use crate::prelude::*;

/// The event creation page, gated to roles that may manage events.
#[component]
pub fn CreateEventPage() -> impl IntoView {
	view! {
		<RequireRole allowed={EVENT_MANAGERS}>
			<EventForm/>
		</RequireRole>
	}
}

/// The event form, creating a new event or updating an existing one. On
/// success the user lands back on the events list with a flash message.
#[component]
pub fn EventForm(
	/// The event to edit; a fresh event is created when absent
	#[prop(optional)]
	existing: Option<Event>,
) -> impl IntoView {
	let (state, _) = AuthState::load();
	let toaster = expect_toaster();

	let existing_id = existing.as_ref().map(|event| event.id);
	let title = create_rw_signal(
		existing
			.as_ref()
			.map(|event| event.title.clone())
			.unwrap_or_default(),
	);
	let description = create_rw_signal(
		existing
			.as_ref()
			.map(|event| event.description.clone())
			.unwrap_or_default(),
	);
	let priority = create_rw_signal(
		existing
			.as_ref()
			.map(|event| event.priority.to_string())
			.unwrap_or_else(|| EventPriority::Medium.to_string()),
	);
	let event_type = create_rw_signal(
		existing
			.as_ref()
			.map(|event| event.event_type_id.to_string())
			.unwrap_or_default(),
	);
	let location = create_rw_signal(existing.as_ref().and_then(|event| event.location));
	let location_details = create_rw_signal(
		existing
			.as_ref()
			.and_then(|event| event.location_details.clone())
			.unwrap_or_default(),
	);
	let notes = create_rw_signal(
		existing
			.as_ref()
			.and_then(|event| event.notes.clone())
			.unwrap_or_default(),
	);

	let title_error = create_rw_signal("".to_owned());
	let description_error = create_rw_signal("".to_owned());
	let type_error = create_rw_signal("".to_owned());
	let request_error = create_rw_signal("".to_owned());
	let loading = create_rw_signal(false);

	let event_types = create_local_resource(
		|| (),
		move |_| {
			let access_token = state.with_untracked(AuthState::access_token);
			async move { list_event_types(access_token).await }
		},
	);
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
	let priority_options = EventPriority::iter()
		.map(|priority| InputDropdownOption::new(priority.to_string(), priority.to_string()))
		.collect::<Vec<_>>();

	let on_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		title_error.set("".to_owned());
		description_error.set("".to_owned());
		type_error.set("".to_owned());
		request_error.set("".to_owned());

		let title_value = title.get_untracked().trim().to_owned();
		let description_value = description.get_untracked().trim().to_owned();
		if title_value.is_empty() {
			title_error.set("Please provide a title".to_owned());
			return;
		}
		if description_value.is_empty() {
			description_error.set("Please provide a description".to_owned());
			return;
		}
		let Ok(event_type_id) = Uuid::parse_str(&event_type.get_untracked()) else {
			type_error.set("Please choose an event type".to_owned());
			return;
		};
		let priority_value = priority
			.get_untracked()
			.parse::<EventPriority>()
			.unwrap_or_default();

		let request = CreateEventRequest {
			title: title_value,
			description: description_value,
			priority: priority_value,
			event_type_id,
			location: location.get_untracked(),
			location_details: location_details
				.get_untracked()
				.trim()
				.to_owned()
				.some_if_not_empty(),
			notes: notes.get_untracked().trim().to_owned().some_if_not_empty(),
		};

		loading.set(true);
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			let result = match existing_id {
				Some(event_id) => update_event(access_token, event_id, request)
					.await
					.map(|_| "Event updated"),
				None => create_event(access_token, request).await.map(|_| "Event created"),
			};

			match result {
				Ok(message) => {
					toaster.toast(message, constants::SUBMISSION_FLASH_DURATION);
					use_navigate()(
						&LoggedInRoute::Events.path(),
						NavigateOptions::default(),
					);
				}
				Err(error) => request_error.set(error.to_string()),
			}
			loading.set(false);
		});
	};

	view! {
		<ContainerMain>
			<Title text={if existing_id.is_some() { "Edit event" } else { "Create event" }}/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>
						{if existing_id.is_some() { "Edit event" } else { "Create event" }}
					</PageTitle>
				</PageTitleContainer>
			</ContainerHead>
			<ContainerBody>
				<form on:submit={on_submit} class="fc-fs-fs full-width gap-md">
					<Show when={move || !request_error.get().is_empty()}>
						<Alert r#type={AlertType::Error} class="full-width">
							{move || request_error.get()}
						</Alert>
					</Show>

					<Input
						id="title"
						label="Title"
						class="full-width"
						disabled={Signal::derive(move || loading.get())}
						value={title}
						on_input={Callback::new(move |ev: ev::Event| {
							title.set(event_target_value(&ev))
						})}
						error={title_error}
					/>
					<Textbox
						id="description"
						label="Description"
						class="full-width"
						disabled={Signal::derive(move || loading.get())}
						value={description}
						on_input={Callback::new(move |ev: ev::Event| {
							description.set(event_target_value(&ev))
						})}
						error={description_error}
					/>
					<div class="fr-fs-fs gap-md full-width">
						<InputDropdown
							id="priority"
							label="Priority"
							options={priority_options}
							disabled={Signal::derive(move || loading.get())}
							value={priority}
							on_select={Callback::new(move |value: String| priority.set(value))}
						/>
						<InputDropdown
							id="event-type"
							label="Event type"
							placeholder="Choose an event type"
							options={type_options}
							disabled={Signal::derive(move || loading.get())}
							value={event_type}
							on_select={Callback::new(move |value: String| event_type.set(value))}
						/>
					</div>
					<Show when={move || !type_error.get().is_empty()}>
						<Alert r#type={AlertType::Error}>{move || type_error.get()}</Alert>
					</Show>

					<LocationPicker
						location={location}
						disabled={Signal::derive(move || loading.get())}
					/>

					<Input
						id="location-details"
						label="Location details (optional)"
						class="full-width"
						placeholder="North gate, level 2, ..."
						disabled={Signal::derive(move || loading.get())}
						value={location_details}
						on_input={Callback::new(move |ev: ev::Event| {
							location_details.set(event_target_value(&ev))
						})}
					/>
					<Textbox
						id="notes"
						label="Notes (optional)"
						class="full-width"
						disabled={Signal::derive(move || loading.get())}
						value={notes}
						on_input={Callback::new(move |ev: ev::Event| {
							notes.set(event_target_value(&ev))
						})}
					/>

					<Link
						r#type={Variant::Button}
						style_variant={LinkStyleVariant::Contained}
						should_submit=true
						disabled={Signal::derive(move || loading.get())}
					>
						{move || {
							if loading.get() {
								"Saving..."
							} else if existing_id.is_some() {
								"Save changes"
							} else {
								"Create event"
							}
						}}
					</Link>
				</form>
			</ContainerBody>
		</ContainerMain>
	}
}
