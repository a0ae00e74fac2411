use leptos_router::{use_navigate, NavigateOptions};
use models::api::report::{ReportType, SubmitReportRequest};

use crate::prelude::*;

/// The value of the category dropdown that opens the free-text field.
const CUSTOM_TYPE: &str = "custom";

/// The citizen report submission form. Every logged in role may submit.
///
/// Submission is two calls: the report itself, then the staged attachments
/// once the report id exists. A failed attach call is surfaced but the
/// report stays submitted; there is no rollback.
#[component]
pub fn SubmitReportPage() -> impl IntoView {
	let (state, _) = AuthState::load();
	let toaster = expect_toaster();

	let title = create_rw_signal("".to_owned());
	let description = create_rw_signal("".to_owned());
	let report_type = create_rw_signal("".to_owned());
	let custom_type = create_rw_signal("".to_owned());
	let location = create_rw_signal(None::<GeoLocation>);
	let staged = create_rw_signal(Vec::<StagedAttachment>::new());
	let rejections = create_rw_signal(Vec::<String>::new());

	let title_error = create_rw_signal("".to_owned());
	let description_error = create_rw_signal("".to_owned());
	let type_error = create_rw_signal("".to_owned());
	let request_error = create_rw_signal("".to_owned());
	let loading = create_rw_signal(false);

	let type_options = ReportType::WELL_KNOWN
		.iter()
		.map(|report_type| {
			InputDropdownOption::new(report_type.as_wire_code(), report_type.label())
		})
		.chain([InputDropdownOption::new(CUSTOM_TYPE, "Something else")])
		.collect::<Vec<_>>();

	// submission is held while any selected file is still being read
	let reading = Signal::derive(move || staged.with(|staged| reads_pending(staged)));

	let on_files_selected = Callback::new(move |ev: ev::Event| {
		let input = event_target::<web_sys::HtmlInputElement>(&ev);
		if let Some(files) = input.files() {
			rejections.set(stage_files(staged, &files));
		}
		// allow re-selecting the same file after a removal
		input.set_value("");
	});

	let on_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		if staged.with_untracked(|staged| reads_pending(staged)) {
			return;
		}
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
			description_error.set("Please describe what happened".to_owned());
			return;
		}
		let type_value = match report_type.get_untracked().as_str() {
			"" => {
				type_error.set("Please choose a category".to_owned());
				return;
			}
			CUSTOM_TYPE => {
				let Some(custom) = custom_type
					.get_untracked()
					.trim()
					.to_owned()
					.some_if_not_empty()
				else {
					type_error.set("Please name your category".to_owned());
					return;
				};
				ReportType::Custom(custom)
			}
			code => ReportType::from(code),
		};

		let request = SubmitReportRequest {
			title: title_value,
			description: description_value,
			report_type: type_value,
			location: location.get_untracked(),
		};

		loading.set(true);
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);

			let report = match submit_report(access_token.clone(), request).await {
				Ok(response) => response.report,
				Err(error) => {
					request_error.set(error.to_string());
					loading.set(false);
					return;
				}
			};

			let uploads = staged.with_untracked(|staged| {
				staged
					.iter()
					.filter_map(StagedAttachment::as_upload)
					.collect::<Vec<_>>()
			});
			if uploads.is_empty() {
				toaster.toast("Report submitted", constants::SUBMISSION_FLASH_DURATION);
			} else {
				match attach_files_to_report(access_token, report.id, uploads).await {
					Ok(_) => {
						toaster.toast("Report submitted", constants::SUBMISSION_FLASH_DURATION);
					}
					Err(error) => {
						// the report exists either way; only the files failed
						toaster.toast(
							format!("Report submitted, but the attachments failed: {error}"),
							constants::SUBMISSION_FLASH_DURATION,
						);
					}
				}
			}

			use_navigate()(&LoggedInRoute::Reports.path(), NavigateOptions::default());
			loading.set(false);
		});
	};

	view! {
		<ContainerMain>
			<Title text="Submit a report"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Submit a report"</PageTitle>
				</PageTitleContainer>
				<PageDescription description="Tell us what happened. Photos and videos help."/>
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
						label="What happened?"
						class="full-width"
						disabled={Signal::derive(move || loading.get())}
						value={description}
						on_input={Callback::new(move |ev: ev::Event| {
							description.set(event_target_value(&ev))
						})}
						error={description_error}
					/>
					<InputDropdown
						id="report-type"
						label="Category"
						placeholder="Choose a category"
						options={type_options}
						disabled={Signal::derive(move || loading.get())}
						value={report_type}
						on_select={Callback::new(move |value: String| report_type.set(value))}
					/>
					<Show when={move || report_type.get() == CUSTOM_TYPE}>
						<Input
							id="custom-type"
							class="full-width"
							placeholder="Name your category"
							disabled={Signal::derive(move || loading.get())}
							value={custom_type}
							on_input={Callback::new(move |ev: ev::Event| {
								custom_type.set(event_target_value(&ev))
							})}
						/>
					</Show>
					<Show when={move || !type_error.get().is_empty()}>
						<Alert r#type={AlertType::Error}>{move || type_error.get()}</Alert>
					</Show>

					<LocationPicker
						location={location}
						disabled={Signal::derive(move || loading.get())}
					/>

					<div class="input-group fc-fs-fs full-width">
						<label class="input-label" for="attachments">
							"Attachments (optional, up to 5 photos or videos)"
						</label>
						<input
							id="attachments"
							name="attachments"
							class="input full-width"
							type="file"
							multiple=true
							accept="image/*,video/*"
							disabled={move || loading.get()}
							on:input={move |ev| on_files_selected.call(ev)}
						/>
					</div>
					<For
						each={move || rejections.get()}
						key={String::clone}
						let:rejection
					>
						<Alert r#type={AlertType::Warning} class="full-width">
							{rejection}
						</Alert>
					</For>
					<div class="fr-fs-fs gap-md">
						<For
							each={move || staged.get()}
							key={|attachment| attachment.id}
							let:attachment
						>
							<StagedAttachmentCard staged={staged} attachment={attachment}/>
						</For>
					</div>

					<Link
						r#type={Variant::Button}
						style_variant={LinkStyleVariant::Contained}
						should_submit=true
						disabled={Signal::derive(move || loading.get() || reading.get())}
					>
						{move || {
							if loading.get() {
								"Submitting..."
							} else if reading.get() {
								"Reading attachments..."
							} else {
								"Submit report"
							}
						}}
					</Link>
				</form>
			</ContainerBody>
		</ContainerMain>
	}
}

/// The preview card of one staged attachment: a thumbnail for images, a
/// placeholder for videos, and a remove button either way.
#[component]
fn StagedAttachmentCard(
	/// The staging list the attachment lives in
	staged: RwSignal<Vec<StagedAttachment>>,
	/// The staged attachment to preview
	attachment: StagedAttachment,
) -> impl IntoView {
	let id = attachment.id;
	let file_name = attachment.file_name.clone();
	let data_url = attachment.data_url;
	let is_image = attachment.has_image_preview();

	let on_remove = Callback::new(move |_| {
		staged.update(|staged| staged.retain(|entry| entry.id != id));
	});

	view! {
		<div class="fc-fs-ct attachment-card p-sm">
			{move || match (is_image, data_url.get()) {
				(true, Some(url)) => view! {
					<img class="attachment-preview" src={url} alt={file_name.clone()}/>
				}
				.into_view(),
				(true, None) => view! { <Spinner/> }.into_view(),
				(false, _) => view! {
					<div class="attachment-preview fc-ct-ct txt-grey">"Video"</div>
				}
				.into_view(),
			}}
			<p class="text-xs">{attachment.file_name.clone()}</p>
			<Link r#type={Variant::Button} on_click={on_remove}>
				"Remove"
			</Link>
		</div>
	}
}
