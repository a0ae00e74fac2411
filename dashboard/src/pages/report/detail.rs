use leptos_router::use_params_map;
use models::api::report::{Report, ReportStatus};

use super::status_color;
use crate::prelude::*;

/// The report detail page. Citizens see their own reports; reviewers
/// additionally get the verify and reject actions while the report is
/// pending.
#[component]
pub fn ReportDetailPage() -> impl IntoView {
	let (state, _) = AuthState::load();
	let params = use_params_map();
	let toaster = expect_toaster();

	let report_id = create_memo(move |_| {
		params.with(|params| {
			params
				.get("report_id")
				.and_then(|id| Uuid::parse_str(id).ok())
		})
	});

	// bumped after every status change to force a fresh fetch
	let refetch = create_rw_signal(0u32);

	let report = create_local_resource(
		move || (report_id.get(), refetch.get()),
		move |(report_id, _)| {
			let access_token = state.with_untracked(AuthState::access_token);
			async move {
				let Some(report_id) = report_id else {
					return Err(ApiErrorResponse::internal_error("invalid report id"));
				};
				get_report_info(access_token, report_id)
					.await
					.map(|response| response.report)
			}
		},
	);

	let can_review = create_memo(move |_| {
		state
			.with(AuthState::role)
			.is_some_and(|role| role.can(Capability::ReviewReports))
	});

	let busy = create_rw_signal(false);
	let action_error = create_rw_signal("".to_owned());

	let show_reject_modal = create_rw_signal(false);
	let reason = create_rw_signal("".to_owned());
	let reason_error = create_rw_signal("".to_owned());

	let on_verify = move |_| {
		let Some(report_id) = report_id.get_untracked() else {
			return;
		};
		busy.set(true);
		action_error.set("".to_owned());
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			match verify_report(access_token, report_id).await {
				Ok(_) => {
					toaster.toast("Report verified", constants::STATUS_FLASH_DURATION);
					refetch.update(|count| *count += 1);
				}
				Err(error) => action_error.set(error.to_string()),
			}
			busy.set(false);
		});
	};

	// no call leaves this handler while the reason is empty
	let on_confirm_reject = move |_| {
		let Some(request) = RejectReportRequest::from_reason(&reason.get_untracked()) else {
			reason_error.set("Please provide a reason for the rejection".to_owned());
			return;
		};
		let Some(report_id) = report_id.get_untracked() else {
			return;
		};
		busy.set(true);
		action_error.set("".to_owned());
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			match reject_report(access_token, report_id, request).await {
				Ok(_) => {
					toaster.toast("Report rejected", constants::STATUS_FLASH_DURATION);
					show_reject_modal.set(false);
					reason.set("".to_owned());
					refetch.update(|count| *count += 1);
				}
				Err(error) => action_error.set(error.to_string()),
			}
			busy.set(false);
		});
	};

	view! {
		<ContainerMain>
			<Title text="Report"/>
			<Transition fallback={|| view! { <Spinner class="mx-auto"/> }}>
				{move || {
					report
						.get()
						.map(|report| match report {
							Ok(report) => {
								let pending = report.status == ReportStatus::Pending;
								view! {
									<ReportInfo report={report}/>
									<Show when={move || !action_error.get().is_empty()}>
										<Alert r#type={AlertType::Error} class="full-width">
											{move || action_error.get()}
										</Alert>
									</Show>
									<Show when={move || can_review.get() && pending}>
										<div class="fr-fs-ct gap-md">
											<Link
												r#type={Variant::Button}
												style_variant={LinkStyleVariant::Contained}
												color={Color::Success}
												disabled={Signal::derive(move || busy.get())}
												on_click={Callback::new(on_verify)}
											>
												"Verify"
											</Link>
											<Link
												r#type={Variant::Button}
												style_variant={LinkStyleVariant::Contained}
												color={Color::Error}
												disabled={Signal::derive(move || busy.get())}
												on_click={Callback::new(move |_| {
													reason_error.set("".to_owned());
													show_reject_modal.set(true);
												})}
											>
												"Reject"
											</Link>
										</div>
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

			<Modal
				open={show_reject_modal}
				title="Reject report"
				on_close={Callback::new(move |_| show_reject_modal.set(false))}
			>
				<Textbox
					id="rejection-reason"
					label="Reason"
					class="full-width"
					placeholder="Why is this report being rejected?"
					disabled={Signal::derive(move || busy.get())}
					value={reason}
					on_input={Callback::new(move |ev: ev::Event| {
						reason.set(event_target_value(&ev))
					})}
					error={reason_error}
				/>
				<Link
					r#type={Variant::Button}
					style_variant={LinkStyleVariant::Contained}
					color={Color::Error}
					disabled={Signal::derive(move || busy.get())}
					on_click={Callback::new(on_confirm_reject)}
				>
					"Reject report"
				</Link>
			</Modal>
		</ContainerMain>
	}
}

/// The read-only rendering of a report.
#[component]
fn ReportInfo(
	/// The report to render
	report: Report,
) -> impl IntoView {
	view! {
		<ContainerHead>
			<PageTitleContainer>
				<PageTitle>{report.title.clone()}</PageTitle>
			</PageTitleContainer>
			<StatusBadge
				text={report.status.to_string()}
				color={status_color(report.status)}
			/>
		</ContainerHead>
		<ContainerBody>
			<p class="text-xs txt-grey">
				{format!(
					"{} reported by {} on {}",
					report.report_type.label(),
					report.reporter_email,
					report.created,
				)}
			</p>
			<p class="text-sm full-width">{report.description.clone()}</p>
			{report
				.rejection_reason
				.map(|reason| {
					view! {
						<Alert r#type={AlertType::Warning} class="full-width">
							{format!("Rejected: {reason}")}
						</Alert>
					}
				})}
			{report
				.location
				.map(|location| {
					view! {
						<p class="text-xs txt-grey">
							{format!("Location: {}, {}", location.latitude, location.longitude)}
						</p>
					}
				})}
			<Show when={
				let has_attachments = !report.attachments.is_empty();
				move || has_attachments
			}>
				<h3 class="text-md">"Attachments"</h3>
			</Show>
			<ul class="fc-fs-fs gap-sm">
				{report
					.attachments
					.iter()
					.map(|attachment| {
						view! {
							<li class="text-sm">
								{format!(
									"{} ({})",
									attachment.file_name,
									attachment.content_type,
								)}
							</li>
						}
					})
					.collect_view()}
			</ul>
		</ContainerBody>
	}
}
