use models::api::company::UpdateCompanyRequest;

use crate::prelude::*;

/// The company settings page. Company admins rename their own company here;
/// the company id comes from the cached session identity.
#[component]
pub fn CompanySettingsPage() -> impl IntoView {
	view! {
		<RequireRole allowed={COMPANY_SETTINGS_MANAGERS}>
			<CompanySettings/>
		</RequireRole>
	}
}

#[component]
fn CompanySettings() -> impl IntoView {
	let (state, _) = AuthState::load();
	let toaster = expect_toaster();

	let company_id = create_memo(move |_| {
		state
			.with(AuthState::current_user)
			.and_then(|user| user.company_id)
	});

	let name = create_rw_signal("".to_owned());
	let name_error = create_rw_signal("".to_owned());
	let busy = create_rw_signal(false);

	let on_rename = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		name_error.set("".to_owned());

		let Some(company_id) = company_id.get_untracked() else {
			return;
		};
		let Some(name_value) = name.get_untracked().trim().to_owned().some_if_not_empty()
		else {
			name_error.set("Please provide a company name".to_owned());
			return;
		};

		busy.set(true);
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			let request = UpdateCompanyRequest {
				name: Some(name_value),
				status: None,
			};
			match update_company(access_token, company_id, request).await {
				Ok(_) => {
					toaster.toast("Company renamed", constants::STATUS_FLASH_DURATION);
					name.set("".to_owned());
				}
				Err(error) => name_error.set(error.to_string()),
			}
			busy.set(false);
		});
	};

	view! {
		<ContainerMain>
			<Title text="Company settings"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Company settings"</PageTitle>
				</PageTitleContainer>
			</ContainerHead>
			<ContainerBody>
				<Show
					when={move || company_id.get().is_some()}
					fallback={|| {
						view! {
							<Alert r#type={AlertType::Warning} class="full-width">
								"Your account is not tied to a company."
							</Alert>
						}
					}}
				>
					<form on:submit={on_rename} class="fr-fs-fe gap-md full-width">
						<Input
							id="company-name"
							label="Rename your company"
							placeholder="New company name"
							disabled={Signal::derive(move || busy.get())}
							value={name}
							on_input={Callback::new(move |ev: ev::Event| {
								name.set(event_target_value(&ev))
							})}
							error={name_error}
						/>
						<Link
							r#type={Variant::Button}
							style_variant={LinkStyleVariant::Contained}
							should_submit=true
							disabled={Signal::derive(move || busy.get())}
						>
							"Rename"
						</Link>
					</form>
				</Show>
			</ContainerBody>
		</ContainerMain>
	}
}
