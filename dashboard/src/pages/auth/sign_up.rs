use leptos_router::{use_navigate, NavigateOptions};
use models::api::auth::LoginResponse;

use crate::prelude::*;

/// The citizen registration form. Registration logs the user straight in;
/// every new account starts with the citizen role.
#[component]
pub fn SignUpForm() -> impl IntoView {
	let (_, set_auth_state) = AuthState::load();

	let first_name = create_rw_signal("".to_owned());
	let last_name = create_rw_signal("".to_owned());
	let email = create_rw_signal("".to_owned());
	let password = create_rw_signal("".to_owned());

	let name_error = create_rw_signal("".to_owned());
	let email_error = create_rw_signal("".to_owned());
	let password_error = create_rw_signal("".to_owned());

	let loading = create_rw_signal(false);

	let handle_errors = move |error: ApiErrorResponse| match error.body.error {
		ErrorType::InvalidEmail | ErrorType::EmailUnavailable => {
			email_error.set(error.to_string());
		}
		ErrorType::InvalidPassword => {
			password_error.set(error.to_string());
		}
		_ => {
			password_error.set(error.to_string());
		}
	};

	let on_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		name_error.set("".to_owned());
		email_error.set("".to_owned());
		password_error.set("".to_owned());

		let first_name_value = first_name.get_untracked().trim().to_owned();
		let last_name_value = last_name.get_untracked().trim().to_owned();
		let email_value = email.get_untracked().trim().to_owned();

		if first_name_value.is_empty() || last_name_value.is_empty() {
			name_error.set("Please provide your full name".to_owned());
			return;
		}
		if email_value.is_empty() {
			email_error.set("Please provide an email".to_owned());
			return;
		}
		if password.get_untracked().is_empty() {
			password_error.set("Please provide a password".to_owned());
			return;
		}

		loading.set(true);
		spawn_local(async move {
			let response = create_account(
				email_value,
				password.get_untracked(),
				first_name_value,
				last_name_value,
			)
			.await;

			match response {
				Ok(LoginResponse {
					access_token,
					refresh_token,
					user,
				}) => {
					set_auth_state.set(AuthState::LoggedIn {
						access_token,
						refresh_token,
						user,
					});
					use_navigate()(
						&AppRoutes::LoggedInRoute(LoggedInRoute::Home).to_string(),
						NavigateOptions::default(),
					);
				}
				Err(error) => handle_errors(error),
			}
			loading.set(false);
		})
	};

	view! {
		<form on:submit={on_submit} class="box-onboard txt-white fc-fs-fs">
			<Title text="Sign up"/>
			<div class="fr-sb-bl full-width mb-lg">
				<h1 class="txt-primary text-xl">"Sign up"</h1>
				<div class="fr-fs-fs text-sm">
					<p>"Already have an account? "</p>
					<Link to={LoggedOutRoute::Login.to_string()} r#type={Variant::Link}>
						"Sign in"
					</Link>
				</div>
			</div>

			<div class="fr-sb-fs full-width gap-md">
				<Input
					id="first_name"
					class="full-width"
					placeholder="First name"
					disabled={Signal::derive(move || loading.get())}
					value={first_name}
					on_input={Callback::new(move |ev: ev::Event| first_name.set(event_target_value(&ev)))}
				/>
				<Input
					id="last_name"
					class="full-width"
					placeholder="Last name"
					disabled={Signal::derive(move || loading.get())}
					value={last_name}
					on_input={Callback::new(move |ev: ev::Event| last_name.set(event_target_value(&ev)))}
				/>
			</div>
			<Show when={move || !name_error.get().is_empty()}>
				<Alert r#type={AlertType::Error} class="mt-xs">
					{move || name_error.get()}
				</Alert>
			</Show>

			<Input
				id="email"
				r#type={InputType::Email}
				class="full-width mt-md"
				placeholder="Email"
				disabled={Signal::derive(move || loading.get())}
				value={email}
				on_input={Callback::new(move |ev: ev::Event| email.set(event_target_value(&ev)))}
				error={email_error}
			/>

			<Input
				id="password"
				r#type={InputType::Password}
				class="full-width mt-md"
				placeholder="Password"
				disabled={Signal::derive(move || loading.get())}
				value={password}
				on_input={Callback::new(move |ev: ev::Event| password.set(event_target_value(&ev)))}
				error={password_error}
			/>

			<Link
				r#type={Variant::Button}
				style_variant={LinkStyleVariant::Contained}
				should_submit=true
				disabled={Signal::derive(move || loading.get())}
				class="full-width mt-lg"
			>
				{move || if loading.get() { "Creating account..." } else { "Create account" }}
			</Link>
		</form>
	}
}
