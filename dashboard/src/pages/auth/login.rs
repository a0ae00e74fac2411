use leptos_router::{use_navigate, NavigateOptions};
use models::api::auth::LoginResponse;

use crate::prelude::*;

/// The login form. This is the form that the user uses to log in to the
/// console.
#[component]
pub fn LoginForm() -> impl IntoView {
	let (_, set_auth_state) = AuthState::load();

	let email = create_rw_signal("".to_owned());
	let password = create_rw_signal("".to_owned());

	let email_error = create_rw_signal("".to_owned());
	let password_error = create_rw_signal("".to_owned());

	let loading = create_rw_signal(false);

	let handle_errors = move |error: ApiErrorResponse| match error.body.error {
		ErrorType::UserNotFound => {
			email_error.set(error.to_string());
			password_error.set("".to_owned());
		}
		ErrorType::InvalidPassword => {
			email_error.set("".to_owned());
			password_error.set(error.to_string());
		}
		_ => {
			email_error.set("".to_owned());
			password_error.set(error.to_string());
		}
	};

	let on_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		email_error.set("".to_owned());
		password_error.set("".to_owned());

		let email_value = email.get_untracked().trim().to_owned();
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
			let response = login(email_value, password.get_untracked()).await;

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
			<Title text="Sign in"/>
			<div class="fr-sb-bl full-width mb-lg">
				<h1 class="txt-primary text-xl">"Sign in"</h1>
				<div class="fr-fs-fs text-sm">
					<p>"New here? "</p>
					<Link to={LoggedOutRoute::SignUp.to_string()} r#type={Variant::Link}>
						"Sign up"
					</Link>
				</div>
			</div>

			<Input
				id="email"
				r#type={InputType::Email}
				class="full-width"
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
				{move || if loading.get() { "Signing in..." } else { "Sign in" }}
			</Link>
		</form>
	}
}
