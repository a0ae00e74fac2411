use leptos_router::{Outlet, ProtectedRoute, Redirect, Route, Router, Routes};

use crate::{pages::*, prelude::*};

/// The shell around every logged out page.
#[component]
pub fn AppOutletView() -> impl IntoView {
	view! {
		<div class="fc-ct-ct bg-page bg-onboard full-width full-height">
			<Outlet/>
		</div>
	}
}

/// The shell around every logged in page: the role-filtered sidebar, the
/// push notification bridge and the toast stack.
#[component]
pub fn AppOutlet() -> impl IntoView {
	provide_toaster();
	let toaster = expect_toaster();
	let (state, set_state) = AuthState::load();

	let link_items = Signal::derive(move || {
		let Some(user) = state.with(AuthState::current_user) else {
			return Vec::new();
		};
		let role = user.role;

		let mut items = vec![
			LinkItem {
				title: "Home".to_string(),
				path: LoggedInRoute::Home.path(),
			},
			LinkItem {
				title: "Reports".to_string(),
				path: LoggedInRoute::Reports.path(),
			},
		];
		if role.can(Capability::ViewEvents) {
			items.push(LinkItem {
				title: "Events".to_string(),
				path: LoggedInRoute::Events.path(),
			});
		}
		if role.can(Capability::ViewCameras) {
			items.push(LinkItem {
				title: "Cameras".to_string(),
				path: LoggedInRoute::Cameras.path(),
			});
		}
		if role.can(Capability::ManageUsers) {
			items.push(LinkItem {
				title: "Users".to_string(),
				path: LoggedInRoute::Users.path(),
			});
		}
		if role.can(Capability::ManageAllCompanies) {
			items.push(LinkItem {
				title: "Companies".to_string(),
				path: LoggedInRoute::Companies.path(),
			});
		}
		if role.can(Capability::ManageCompanySettings) {
			items.push(LinkItem {
				title: "Company settings".to_string(),
				path: LoggedInRoute::CompanySettings.path(),
			});
		}
		items
	});

	let email = create_memo(move |_| {
		state
			.with(AuthState::current_user)
			.map(|user| user.email)
			.unwrap_or_default()
	});

	let on_sign_out = move |_| {
		let access_token = state.with_untracked(AuthState::access_token);
		spawn_local(async move {
			// the local session goes away regardless of the server outcome
			if let Err(error) = logout(access_token).await {
				error!("sign out: {}", error);
			}
			set_state.set(AuthState::LoggedOut);
		});
	};

	view! {
		<div class="fr-fs-fs full-width full-height bg-secondary">
			<NotificationBridge/>
			<Sidebar link_items={link_items}>
				<div class="fc-fs-fs full-width px-md">
					<p class="text-xs txt-grey">{move || email.get()}</p>
					<Link
						r#type={Variant::Button}
						style_variant={LinkStyleVariant::Plain}
						on_click={Callback::new(on_sign_out)}
					>
						"Sign out"
					</Link>
				</div>
			</Sidebar>
			<main class="fc-fs-ct full-width px-lg">
				<Outlet/>
			</main>
			<ToastContainer>
				<For
					each={move || toaster.queue.get()}
					key={|toast| toast.id}
					let:toast
				>
					<Toast
						message={toast.message.clone()}
						on_dismiss={move |_| toaster.remove(toast.id)}
					/>
				</For>
			</ToastContainer>
		</div>
	}
}

/// The main application component. This is the root component of the
/// application. It contains the main router and all the routes.
#[component]
pub fn App() -> impl IntoView {
	let (state, _) = AuthState::load();

	view! {
		<Router>
			<Routes>
				// Logged in routes
				<ProtectedRoute
					path={AppRoutes::Empty}
					view={AppOutlet}
					redirect_path={AppRoutes::LoggedOutRoute(LoggedOutRoute::Login)}
					condition={move || state.get().is_logged_in()}
				>
					<Route path={LoggedInRoute::Events} view={EventsDashboard}/>
					<Route path={LoggedInRoute::CreateEvent} view={CreateEventPage}/>
					<Route path={LoggedInRoute::EventDetail} view={EventDetailPage}/>
					<Route path={LoggedInRoute::Reports} view={ReportsDashboard}/>
					<Route path={LoggedInRoute::SubmitReport} view={SubmitReportPage}/>
					<Route path={LoggedInRoute::ReportDetail} view={ReportDetailPage}/>
					<Route path={LoggedInRoute::Companies} view={CompaniesDashboard}/>
					<Route path={LoggedInRoute::Users} view={UsersDashboard}/>
					<Route path={LoggedInRoute::CompanySettings} view={CompanySettingsPage}/>
					<Route path={LoggedInRoute::Cameras} view={CamerasDashboard}/>
					<Route path={LoggedInRoute::Home} view={HomePage}/>
				</ProtectedRoute>
				// Logged out routes
				<ProtectedRoute
					path={AppRoutes::Empty}
					view={AppOutletView}
					redirect_path={AppRoutes::LoggedInRoute(LoggedInRoute::Home)}
					condition={move || state.get().is_logged_out()}
				>
					<Route path={LoggedOutRoute::Login} view={LoginForm}/>
					<Route path={LoggedOutRoute::SignUp} view={SignUpForm}/>
					<Route
						path="*"
						view={|| {
							view! {
								<Redirect path={LoggedOutRoute::Login}/>
							}
						}}
					/>
				</ProtectedRoute>
			</Routes>
		</Router>
	}
}
