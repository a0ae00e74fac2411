use models::api::user::{PlatformUser, UserFilter};
use strum::IntoEnumIterator;

use crate::prelude::*;

/// The user management page. Company admins only see their own company's
/// users; the filter here is a convenience and the server scopes the list
/// regardless.
#[component]
pub fn UsersDashboard() -> impl IntoView {
	view! {
		<RequireRole allowed={USER_MANAGERS}>
			<UsersList/>
		</RequireRole>
	}
}

#[component]
fn UsersList() -> impl IntoView {
	let (state, _) = AuthState::load();

	let page = create_rw_signal(1usize);

	let query = ListQuery::new(move || {
		let access_token = state.with_untracked(AuthState::access_token);
		let company_id = state
			.with_untracked(AuthState::current_user)
			.filter(|user| user.role == UserRole::CompanyAdmin)
			.and_then(|user| user.company_id);
		let query = Paginated {
			data: UserFilter { company_id },
			page: page.get_untracked(),
			limit: Paginated::<UserFilter>::DEFAULT_PAGE_SIZE,
		};
		async move { list_users(access_token, query).await }
	});

	let on_page_change = Callback::new(move |number: usize| {
		page.set(number);
		query.reload();
	});

	view! {
		<ContainerMain>
			<Title text="Users"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Users"</PageTitle>
				</PageTitleContainer>
			</ContainerHead>
			<ContainerBody>
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
						"Email".to_string(),
						"Role".to_string(),
						"Joined".to_string(),
					]}>
						<For
							each={move || query.data.get()}
							key={|user| user.id}
							let:user
						>
							<UserRow user={user} query={query}/>
						</For>
					</TableDashboard>
				</Show>

				<p class="text-xs txt-grey">
					{move || format!("{} users", query.meta.get().total)}
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

/// One row of the users table, with an inline role dropdown. Choosing a new
/// role fires the update and reloads the list.
#[component]
fn UserRow(
	/// The user of this row
	user: PlatformUser,
	/// The list query to reload after a role change
	query: ListQuery<PlatformUser>,
) -> impl IntoView {
	let (state, _) = AuthState::load();
	let toaster = expect_toaster();

	let user_id = user.id;
	let busy = create_rw_signal(false);

	let role_options = UserRole::iter()
		.map(|role| InputDropdownOption::new(role.to_string(), role.to_string()))
		.collect::<Vec<_>>();

	let on_role_select = Callback::new(move |value: String| {
		let Ok(role) = value.parse::<UserRole>() else {
			return;
		};
		busy.set(true);
		spawn_local(async move {
			let access_token = state.with_untracked(AuthState::access_token);
			match update_user_role(access_token, user_id, role).await {
				Ok(_) => {
					toaster.toast("User role updated", constants::STATUS_FLASH_DURATION);
				}
				Err(error) => {
					toaster.toast(error.to_string(), constants::STATUS_FLASH_DURATION);
				}
			}
			busy.set(false);
			query.reload();
		});
	});

	view! {
		<tr class="table-row">
			<td>{user.email.clone()}</td>
			<td>
				<InputDropdown
					id={format!("user-role-{user_id}")}
					options={role_options}
					disabled={Signal::derive(move || busy.get())}
					value={user.role.to_string()}
					on_select={on_role_select}
				/>
			</td>
			<td>{user.created.to_string()}</td>
		</tr>
	}
}
