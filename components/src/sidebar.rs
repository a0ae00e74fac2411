use leptos_router::use_location;

use crate::imports::*;

/// A link in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkItem {
	/// The text of the link
	pub title: String,
	/// The path the link navigates to
	pub path: String,
}

/// A single sidebar link, highlighted when the current route lives under its
/// path.
#[component]
pub fn SidebarItem(
	/// Link info of the link item
	#[prop(into)]
	link: LinkItem,
) -> impl IntoView {
	let location = use_location();

	let path = link.path.clone();
	let class = move || {
		if location.pathname.get().starts_with(path.as_str()) {
			"sidebar-item full-width active-nav-item"
		} else {
			"sidebar-item full-width"
		}
	};

	view! {
		<li class={class}>
			<a href={link.path} class="btn full-width txt-left">
				{link.title}
			</a>
		</li>
	}
}

/// The navigation column on the left of every logged-in page. The caller
/// decides which items the current user gets to see.
#[component]
pub fn Sidebar(
	/// The navigation items, in order
	#[prop(into)]
	link_items: Signal<Vec<LinkItem>>,
	/// The footer of the sidebar, typically the user card and sign out
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<aside class="sidebar fc-sb-fs">
			<nav class="full-width">
				<ul class="full-width fc-fs-fs">
					<For
						each={move || link_items.get()}
						key={|link| link.path.clone()}
						let:link
					>
						<SidebarItem link={link}/>
					</For>
				</ul>
			</nav>
			<div class="sidebar-footer full-width">{children()}</div>
		</aside>
	}
}
