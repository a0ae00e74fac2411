use crate::imports::*;

/// The outermost container of a page.
#[component]
pub fn ContainerMain(
	/// Additional classnames to apply to the container, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The content of the page
	children: Children,
) -> impl IntoView {
	let class = move || format!("container-main fc-fs-fs {}", class.get());

	view! {
		<section class={class}>
			{children()}
		</section>
	}
}

/// The header strip of a page: title, description and primary action.
#[component]
pub fn ContainerHead(
	/// The content of the header
	children: Children,
) -> impl IntoView {
	view! {
		<header class="container-head fr-sb-ct full-width">
			{children()}
		</header>
	}
}

/// The body of a page, under the header strip.
#[component]
pub fn ContainerBody(
	/// Additional classnames to apply to the body, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The content of the body
	children: Children,
) -> impl IntoView {
	let class = move || format!("container-body fc-fs-fs full-width {}", class.get());

	view! {
		<div class={class}>
			{children()}
		</div>
	}
}
