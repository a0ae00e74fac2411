use crate::imports::*;

/// An inline banner for errors, warnings and success confirmations. Rendered
/// under the field it relates to, or at the top of a page for request-level
/// failures.
#[component]
pub fn Alert(
	/// The tone of the banner
	#[prop(into, optional)]
	r#type: MaybeSignal<AlertType>,
	/// Additional classnames to apply to the banner, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The message of the banner
	children: Children,
) -> impl IntoView {
	let class = move || format!("alert alert-{} {}", r#type.get().as_css_name(), class.get());

	view! {
		<div class={class} role="alert">
			{children()}
		</div>
	}
}
