use crate::imports::*;

/// A spinner for in-flight requests.
#[component]
pub fn Spinner(
	/// Additional classnames to apply to the spinner, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || format!("spinner {}", class.get());

	view! {
		<div class={class} aria-label="Loading"></div>
	}
}
