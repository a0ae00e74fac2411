use crate::imports::*;

/// A small coloured pill for statuses and priorities.
#[component]
pub fn StatusBadge(
	/// The text of the badge
	#[prop(into)]
	text: MaybeSignal<String>,
	/// The colour of the badge
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
) -> impl IntoView {
	let class = move || format!("status-badge badge-{}", color.get().as_css_name());

	view! {
		<span class={class}>{move || text.get()}</span>
	}
}
