use crate::imports::*;

/// One selectable entry of an [`InputDropdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDropdownOption {
	/// The value submitted when this option is selected
	pub id: String,
	/// The text shown for this option
	pub label: String,
}

impl InputDropdownOption {
	/// An option whose value and label are the same string.
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
		}
	}
}

/// A labelled select dropdown. The empty-string value renders as the
/// placeholder, so an optional filter can be cleared again.
#[component]
pub fn InputDropdown(
	/// The name and id of the select
	#[prop(into)]
	id: String,
	/// Additional classnames to apply to the outer div, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The placeholder shown while nothing is selected
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// Whether the select is disabled
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Label for the select; an empty string doesn't render the label
	#[prop(into, optional, default = "".into())]
	label: String,
	/// The options of the select
	#[prop(into)]
	options: MaybeSignal<Vec<InputDropdownOption>>,
	/// The id of the currently selected option, or an empty string
	#[prop(into, optional)]
	value: MaybeSignal<String>,
	/// Called with the id of the newly selected option
	#[prop(into, optional)]
	on_select: Option<Callback<String>>,
) -> impl IntoView {
	let outer_class = move || format!("input-group fc-fs-fs {}", class.get());
	let show_label = !label.is_empty();
	let label_for = id.clone();
	let value = Signal::derive(move || value.get());

	view! {
		<div class={outer_class}>
			<Show when={move || show_label}>
				<label class="input-label" for={label_for.clone()}>
					{label.clone()}
				</label>
			</Show>
			<select
				id={id.clone()}
				name={id.clone()}
				class="input full-width"
				disabled={move || disabled.get()}
				prop:value={move || value.get()}
				on:change={move |ev| {
					if let Some(on_select) = on_select {
						on_select.call(event_target_value(&ev));
					}
				}}
			>
				<option value="" disabled=false>
					{move || placeholder.get()}
				</option>
				<For
					each={move || options.get()}
					key={|option| option.id.clone()}
					let:option
				>
					<option
						value={option.id.clone()}
						selected={
							let id = option.id.clone();
							move || value.get() == id
						}
					>
						{option.label.clone()}
					</option>
				</For>
			</select>
		</div>
	}
}
