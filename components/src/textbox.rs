use crate::imports::*;

/// A labelled multi-line input with an optional field-scoped error line.
#[component]
pub fn Textbox(
	/// The name and id of the textarea
	#[prop(into)]
	id: String,
	/// Additional classnames to apply to the outer div, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// Placeholder text for the textarea
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// Whether the textarea is disabled
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Label for the textarea; an empty string doesn't render the label
	#[prop(into, optional, default = "".into())]
	label: String,
	/// The value of the textarea
	#[prop(into, optional)]
	value: MaybeSignal<String>,
	/// Input event handler
	#[prop(into, optional)]
	on_input: Option<Callback<ev::Event>>,
	/// The field-scoped error to render under the textarea, if any
	#[prop(into, optional)]
	error: MaybeSignal<String>,
) -> impl IntoView {
	let outer_class = move || format!("input-group fc-fs-fs {}", class.get());
	let show_label = !label.is_empty();
	let label_for = id.clone();
	let error = Signal::derive(move || error.get());

	view! {
		<div class={outer_class}>
			<Show when={move || show_label}>
				<label class="input-label" for={label_for.clone()}>
					{label.clone()}
				</label>
			</Show>
			<textarea
				id={id.clone()}
				name={id.clone()}
				class="input textbox full-width"
				rows="4"
				placeholder={move || placeholder.get()}
				disabled={move || disabled.get()}
				prop:value={move || value.get()}
				on:input={move |ev| {
					if let Some(on_input) = on_input {
						on_input.call(ev);
					}
				}}
			></textarea>
			<Show when={move || !error.get().is_empty()}>
				<Alert r#type={AlertType::Error} class="mt-xs">
					{move || error.get()}
				</Alert>
			</Show>
		</div>
	}
}
