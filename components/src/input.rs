use crate::imports::*;

/// The kind of single-line input to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputType {
	/// The default value. A single-line text field.
	#[default]
	Text,
	/// A field for editing an email address.
	Email,
	/// A single-line text field whose value is obscured.
	Password,
	/// A control for entering a number.
	Number,
	/// A file picker.
	File,
}

impl InputType {
	/// The value of the `type` attribute for this kind of input.
	pub const fn as_html_attribute(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Password => "password",
			Self::Number => "number",
			Self::File => "file",
		}
	}
}

/// A labelled single-line input with an optional field-scoped error line.
#[component]
pub fn Input(
	/// The name and id of the input
	#[prop(into)]
	id: String,
	/// The type of input
	#[prop(into, optional)]
	r#type: MaybeSignal<InputType>,
	/// Additional classnames to apply to the outer div, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// Placeholder text for the input
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// Whether the input is disabled
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Label for the input; an empty string doesn't render the label
	#[prop(into, optional, default = "".into())]
	label: String,
	/// The value of the input
	#[prop(into, optional)]
	value: MaybeSignal<String>,
	/// Input event handler
	#[prop(into, optional)]
	on_input: Option<Callback<ev::Event>>,
	/// The field-scoped error to render under the input, if any. An empty
	/// string renders nothing.
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
			<input
				id={id.clone()}
				name={id.clone()}
				class="input full-width"
				type={move || r#type.get().as_html_attribute()}
				placeholder={move || placeholder.get()}
				disabled={move || disabled.get()}
				prop:value={move || value.get()}
				on:input={move |ev| {
					if let Some(on_input) = on_input {
						on_input.call(ev);
					}
				}}
			/>
			<Show when={move || !error.get().is_empty()}>
				<Alert r#type={AlertType::Error} class="mt-xs">
					{move || error.get()}
				</Alert>
			</Show>
		</div>
	}
}
