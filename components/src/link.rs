use crate::imports::*;

/// A navigation link or a button, styled the same way. Pages use the button
/// variant for actions and the link variant for navigation, so that the two
/// stay visually interchangeable.
#[component]
pub fn Link(
	/// The target of the link. Only used by the link variant.
	#[prop(into, optional)]
	to: MaybeSignal<String>,
	/// Click handler, only used with the button variant
	#[prop(into, optional)]
	on_click: Option<Callback<ev::MouseEvent>>,
	/// Whether the button submits the surrounding form
	#[prop(optional)]
	should_submit: bool,
	/// Whether the link or button is disabled
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Additional class names to apply to the link, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// Colour of the link
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// Whether to render an anchor or a button
	#[prop(into, optional)]
	r#type: MaybeSignal<Variant>,
	/// How the link is styled
	#[prop(into, optional)]
	style_variant: MaybeSignal<LinkStyleVariant>,
	/// The content of the link, usually the link text
	children: ChildrenFn,
) -> impl IntoView {
	let to = Signal::derive(move || to.get());
	let class = Signal::derive(move || {
		format!(
			"fr-ct-ct {} {}",
			if style_variant.get() == LinkStyleVariant::Contained {
				format!("btn btn-{}", color.get())
			} else {
				format!("btn-plain txt-{}", color.get())
			},
			class.get()
		)
	});

	view! {
		{move || match r#type.get() {
			Variant::Button => view! {
				<button
					class={class}
					disabled={move || disabled.get()}
					type={if should_submit { "submit" } else { "button" }}
					on:click={move |ev| {
						if let Some(on_click) = on_click {
							on_click.call(ev);
						}
					}}
				>
					{children()}
				</button>
			}
			.into_view(),
			Variant::Link => view! {
				<a class={class} href={move || to.get()}>
					{children()}
				</a>
			}
			.into_view(),
		}}
	}
}
