use crate::imports::*;

/// A blocking modal dialog over a backdrop. Nothing behind it is clickable
/// while it is open; the page decides when to open and close it.
#[component]
pub fn Modal(
	/// Whether the modal is shown
	#[prop(into)]
	open: MaybeSignal<bool>,
	/// The title of the dialog
	#[prop(into)]
	title: String,
	/// Called when the user clicks the backdrop or the close button
	#[prop(into)]
	on_close: Callback<()>,
	/// The content of the dialog
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<Show when={move || open.get()}>
			<div class="modal-backdrop" on:click={move |_| on_close.call(())}>
				<div
					class="modal fc-fs-fs"
					role="dialog"
					on:click={|ev| ev.stop_propagation()}
				>
					<div class="fr-sb-ct full-width modal-head">
						<h3 class="text-md">{title.clone()}</h3>
						<button
							class="btn-plain"
							type="button"
							aria-label="Close"
							on:click={move |_| on_close.call(())}
						>
							"×"
						</button>
					</div>
					{children()}
				</div>
			</div>
		</Show>
	}
}
