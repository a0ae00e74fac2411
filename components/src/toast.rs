use crate::imports::*;

/// A transient notification card in the toast stack. The owner of the stack
/// decides when it disappears.
#[component]
pub fn Toast(
	/// The message of the toast
	#[prop(into)]
	message: String,
	/// Called when the user dismisses the toast
	#[prop(into)]
	on_dismiss: Callback<()>,
) -> impl IntoView {
	view! {
		<div class="toast fr-sb-ct" role="status">
			<p class="text-sm">{message}</p>
			<button
				class="btn-plain"
				type="button"
				aria-label="Dismiss"
				on:click={move |_| on_dismiss.call(())}
			>
				"×"
			</button>
		</div>
	}
}

/// The fixed container the toasts stack inside.
#[component]
pub fn ToastContainer(
	/// The toasts to show, newest last
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<div class="toast-container fc-fs-fe">{children()}</div>
	}
}
