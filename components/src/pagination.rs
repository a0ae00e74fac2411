use crate::imports::*;

/// How many page buttons the pagination row shows at most.
const WINDOW_SIZE: usize = 5;

/// The inclusive range of page numbers to render as buttons: a window of up
/// to [`WINDOW_SIZE`] pages centred on the current page and clamped at both
/// boundaries. Pages are one-indexed.
pub fn page_window(current: usize, total_pages: usize) -> std::ops::RangeInclusive<usize> {
	if total_pages == 0 {
		return 1..=0; // empty
	}
	if total_pages <= WINDOW_SIZE {
		return 1..=total_pages;
	}

	let half = WINDOW_SIZE / 2;
	let start = if current <= half + 1 {
		1
	} else if current + half >= total_pages {
		total_pages - (WINDOW_SIZE - 1)
	} else {
		current - half
	};

	start..=(start + WINDOW_SIZE - 1)
}

/// The page button row under a list view. Renders nothing when there is a
/// single page.
#[component]
pub fn Pagination(
	/// The current page, one-indexed
	#[prop(into)]
	page: MaybeSignal<usize>,
	/// The total number of pages for the query
	#[prop(into)]
	total_pages: MaybeSignal<usize>,
	/// Called with the page number the user clicked
	#[prop(into)]
	on_page_change: Callback<usize>,
) -> impl IntoView {
	view! {
		<Show when={move || total_pages.get() > 1}>
			<nav class="pagination fr-ct-ct full-width" aria-label="Pagination">
				<button
					class="btn-plain pagination-btn"
					type="button"
					disabled={move || page.get() <= 1}
					on:click={move |_| on_page_change.call(page.get() - 1)}
				>
					"Previous"
				</button>
				<For
					each={move || page_window(page.get(), total_pages.get())}
					key={|number| *number}
					let:number
				>
					<button
						class={move || {
							if page.get() == number {
								"btn-plain pagination-btn current"
							} else {
								"btn-plain pagination-btn"
							}
						}}
						type="button"
						on:click={move |_| on_page_change.call(number)}
					>
						{number}
					</button>
				</For>
				<button
					class="btn-plain pagination-btn"
					type="button"
					disabled={move || page.get() >= total_pages.get()}
					on:click={move |_| on_page_change.call(page.get() + 1)}
				>
					"Next"
				</button>
			</nav>
		</Show>
	}
}

#[cfg(test)]
mod test {
	use super::page_window;

	#[test]
	fn few_pages_show_everything() {
		assert_eq!(page_window(1, 1), 1..=1);
		assert_eq!(page_window(2, 3), 1..=3);
		assert_eq!(page_window(5, 5), 1..=5);
	}

	#[test]
	fn window_is_centred_in_the_middle() {
		assert_eq!(page_window(10, 20), 8..=12);
		assert_eq!(page_window(4, 20), 2..=6);
	}

	#[test]
	fn window_is_clamped_at_the_start() {
		assert_eq!(page_window(1, 20), 1..=5);
		assert_eq!(page_window(2, 20), 1..=5);
		assert_eq!(page_window(3, 20), 1..=5);
	}

	#[test]
	fn window_is_clamped_at_the_end() {
		assert_eq!(page_window(20, 20), 16..=20);
		assert_eq!(page_window(19, 20), 16..=20);
		assert_eq!(page_window(18, 20), 16..=20);
	}

	#[test]
	fn no_pages_yields_an_empty_window() {
		assert!(page_window(1, 0).is_empty());
	}
}
