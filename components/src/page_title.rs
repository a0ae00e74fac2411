use crate::imports::*;

/// Whether a [`PageTitle`] is the main heading or a sub heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageTitleVariant {
	/// The main heading of the page
	#[default]
	Heading,
	/// A smaller heading under the main one
	SubHeading,
}

/// Groups the headings at the top of a page.
#[component]
pub fn PageTitleContainer(
	/// The headings of the page
	children: Children,
) -> impl IntoView {
	view! {
		<div class="fr-fs-bl page-title-container">
			{children()}
		</div>
	}
}

/// One heading line of a page.
#[component]
pub fn PageTitle(
	/// Whether this is the main heading or a sub heading
	#[prop(optional)]
	variant: PageTitleVariant,
	/// The text of the heading
	children: Children,
) -> impl IntoView {
	match variant {
		PageTitleVariant::Heading => view! {
			<h1 class="page-title text-xl">{children()}</h1>
		}
		.into_view(),
		PageTitleVariant::SubHeading => view! {
			<h2 class="page-title text-md txt-secondary">{children()}</h2>
		}
		.into_view(),
	}
}

/// The one-line description under the page headings.
#[component]
pub fn PageDescription(
	/// The description of the page
	#[prop(into)]
	description: String,
) -> impl IntoView {
	view! {
		<p class="page-description txt-secondary">{description}</p>
	}
}
