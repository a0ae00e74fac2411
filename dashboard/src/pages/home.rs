use crate::prelude::*;

/// A quick link card on the landing page.
struct QuickLink {
	/// The heading of the card
	title: &'static str,
	/// The one-line description under the heading
	description: &'static str,
	/// Where the card links to
	route: LoggedInRoute,
}

/// The landing page. Shows a card per area the current role can reach, so
/// citizens land on report submission while operators land on the live
/// workload.
#[component]
pub fn HomePage() -> impl IntoView {
	let (state, _) = AuthState::load();

	let cards = create_memo(move |_| {
		let Some(role) = state.with(AuthState::role) else {
			return Vec::new();
		};

		let mut cards = vec![QuickLink {
			title: "Submit a report",
			description: "Report an incident, with photos and a location",
			route: LoggedInRoute::SubmitReport,
		}];
		cards.push(QuickLink {
			title: "My reports",
			description: "Track the reports you have submitted",
			route: LoggedInRoute::Reports,
		});
		if role.can(Capability::ViewEvents) {
			cards.push(QuickLink {
				title: "Events",
				description: "The live incident workload",
				route: LoggedInRoute::Events,
			});
		}
		if role.can(Capability::ViewCameras) {
			cards.push(QuickLink {
				title: "Cameras",
				description: "Live camera feeds",
				route: LoggedInRoute::Cameras,
			});
		}
		if role.can(Capability::ManageUsers) {
			cards.push(QuickLink {
				title: "Users",
				description: "Manage accounts and roles",
				route: LoggedInRoute::Users,
			});
		}
		if role.can(Capability::ManageAllCompanies) {
			cards.push(QuickLink {
				title: "Companies",
				description: "Manage every company on the platform",
				route: LoggedInRoute::Companies,
			});
		}
		cards
			.into_iter()
			.map(|card| (card.title, card.description, card.route.path()))
			.collect::<Vec<_>>()
	});

	view! {
		<ContainerMain>
			<Title text="Home"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Welcome"</PageTitle>
				</PageTitleContainer>
			</ContainerHead>
			<ContainerBody class="fr-fs-fs gap-md">
				<For
					each={move || cards.get()}
					key={|(title, ..)| *title}
					let:card
				>
					{
						let (title, description, path) = card;
						view! {
							<a href={path} class="card fc-fs-fs p-md">
								<h3 class="text-md">{title}</h3>
								<p class="text-sm txt-grey">{description}</p>
							</a>
						}
					}
				</For>
			</ContainerBody>
		</ContainerMain>
	}
}
