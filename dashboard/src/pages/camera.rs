use models::api::camera::{Camera, CameraStatus};

use crate::prelude::*;

/// The camera overview, a card per feed. The list is small and unfiltered,
/// so no pagination here.
#[component]
pub fn CamerasDashboard() -> impl IntoView {
	view! {
		<RequireRole allowed={EVENT_VIEWERS}>
			<CamerasGrid/>
		</RequireRole>
	}
}

#[component]
fn CamerasGrid() -> impl IntoView {
	let (state, _) = AuthState::load();

	let cameras = create_local_resource(
		|| (),
		move |()| {
			let access_token = state.with_untracked(AuthState::access_token);
			async move {
				list_cameras(access_token)
					.await
					.map(|response| response.cameras)
			}
		},
	);

	view! {
		<ContainerMain>
			<Title text="Cameras"/>
			<ContainerHead>
				<PageTitleContainer>
					<PageTitle>"Cameras"</PageTitle>
				</PageTitleContainer>
			</ContainerHead>
			<ContainerBody>
				<Transition fallback={|| view! { <Spinner class="mx-auto"/> }}>
					{move || {
						cameras
							.get()
							.map(|cameras| match cameras {
								Ok(cameras) => view! {
									<div class="fr-fs-fs f-wrap gap-md full-width">
										<For
											each={move || cameras.clone()}
											key={|camera| camera.id}
											let:camera
										>
											<CameraCard camera={camera}/>
										</For>
									</div>
								}
								.into_view(),
								Err(error) => view! {
									<Alert r#type={AlertType::Error} class="full-width">
										{error.to_string()}
									</Alert>
								}
								.into_view(),
							})
					}}
				</Transition>
			</ContainerBody>
		</ContainerMain>
	}
}

/// A single camera card, with the feed link when the camera is online.
#[component]
fn CameraCard(
	/// The camera to render
	camera: Camera,
) -> impl IntoView {
	let online = camera.status == CameraStatus::Online;

	view! {
		<div class="fc-fs-fs camera-card p-md gap-sm">
			<h4 class="text-md">{camera.name.clone()}</h4>
			<StatusBadge
				text={camera.status.to_string()}
				color={if online { Color::Success } else { Color::Error }}
			/>
			{if online {
				view! {
					<a
						class="text-sm"
						href={camera.stream_url.clone()}
						target="_blank"
						rel="noreferrer"
					>
						"Open feed"
					</a>
				}
				.into_view()
			} else {
				view! { <p class="text-xs txt-grey">"Feed unavailable"</p> }.into_view()
			}}
		</div>
	}
}
