use crate::prelude::*;

/// The optional location fieldset shared by the event form and the report
/// form. The user either reads the device location or types coordinates by
/// hand; both paths are validated against the same bounds, and an
/// out-of-range pair leaves the chosen location untouched.
#[component]
pub fn LocationPicker(
	/// The chosen location. Written only with a validated pair, or cleared
	location: RwSignal<Option<GeoLocation>>,
	/// Whether the surrounding form is busy
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
) -> impl IntoView {
	let latitude = create_rw_signal("".to_owned());
	let longitude = create_rw_signal("".to_owned());
	let error = create_rw_signal("".to_owned());

	let device = use_device_location();

	// a device fix fills the manual fields and the chosen location alike
	let device_coords = device.coords;
	create_effect(move |_| {
		if let Some(coords) = device_coords.get() {
			latitude.set(coords.latitude.to_string());
			longitude.set(coords.longitude.to_string());
			location.set(Some(coords));
			error.set("".to_owned());
		}
	});
	let device_error = device.error;
	create_effect(move |_| {
		if let Some(message) = device_error.get() {
			error.set(message);
		}
	});

	let on_apply = {
		move |_| match parse_coordinates(&latitude.get_untracked(), &longitude.get_untracked()) {
			Ok(coords) => {
				location.set(Some(coords));
				error.set("".to_owned());
			}
			Err(coordinate_error) => {
				error.set(coordinate_error.to_string());
			}
		}
	};

	let on_locate = {
		let locate = device.locate.clone();
		move |_| {
			error.set("".to_owned());
			locate();
		}
	};

	let on_clear = move |_| {
		latitude.set("".to_owned());
		longitude.set("".to_owned());
		location.set(None);
		error.set("".to_owned());
	};

	view! {
		<fieldset class="fc-fs-fs full-width gap-sm">
			<legend class="input-label">"Location (optional)"</legend>
			<div class="fr-fs-fs gap-md full-width">
				<Input
					id="latitude"
					r#type={InputType::Number}
					placeholder="Latitude"
					disabled={disabled}
					value={latitude}
					on_input={Callback::new(move |ev: ev::Event| {
						latitude.set(event_target_value(&ev))
					})}
				/>
				<Input
					id="longitude"
					r#type={InputType::Number}
					placeholder="Longitude"
					disabled={disabled}
					value={longitude}
					on_input={Callback::new(move |ev: ev::Event| {
						longitude.set(event_target_value(&ev))
					})}
				/>
			</div>
			<div class="fr-fs-ct gap-sm">
				<Link r#type={Variant::Button} on_click={Callback::new(on_apply)}>
					"Use these coordinates"
				</Link>
				<Link r#type={Variant::Button} on_click={Callback::new(on_locate)}>
					"Use my location"
				</Link>
				<Link r#type={Variant::Button} on_click={Callback::new(on_clear)}>
					"Clear"
				</Link>
			</div>
			<Show when={move || !error.get().is_empty()}>
				<Alert r#type={AlertType::Error}>{move || error.get()}</Alert>
			</Show>
			<Show when={move || location.get().is_some()}>
				<p class="text-xs txt-success">
					{move || {
						location
							.get()
							.map(|location| {
								format!(
									"Attached location: {}, {}",
									location.latitude,
									location.longitude,
								)
							})
							.unwrap_or_default()
					}}
				</p>
			</Show>
		</fieldset>
	}
}
