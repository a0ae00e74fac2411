use std::rc::Rc;

use leptos_use::{use_geolocation_with_options, UseGeolocationOptions, UseGeolocationReturn};

use crate::prelude::*;

/// The device location as seen by the report submission form.
#[derive(Clone)]
pub struct DeviceLocation {
	/// The last known coordinates, once the browser has produced any
	pub coords: Signal<Option<GeoLocation>>,
	/// The display message of the last geolocation failure, if any
	pub error: Signal<Option<String>>,
	/// Starts watching the device location. Reading the location is opt-in,
	/// so the permission prompt only appears once the user asks for it
	pub locate: Rc<dyn Fn()>,
}

/// Watches the device location with high accuracy, a 10 second timeout and
/// positions cached for at most a minute. Nothing happens until
/// [`DeviceLocation::locate`] is called.
pub fn use_device_location() -> DeviceLocation {
	let UseGeolocationReturn {
		coords,
		error,
		resume,
		..
	} = use_geolocation_with_options(
		UseGeolocationOptions::default()
			.immediate(false)
			.enable_high_accuracy(true)
			.timeout(10_000)
			.maximum_age(60_000),
	);

	let coords = Signal::derive(move || {
		coords.with(|coords| {
			coords.as_ref().map(|coords| GeoLocation {
				latitude: coords.latitude(),
				longitude: coords.longitude(),
			})
		})
	});

	let error = Signal::derive(move || {
		error.with(|error| {
			error
				.as_ref()
				.map(|error| geolocation_error_message(error.code()).to_string())
		})
	});

	DeviceLocation {
		coords,
		error,
		locate: Rc::new(resume),
	}
}

/// Parses a manually entered coordinate pair and checks it against the
/// coordinate bounds. A latitude that does not parse reports the latitude
/// error, same for longitude; the bounds check runs on the parsed pair.
pub fn parse_coordinates(latitude: &str, longitude: &str) -> Result<GeoLocation, CoordinateError> {
	let latitude = latitude
		.trim()
		.parse::<f64>()
		.map_err(|_| CoordinateError::LatitudeOutOfRange)?;
	let longitude = longitude
		.trim()
		.parse::<f64>()
		.map_err(|_| CoordinateError::LongitudeOutOfRange)?;
	GeoLocation {
		latitude,
		longitude,
	}
	.validate()
}

/// Maps a `GeolocationPositionError` code to the message shown next to the
/// location field. Each failure mode gets its own wording so the user knows
/// whether to fix permissions or just retry.
pub fn geolocation_error_message(code: u16) -> &'static str {
	match code {
		1 => "Location access was denied. Enable it in the browser settings to attach a location",
		2 => "The device location is currently unavailable",
		3 => "Reading the device location timed out. Try again",
		_ => "Could not read the device location",
	}
}

#[cfg(test)]
mod test {
	use models::prelude::*;

	use super::{geolocation_error_message, parse_coordinates};

	#[test]
	fn coordinates_are_accepted_iff_within_bounds() {
		assert_eq!(
			parse_coordinates("48.8566", "2.3522"),
			Ok(GeoLocation {
				latitude: 48.8566,
				longitude: 2.3522,
			})
		);
		assert_eq!(
			parse_coordinates("91", "0"),
			Err(CoordinateError::LatitudeOutOfRange)
		);
		assert_eq!(
			parse_coordinates("0", "-180.5"),
			Err(CoordinateError::LongitudeOutOfRange)
		);
	}

	#[test]
	fn unparseable_input_maps_to_the_matching_field() {
		assert_eq!(
			parse_coordinates("north", "0"),
			Err(CoordinateError::LatitudeOutOfRange)
		);
		assert_eq!(
			parse_coordinates("0", "east"),
			Err(CoordinateError::LongitudeOutOfRange)
		);
	}

	#[test]
	fn each_failure_mode_gets_its_own_message() {
		let messages = [
			geolocation_error_message(1),
			geolocation_error_message(2),
			geolocation_error_message(3),
		];
		assert!(messages[0].contains("denied"));
		assert!(messages[2].contains("timed out"));
		assert_ne!(messages[0], messages[1]);
		assert_ne!(messages[1], messages[2]);
	}
}
