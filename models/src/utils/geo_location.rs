use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A geo point attached to an event or report. Longitude and latitude are
/// plain degrees, positive east and north respectively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct GeoLocation {
	/// The latitude of the location, in degrees. Valid values lie in
	/// [-90, 90].
	pub latitude: f64,
	/// The longitude of the location, in degrees. Valid values lie in
	/// [-180, 180].
	pub longitude: f64,
}

impl GeoLocation {
	/// The inclusive latitude bounds accepted anywhere in the console.
	pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
	/// The inclusive longitude bounds accepted anywhere in the console.
	pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

	/// Checks the coordinates against the valid bounds. Latitude is checked
	/// first, so a point that is out of range on both axes reports the
	/// latitude error.
	pub fn validate(self) -> Result<Self, CoordinateError> {
		let (lat_min, lat_max) = Self::LATITUDE_RANGE;
		let (lng_min, lng_max) = Self::LONGITUDE_RANGE;

		if !self.latitude.is_finite() || self.latitude < lat_min || self.latitude > lat_max {
			return Err(CoordinateError::LatitudeOutOfRange);
		}
		if !self.longitude.is_finite() || self.longitude < lng_min || self.longitude > lng_max {
			return Err(CoordinateError::LongitudeOutOfRange);
		}
		Ok(self)
	}
}

/// The ways a manually entered or device-provided coordinate pair can be
/// invalid. Each maps to a field-scoped message in the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
	/// The latitude is outside [-90, 90] or not a number
	LatitudeOutOfRange,
	/// The longitude is outside [-180, 180] or not a number
	LongitudeOutOfRange,
}

impl Display for CoordinateError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::LatitudeOutOfRange => "Latitude must be between -90 and 90",
				Self::LongitudeOutOfRange => "Longitude must be between -180 and 180",
			}
		)
	}
}

#[cfg(test)]
mod test {
	use super::{CoordinateError, GeoLocation};

	fn point(latitude: f64, longitude: f64) -> GeoLocation {
		GeoLocation {
			latitude,
			longitude,
		}
	}

	#[test]
	fn bounds_are_inclusive() {
		assert!(point(90.0, 180.0).validate().is_ok());
		assert!(point(-90.0, -180.0).validate().is_ok());
		assert!(point(0.0, 0.0).validate().is_ok());
	}

	#[test]
	fn out_of_range_latitude_is_rejected() {
		assert_eq!(
			point(90.0001, 0.0).validate(),
			Err(CoordinateError::LatitudeOutOfRange)
		);
		assert_eq!(
			point(-91.0, 0.0).validate(),
			Err(CoordinateError::LatitudeOutOfRange)
		);
	}

	#[test]
	fn out_of_range_longitude_is_rejected() {
		assert_eq!(
			point(0.0, 180.5).validate(),
			Err(CoordinateError::LongitudeOutOfRange)
		);
		assert_eq!(
			point(0.0, -200.0).validate(),
			Err(CoordinateError::LongitudeOutOfRange)
		);
	}

	#[test]
	fn non_finite_values_are_rejected() {
		assert!(point(f64::NAN, 0.0).validate().is_err());
		assert!(point(0.0, f64::INFINITY).validate().is_err());
	}

	#[test]
	fn latitude_error_wins_when_both_axes_are_invalid() {
		assert_eq!(
			point(100.0, 200.0).validate(),
			Err(CoordinateError::LatitudeOutOfRange)
		);
	}
}
