use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

/// A marker type that only serializes to, and only deserializes from, the
/// boolean `false`. Used for the `success` field of error responses so that
/// the envelope can be told apart at the type level.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct False;

/// A marker type that only serializes to, and only deserializes from, the
/// boolean `true`. Used for the `success` field of success responses.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct True;

impl<'de> Deserialize<'de> for False {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if !bool::deserialize(deserializer)? {
			Ok(False)
		} else {
			Err(D::Error::custom("bool is not false"))
		}
	}
}

impl<'de> Deserialize<'de> for True {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if bool::deserialize(deserializer)? {
			Ok(True)
		} else {
			Err(D::Error::custom("bool is not true"))
		}
	}
}

impl Serialize for False {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_bool(false)
	}
}

impl Serialize for True {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_bool(true)
	}
}
