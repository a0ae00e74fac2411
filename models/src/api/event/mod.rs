use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::utils::GeoLocation;

/// Create a new event.
mod create_event;
/// Get one event by id.
mod get_event_info;
/// List events with filters and pagination.
mod list_events;
/// Update an existing event.
mod update_event;

pub use self::{create_event::*, get_event_info::*, list_events::*, update_event::*};

/// How urgent an event is. Drives the badge colour in the list views and the
/// ordering the backend applies.
#[derive(
	Eq,
	Copy,
	Hash,
	Debug,
	Clone,
	Display,
	Default,
	EnumIter,
	PartialEq,
	Serialize,
	EnumString,
	Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventPriority {
	/// Informational, no action needed
	Low,
	/// Should be looked at during the shift
	#[default]
	Medium,
	/// Needs attention soon
	High,
	/// Needs immediate attention
	Critical,
}

/// An operator-created record of a monitored incident. Events are owned by
/// the API; the console never mutates one without a round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	/// The id of the event
	pub id: Uuid,
	/// The short title shown in lists
	pub title: String,
	/// The full description of the incident
	pub description: String,
	/// How urgent the event is
	pub priority: EventPriority,
	/// The event type this event is classified under
	pub event_type_id: Uuid,
	/// Where the incident happened, if known
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<GeoLocation>,
	/// A free-text description of the location ("north gate", etc)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location_details: Option<String>,
	/// Free-text operator notes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	/// When the event was created
	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,
	/// When the event was last updated
	#[serde(with = "time::serde::rfc3339")]
	pub last_updated: OffsetDateTime,
}
