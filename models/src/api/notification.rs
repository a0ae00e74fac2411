use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A push notification delivered over the websocket channel. These only ever
/// drive toast messages; list views are not live-updated by them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum PlatformNotification {
	/// An operator created a new event
	#[serde(rename_all = "camelCase")]
	EventCreated {
		/// The id of the new event
		id: Uuid,
		/// The title of the new event
		title: String,
	},
	/// A citizen submitted a new report
	#[serde(rename_all = "camelCase")]
	ReportCreated {
		/// The id of the new report
		id: Uuid,
		/// The title of the new report
		title: String,
	},
}

impl PlatformNotification {
	/// The toast text shown for this notification.
	pub fn toast_message(&self) -> String {
		match self {
			Self::EventCreated { title, .. } => format!("New event: {title}"),
			Self::ReportCreated { title, .. } => format!("New report: {title}"),
		}
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;
	use uuid::Uuid;

	use super::PlatformNotification;

	#[test]
	fn notifications_are_tagged_by_type() {
		let parsed: PlatformNotification = serde_json::from_value(json!({
			"type": "reportCreated",
			"id": Uuid::nil(),
			"title": "Broken light",
		}))
		.unwrap();
		assert_eq!(
			parsed,
			PlatformNotification::ReportCreated {
				id: Uuid::nil(),
				title: "Broken light".to_string(),
			}
		);
		assert_eq!(parsed.toast_message(), "New report: Broken light");
	}
}
