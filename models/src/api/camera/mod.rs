use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use uuid::Uuid;

use crate::api::ApiEndpoint;

/// Whether a camera is currently streaming.
#[derive(
	Eq,
	Copy,
	Hash,
	Debug,
	Clone,
	Default,
	EnumIter,
	PartialEq,
	Serialize,
	EnumString,
	Deserialize,
	StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
	/// The camera is streaming
	Online,
	/// The camera is not reachable
	#[default]
	Offline,
}

/// A camera feed belonging to a company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
	/// The id of the camera
	pub id: Uuid,
	/// The display name of the camera ("north gate", etc)
	pub name: String,
	/// The URL the feed is served from
	pub stream_url: String,
	/// Whether the camera is currently streaming
	pub status: CameraStatus,
	/// The company the camera belongs to
	pub company_id: Uuid,
}

/// The path for the camera list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCamerasPath;

impl Display for ListCamerasPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/camera")
	}
}

/// The cameras visible to the caller, unpaginated. Operators only see their
/// own company's cameras.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListCamerasResponse {
	/// The visible cameras
	pub cameras: Vec<Camera>,
}

/// Route to list the camera feeds visible to the caller.
pub struct ListCameras;

impl ApiEndpoint for ListCameras {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListCamerasPath;
	type RequestQuery = ();
	type ResponseBody = ListCamerasResponse;
}
