use codee::string::JsonSerdeCodec;
use leptos_use::{use_websocket, UseWebSocketReturn};
use models::api::notification::PlatformNotification;

use crate::prelude::*;

/// Subscribes to the push notification stream and surfaces every pushed
/// notification as a toast. Mounted once inside the logged in shell; renders
/// nothing itself.
///
/// Messages that fail to decode are dropped by the codec, so an unknown
/// notification type from a newer server never breaks the stream.
#[component]
pub fn NotificationBridge() -> impl IntoView {
	let toaster = expect_toaster();

	let UseWebSocketReturn { message, .. } = use_websocket::<
		PlatformNotification,
		PlatformNotification,
		JsonSerdeCodec,
	>(constants::NOTIFICATION_WS_URL);

	create_effect(move |_| {
		if let Some(notification) = message.get() {
			toaster.toast(
				notification.toast_message(),
				constants::NOTIFICATION_TOAST_DURATION,
			);
		}
	});

	view! { <></> }
}
