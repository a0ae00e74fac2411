//! Browser console for the event monitoring platform.

use leptos::mount_to_body;

/// Main function. Called when the application is started.
pub fn main() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(dashboard::render);
}
