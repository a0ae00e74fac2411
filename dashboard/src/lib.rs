//! Browser console for the event monitoring platform. Compiled to WASM and
//! rendered entirely on the client.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use components::prelude::*;
	pub use leptos::*;
	pub use leptos_meta::Title;
	pub use log::{debug, error, info, trace, warn};
	pub use models::prelude::*;

	pub use crate::{api::*, components::*, routes::*, utils::*};
}

use leptos_meta::provide_meta_context;
use prelude::*;

/// The API module. Thin async wrappers around the typed endpoints, one
/// function per operation.
pub mod api;
/// The application logic code. This contains the routers and all the routing
/// logic.
pub mod app;
/// Components that are specific to this console and carry state, unlike the
/// presentation-only ones in the components crate.
pub mod components;
/// The pages module. This contains all the pages used in the application.
/// Pages are the main views that are rendered when a route is matched.
pub mod pages;
/// The typed route table of the console.
pub mod routes;
/// The utils module. This contains the session store, the request client and
/// other things needed to make the application work.
pub mod utils;

/// The main render function. Called when the application starts to render
/// from the client side.
pub fn render() -> impl IntoView {
	use app::App;

	provide_meta_context();
	view! {
		<>
			<Title formatter={|title: String| {
				if title.is_empty() {
					"Event Monitor".to_string()
				} else {
					format!("{title} | Event Monitor")
				}
			}}/>

			<App/>
		</>
	}
}
