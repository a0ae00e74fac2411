/// Whether a [`crate::link::Link`] renders as an anchor or a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
	/// Render a `<button>`
	#[default]
	Button,
	/// Render an `<a>`
	Link,
}

/// How a [`crate::link::Link`] is styled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkStyleVariant {
	/// Plain text styling
	#[default]
	Plain,
	/// A filled button
	Contained,
}

/// The tone of an [`crate::alert::Alert`] banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertType {
	/// A red error banner
	#[default]
	Error,
	/// A green success banner
	Success,
	/// A yellow warning banner
	Warning,
}

impl AlertType {
	/// The CSS class suffix for this tone.
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Success => "success",
			Self::Warning => "warning",
		}
	}
}
