/// The colour variants the stylesheet ships. Used by badges, buttons and
/// alerts; the CSS class is derived from the variant name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Color {
	/// The accent colour of the console
	#[default]
	Primary,
	/// Muted grey for secondary actions
	Secondary,
	/// Green, for success and active states
	Success,
	/// Yellow, for pending and warning states
	Warning,
	/// Red, for errors and rejected states
	Error,
	/// Plain white text
	White,
	/// Plain black text
	Black,
}

impl Color {
	/// The CSS class suffix for this colour.
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Error => "error",
			Self::White => "white",
			Self::Black => "black",
		}
	}
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_css_name())
	}
}
