/// Spacing and icon sizes, mapped onto the stylesheet's size scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
	/// The smallest size on the scale
	ExtraSmall,
	/// A small size
	Small,
	/// The default size
	#[default]
	Medium,
	/// A large size
	Large,
	/// The largest size on the scale
	ExtraLarge,
}

impl Size {
	/// The CSS class suffix for this size.
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::ExtraSmall => "xs",
			Self::Small => "sm",
			Self::Medium => "md",
			Self::Large => "lg",
			Self::ExtraLarge => "xl",
		}
	}
}
