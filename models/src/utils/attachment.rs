use std::fmt::{Display, Formatter};

/// The maximum number of files that can be attached to a single report.
pub const MAX_ATTACHMENTS: usize = 5;

/// The maximum size of a single attachment, in bytes (10 MiB).
pub const MAX_ATTACHMENT_SIZE: u64 = 10 * 1024 * 1024;

/// The content types a report attachment may have. Anything else is rejected
/// client-side before an upload is even attempted.
pub const ALLOWED_ATTACHMENT_TYPES: &[&str] = &[
	"image/jpeg",
	"image/png",
	"image/gif",
	"image/webp",
	"video/mp4",
	"video/webm",
	"video/quicktime",
];

/// Why a selected file (or batch of files) was not staged. Each rejection
/// carries enough context for a per-file message; rejecting one file never
/// affects the other files in the same selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
	/// The file is larger than [`MAX_ATTACHMENT_SIZE`]
	TooLarge {
		/// The name of the offending file
		file_name: String,
	},
	/// The file's content type is not in [`ALLOWED_ATTACHMENT_TYPES`]
	UnsupportedType {
		/// The name of the offending file
		file_name: String,
	},
	/// The selection as a whole would push the total past
	/// [`MAX_ATTACHMENTS`]. The whole new batch is rejected and the existing
	/// selection is left untouched.
	QuotaExceeded {
		/// How many files were selected in this batch
		selected: usize,
		/// How many more files the quota still allows
		remaining: usize,
	},
}

impl Display for FileRejection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::TooLarge { file_name } => {
				write!(f, "{file_name} is larger than 10MB and was not added")
			}
			Self::UnsupportedType { file_name } => {
				write!(f, "{file_name} is not a supported image or video type")
			}
			Self::QuotaExceeded {
				selected,
				remaining,
			} => {
				write!(
					f,
					"You selected {selected} files but only {remaining} more can be attached \
					 (maximum {MAX_ATTACHMENTS})"
				)
			}
		}
	}
}

/// Checks a single file against the size limit and the content type
/// allow-list.
pub fn check_file(file_name: &str, size: u64, content_type: &str) -> Result<(), FileRejection> {
	if size > MAX_ATTACHMENT_SIZE {
		return Err(FileRejection::TooLarge {
			file_name: file_name.to_string(),
		});
	}
	if !ALLOWED_ATTACHMENT_TYPES.contains(&content_type) {
		return Err(FileRejection::UnsupportedType {
			file_name: file_name.to_string(),
		});
	}
	Ok(())
}

/// Checks whether a new batch of `selected` files fits in the quota given how
/// many files are `already_staged`. A batch that does not fit is rejected as
/// a whole, before any per-file checks run.
pub fn check_batch_quota(already_staged: usize, selected: usize) -> Result<(), FileRejection> {
	let remaining = MAX_ATTACHMENTS.saturating_sub(already_staged);
	if selected > remaining {
		return Err(FileRejection::QuotaExceeded {
			selected,
			remaining,
		});
	}
	Ok(())
}

/// Whether the content type gets an image thumbnail preview.
pub fn is_image(content_type: &str) -> bool {
	content_type.starts_with("image/")
}

/// Whether the content type gets the video placeholder preview.
pub fn is_video(content_type: &str) -> bool {
	content_type.starts_with("video/")
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn size_limit_is_inclusive() {
		assert_eq!(check_file("a.png", MAX_ATTACHMENT_SIZE, "image/png"), Ok(()));
		assert_eq!(
			check_file("a.png", MAX_ATTACHMENT_SIZE + 1, "image/png"),
			Err(FileRejection::TooLarge {
				file_name: "a.png".to_string()
			})
		);
	}

	#[test]
	fn unknown_content_types_are_rejected() {
		assert_eq!(
			check_file("notes.pdf", 100, "application/pdf"),
			Err(FileRejection::UnsupportedType {
				file_name: "notes.pdf".to_string()
			})
		);
		assert_eq!(check_file("clip.webm", 100, "video/webm"), Ok(()));
	}

	#[test]
	fn oversized_file_is_checked_before_its_type() {
		// a file that is both too large and the wrong type reports its size
		assert_eq!(
			check_file("big.pdf", MAX_ATTACHMENT_SIZE + 1, "application/pdf"),
			Err(FileRejection::TooLarge {
				file_name: "big.pdf".to_string()
			})
		);
	}

	#[test]
	fn batch_over_quota_is_rejected_whole() {
		assert_eq!(check_batch_quota(3, 2), Ok(()));
		assert_eq!(
			check_batch_quota(3, 3),
			Err(FileRejection::QuotaExceeded {
				selected: 3,
				remaining: 2,
			})
		);
		assert_eq!(
			check_batch_quota(MAX_ATTACHMENTS, 1),
			Err(FileRejection::QuotaExceeded {
				selected: 1,
				remaining: 0,
			})
		);
	}

	#[test]
	fn preview_kind_follows_the_content_type() {
		assert!(is_image("image/jpeg"));
		assert!(!is_image("video/mp4"));
		assert!(is_video("video/quicktime"));
		assert!(!is_video("image/png"));
	}
}
