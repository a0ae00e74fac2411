use std::sync::atomic::{AtomicU64, Ordering};

use models::utils::{check_batch_quota, check_file, is_image};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::prelude::*;

/// The id the next staged attachment gets. Ids stay unique for the lifetime
/// of the page, so two selected files with the same name never collide.
static NEXT_STAGED_ID: AtomicU64 = AtomicU64::new(0);

/// A file the reporter has selected, validated and queued for upload. The
/// data URL is filled in asynchronously once the browser has read the file;
/// images use it as their preview thumbnail, videos get a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedAttachment {
	/// The id of this staging entry
	pub id: u64,
	/// The original file name
	pub file_name: String,
	/// The content type reported by the browser
	pub content_type: String,
	/// The size of the file in bytes
	pub size: u64,
	/// The file content as a data URL, once read
	pub data_url: RwSignal<Option<String>>,
}

impl StagedAttachment {
	/// Whether the preview should render the data URL as an image.
	pub fn has_image_preview(&self) -> bool {
		is_image(&self.content_type)
	}

	/// The wire shape of this attachment, once its content has been read.
	pub fn as_upload(&self) -> Option<AttachmentUpload> {
		self.data_url.get_untracked().map(|data| AttachmentUpload {
			file_name: self.file_name.clone(),
			content_type: self.content_type.clone(),
			data,
		})
	}
}

/// Whether any staged attachment is still waiting for its read to finish.
/// Submission is held until this clears, so an unread file is never dropped
/// from the upload.
pub fn reads_pending(staged: &[StagedAttachment]) -> bool {
	staged
		.iter()
		.any(|attachment| attachment.data_url.get().is_none())
}

/// Validates a fresh selection against the attachment policy and stages the
/// files that pass. The whole batch is rejected when it would push the total
/// past the quota; otherwise each file is checked on its own, so one
/// oversized file never blocks its siblings. Returns the display messages of
/// everything that was rejected.
pub fn stage_files(
	staged: RwSignal<Vec<StagedAttachment>>,
	files: &web_sys::FileList,
) -> Vec<String> {
	let selected = files.length() as usize;
	if let Err(rejection) = check_batch_quota(staged.with_untracked(Vec::len), selected) {
		return vec![rejection.to_string()];
	}

	let mut rejections = Vec::new();
	for index in 0..files.length() {
		let Some(file) = files.item(index) else {
			continue;
		};
		let file_name = file.name();
		let content_type = file.type_();
		let size = file.size() as u64;

		if let Err(rejection) = check_file(&file_name, size, &content_type) {
			rejections.push(rejection.to_string());
			continue;
		}

		let attachment = StagedAttachment {
			id: NEXT_STAGED_ID.fetch_add(1, Ordering::Relaxed),
			file_name,
			content_type,
			size,
			data_url: create_rw_signal(None),
		};
		read_as_data_url(&file, attachment.data_url);
		staged.update(|staged| staged.push(attachment));
	}
	rejections
}

/// Reads the file in the background and writes the resulting data URL into
/// the given signal.
fn read_as_data_url(file: &web_sys::File, data_url: RwSignal<Option<String>>) {
	let Ok(reader) = web_sys::FileReader::new() else {
		error!("cannot create a FileReader");
		return;
	};

	let result_reader = reader.clone();
	let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
		if let Some(text) = result_reader.result().ok().and_then(|value| value.as_string()) {
			data_url.set(Some(text));
		}
	});
	reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
	// the closure must outlive the read
	onloadend.forget();

	if let Err(error) = reader.read_as_data_url(file) {
		error!("cannot read attachment: {:?}", error);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn staged(id: u64, file_name: &str, data_url: Option<&str>) -> StagedAttachment {
		StagedAttachment {
			id,
			file_name: file_name.to_owned(),
			content_type: "image/png".to_owned(),
			size: 1,
			data_url: create_rw_signal(data_url.map(str::to_owned)),
		}
	}

	#[test]
	fn submission_waits_for_unread_attachments() {
		let runtime = create_runtime();

		let attachments = vec![
			staged(0, "a.png", Some("data:image/png;base64,AA==")),
			staged(1, "b.png", None),
		];
		assert!(reads_pending(&attachments));

		attachments[1]
			.data_url
			.set(Some("data:image/png;base64,BB==".to_owned()));
		assert!(!reads_pending(&attachments));
		assert_eq!(
			attachments
				.iter()
				.filter_map(StagedAttachment::as_upload)
				.count(),
			2,
		);

		runtime.dispose();
	}

	#[test]
	fn same_name_files_are_told_apart_by_id() {
		let runtime = create_runtime();

		let mut attachments = vec![staged(0, "photo.jpg", None), staged(1, "photo.jpg", None)];
		attachments.retain(|attachment| attachment.id != 0);
		assert_eq!(attachments.len(), 1);
		assert_eq!(attachments[0].id, 1);

		runtime.dispose();
	}
}
