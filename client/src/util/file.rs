//! Reading a picked `File` into a [`SelectedImage`].
//!
//! Type and size are checked from the `File` metadata before any bytes are
//! read, so oversized files never get loaded into memory.

#[cfg(feature = "csr")]
use retina::ValidationError;
use retina::upload::SelectedImage;

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn metadata(file: &web_sys::File) -> SelectedImage {
    SelectedImage {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
        bytes: Vec::new(),
        preview_url: None,
    }
}

/// Load `file` with a preview URL. A rejected file comes back unread, with
/// its metadata, so the caller can record the validation error.
///
/// # Errors
///
/// [`ValidationError::UnreadableFile`] when the browser fails the read.
#[cfg(feature = "csr")]
pub async fn load_image(file: web_sys::File) -> Result<SelectedImage, ValidationError> {
    let mut image = metadata(&file);
    if retina::upload::validate_image(&image.mime, image.size).is_err() {
        return Ok(image);
    }
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.map_err(|e| {
        log::error!("reading {} failed: {e:?}", image.name);
        ValidationError::UnreadableFile
    })?;
    image.bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    image.preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();
    Ok(image)
}

/// Release a preview URL created by [`load_image`].
pub fn release_preview(image: &SelectedImage) {
    #[cfg(feature = "csr")]
    {
        if let Some(url) = image.preview_url.as_deref() {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = image;
    }
}
