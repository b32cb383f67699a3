//! Display URLs for stored image references.

/// Shown when an item has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Static path product images are served from on the backend host.
pub const PRODUCT_UPLOADS_PATH: &str = "/uploads/products";

/// Backend host serving static assets, derived from an API base such as
/// `http://localhost:5000/api`.
pub fn asset_host(api_base: &str) -> String {
    let trimmed = api_base.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed).to_string()
}

/// Turns a stored image reference into a URL under
/// [`PRODUCT_UPLOADS_PATH`] on `asset_host`.
///
/// Only the trailing file name of the reference is kept, whatever separator
/// style it was stored with.
pub fn resolve_image_url(asset_host: &str, reference: Option<&str>) -> String {
    let Some(reference) = reference.map(str::trim).filter(|value| !value.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_string();
    };

    let normalized = reference.replace('\\', "/");
    let filename = normalized.rsplit('/').next().unwrap_or_default();
    if filename.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }

    format!("{}{}/{}", asset_host.trim_end_matches('/'), PRODUCT_UPLOADS_PATH, filename)
}
