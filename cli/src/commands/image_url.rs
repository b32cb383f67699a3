//! `image-url` subcommand.

use stockdesk_shared::{asset_host, resolve_image_url};

/// Prints where the backend serves `reference` from.
pub fn run(api_base: &str, reference: Option<&str>) {
    println!("{}", resolve_image_url(&asset_host(api_base), reference));
}
