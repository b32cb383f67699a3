//! Configuration for the frontend application.

use stockdesk_shared::asset_host;

/// API base URL, read at compile time.
/// - Local development: "http://localhost:5000/api"
/// - Production: set `STOCKDESK_API_BASE` when building
pub const API_BASE: &str = match option_env!("STOCKDESK_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// Host serving `/uploads/products/*`.
pub fn assets_host() -> String {
    asset_host(API_BASE)
}
