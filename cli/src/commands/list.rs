//! `list` subcommand.

use anyhow::Result;
use stockdesk_shared::asset_host;

use super::{report, session_path, Admin};
use crate::utils::format_table;

/// Loads and prints the full inventory.
pub async fn run(admin: &mut Admin, json: bool) -> Result<()> {
    admin
        .fetch_inventory()
        .await
        .map_err(|err| report(err, &session_path(admin)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(admin.items())?);
    } else if admin.items().is_empty() {
        println!("No inventory items.");
    } else {
        let host = asset_host(admin.api().api_base());
        println!("{}", format_table(admin.items(), &host));
    }
    Ok(())
}
