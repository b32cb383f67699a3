//! `delete` subcommand.

use std::io;

use anyhow::Result;

use super::{report, session_path, Admin};
use crate::utils::confirm_from;

/// Deletes one item, asking first unless `yes` is set.
pub async fn run(admin: &mut Admin, id: &str, yes: bool) -> Result<()> {
    let mut prompt_error = None;
    let confirm = || {
        if yes {
            return true;
        }
        confirm_from(io::stdin().lock(), &format!("Delete item {id}?")).unwrap_or_else(|err| {
            prompt_error = Some(err);
            false
        })
    };

    let outcome = admin.delete_item(id, confirm).await;
    if let Some(err) = prompt_error {
        return Err(err);
    }
    match outcome.map_err(|err| report(err, &session_path(admin)))? {
        Some(notice) => {
            tracing::info!(%id, "{notice}");
            println!("{notice}");
        },
        None => println!("Cancelled."),
    }
    Ok(())
}
