//! `create` and `update` subcommands.

use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{report, session_path, Admin};
use crate::{cli::ItemArgs, utils::load_uploads};

/// Creates an item from the given fields and image files.
pub async fn create(admin: &mut Admin, fields: &ItemArgs, images: &[PathBuf]) -> Result<()> {
    let uploads = load_uploads(images)?;
    admin.start_create();
    fields.apply(admin.form_mut().draft_mut());
    admin.select_images(uploads);
    submit(admin).await
}

/// Updates an item. The stored item is loaded first so unspecified fields and
/// images stay as they are.
pub async fn update(
    admin: &mut Admin,
    id: &str,
    fields: &ItemArgs,
    images: &[PathBuf],
) -> Result<()> {
    let uploads = load_uploads(images)?;
    admin
        .fetch_inventory()
        .await
        .map_err(|err| report(err, &session_path(admin)))?;
    if admin.start_edit_by_id(id).is_none() {
        bail!("item not found: {id}");
    }
    fields.apply(admin.form_mut().draft_mut());
    if !uploads.is_empty() {
        admin.select_images(uploads);
    }
    submit(admin).await
}

async fn submit(admin: &mut Admin) -> Result<()> {
    let notice = admin
        .submit()
        .await
        .map_err(|err| report(err, &session_path(admin)))?;
    tracing::info!(items = admin.items().len(), "{notice}");
    println!("{notice}");
    Ok(())
}
