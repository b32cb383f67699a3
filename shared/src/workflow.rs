//! Remote operations of the inventory screen.
//!
//! Each operation reads the bearer token from the [`AuthContext`] right
//! before its request and reports failures through [`AdminError`]. Nothing
//! here mutates local state; callers replace their list only on success.

use crate::{
    api::{InventoryApi, ItemPayload},
    draft::FormMode,
    error::{AdminError, Operation},
    model::InventoryItem,
    session::{AuthContext, SessionProvider},
};

/// Result of a successful create, update or delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    /// Success text for the notification.
    pub notice: String,
    /// Outcome of the re-fetch that follows every successful write. Kept
    /// apart so a failed re-fetch does not hide the successful write.
    pub items: Result<Vec<InventoryItem>, AdminError>,
}

/// Loads the full collection.
pub async fn fetch_inventory<A, S>(
    api: &A,
    auth: &AuthContext<S>,
) -> Result<Vec<InventoryItem>, AdminError>
where
    A: InventoryApi + ?Sized,
    S: SessionProvider,
{
    let token = auth.bearer_token()?;
    tracing::debug!("fetching inventory");
    match api.list(&token).await {
        Ok(items) => {
            tracing::debug!(count = items.len(), "inventory loaded");
            Ok(items)
        },
        Err(failure) => {
            tracing::warn!(?failure, "inventory fetch failed");
            Err(AdminError::from_failure(Operation::Fetch, failure))
        },
    }
}

/// Creates or updates an item from a validated payload, then re-fetches.
pub async fn save_item<A, S>(
    api: &A,
    auth: &AuthContext<S>,
    mode: &FormMode,
    payload: &ItemPayload<A::Upload>,
) -> Result<Saved, AdminError>
where
    A: InventoryApi + ?Sized,
    S: SessionProvider,
{
    let token = auth.bearer_token()?;
    let (operation, result) = match mode {
        FormMode::Create => {
            tracing::debug!(name = %payload.fields.name, "creating item");
            (Operation::Create, api.create(&token, payload).await)
        },
        FormMode::Edit {
            id,
        } => {
            tracing::debug!(%id, "updating item");
            (Operation::Update, api.update(&token, id, payload).await)
        },
    };
    if let Err(failure) = result {
        tracing::warn!(%operation, ?failure, "save failed");
        return Err(AdminError::from_failure(operation, failure));
    }

    let notice = match operation {
        Operation::Create => "Item created successfully",
        _ => "Item updated successfully",
    };
    Ok(Saved {
        notice: notice.to_string(),
        items: fetch_inventory(api, auth).await,
    })
}

/// Deletes an item after `confirm` agrees, then re-fetches.
///
/// Returns `Ok(None)` when the user declines; nothing is sent in that case.
pub async fn delete_item<A, S, C>(
    api: &A,
    auth: &AuthContext<S>,
    id: &str,
    confirm: C,
) -> Result<Option<Saved>, AdminError>
where
    A: InventoryApi + ?Sized,
    S: SessionProvider,
    C: FnOnce() -> bool,
{
    if !confirm() {
        return Ok(None);
    }
    let token = auth.bearer_token()?;
    tracing::debug!(%id, "deleting item");
    let body = api.delete(&token, id).await.map_err(|failure| {
        tracing::warn!(%id, ?failure, "delete failed");
        AdminError::from_failure(Operation::Delete, failure)
    })?;
    if !is_truthy(&body) {
        tracing::warn!(%id, %body, "delete returned an empty confirmation");
        return Err(AdminError::failed(Operation::Delete, None));
    }
    Ok(Some(Saved {
        notice: "Item deleted successfully".to_string(),
        items: fetch_inventory(api, auth).await,
    }))
}

fn is_truthy(body: &serde_json::Value) -> bool {
    match body {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(value) => *value,
        serde_json::Value::String(value) => !value.is_empty(),
        serde_json::Value::Number(value) => value.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
