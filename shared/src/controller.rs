//! Stateful controller for the inventory admin screen.
//!
//! Owns what the screen shows (the cached list and the modal form) and
//! wires user actions to [`crate::workflow`]. Hosts that cannot hold state
//! across an `await` (Yew function components) drive [`ItemForm`] and the
//! workflow functions directly instead.

use crate::{
    api::InventoryApi,
    draft::ItemForm,
    error::AdminError,
    model::InventoryItem,
    session::{AuthContext, SessionProvider},
    workflow::{self, Saved},
};

/// Inventory admin view state plus its collaborators.
pub struct InventoryAdmin<A: InventoryApi, S> {
    api: A,
    auth: AuthContext<S>,
    items: Vec<InventoryItem>,
    form: ItemForm<A::Upload>,
}

impl<A, S> InventoryAdmin<A, S>
where
    A: InventoryApi,
    S: SessionProvider,
{
    /// Runs the session gate. Loading the list is a separate step.
    pub fn mount(api: A, session: S) -> Result<Self, AdminError> {
        let auth = AuthContext::establish(session)?;
        tracing::info!(admin = %auth.user().display_name(), "inventory admin mounted");
        Ok(Self {
            api,
            auth,
            items: Vec::new(),
            form: ItemForm::default(),
        })
    }

    /// Cached list, exactly as last returned by the backend.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Modal form state.
    pub fn form(&self) -> &ItemForm<A::Upload> {
        &self.form
    }

    /// Mutable modal form state, for field edits.
    pub fn form_mut(&mut self) -> &mut ItemForm<A::Upload> {
        &mut self.form
    }

    /// Authentication context in use.
    pub fn auth(&self) -> &AuthContext<S> {
        &self.auth
    }

    /// Backend client in use.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replaces the cached list with the backend's. Keeps the old list on
    /// failure.
    pub async fn fetch_inventory(&mut self) -> Result<usize, AdminError> {
        let items = workflow::fetch_inventory(&self.api, &self.auth).await?;
        self.items = items;
        Ok(self.items.len())
    }

    /// Opens the modal with an empty draft.
    pub fn start_create(&mut self) -> Vec<String> {
        self.form.start_create()
    }

    /// Opens the modal on a copy of `item`.
    pub fn start_edit(&mut self, item: &InventoryItem) -> Vec<String> {
        self.form.start_edit(item)
    }

    /// Opens the modal on the cached item with `id`.
    pub fn start_edit_by_id(&mut self, id: &str) -> Option<Vec<String>> {
        let item = self.items.iter().find(|item| item.id == id)?.clone();
        Some(self.form.start_edit(&item))
    }

    /// Replaces the pending image files.
    pub fn select_images(&mut self, files: Vec<(A::Upload, String)>) -> Vec<String> {
        self.form.select_images(files)
    }

    /// Closes the modal without saving.
    pub fn close_modal(&mut self) -> Vec<String> {
        self.form.close()
    }

    /// Validates and persists the draft, then reloads the list.
    ///
    /// Returns the success notice. A failed re-fetch after a successful save
    /// is logged and leaves the previous list in place, unless the session
    /// was rejected.
    pub async fn submit(&mut self) -> Result<String, AdminError> {
        let payload = self.form.begin_submit()?;
        let mode = self.form.mode().clone();
        match workflow::save_item(&self.api, &self.auth, &mode, &payload).await {
            Ok(saved) => {
                self.form.finish_submit(true);
                self.absorb(saved)
            },
            Err(err) => {
                self.form.finish_submit(false);
                Err(err)
            },
        }
    }

    /// Deletes `id` once `confirm` agrees, then reloads the list.
    ///
    /// `Ok(None)` means the user declined.
    pub async fn delete_item<C>(
        &mut self,
        id: &str,
        confirm: C,
    ) -> Result<Option<String>, AdminError>
    where
        C: FnOnce() -> bool,
    {
        match workflow::delete_item(&self.api, &self.auth, id, confirm).await? {
            Some(saved) => self.absorb(saved).map(Some),
            None => Ok(None),
        }
    }

    fn absorb(&mut self, saved: Saved) -> Result<String, AdminError> {
        match saved.items {
            Ok(items) => self.items = items,
            Err(err) if err.redirects_to_login() => return Err(err),
            Err(err) => tracing::warn!(error = %err, "reload after write failed"),
        }
        Ok(saved.notice)
    }
}
