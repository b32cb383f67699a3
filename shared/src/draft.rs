//! Draft form state and client-side validation.

use crate::{
    api::{ImageUpload, ItemFields, ItemPayload},
    error::{AdminError, DraftField, ValidationError},
    model::{Category, InventoryItem, ItemStatus, Prescription},
};

/// Editable copy of an item's fields, kept as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    /// Name text.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Selected category, `None` until chosen.
    pub category: Option<Category>,
    /// Price text.
    pub price: String,
    /// Stock text.
    pub stock: String,
    /// Brand text.
    pub brand: String,
    /// Pack size text, optional.
    pub pack_size: String,
    /// Selected status.
    pub status: ItemStatus,
    /// Selected prescription requirement.
    pub prescription: Prescription,
    /// Image references already stored for the item being edited.
    pub images: Vec<String>,
}

impl Draft {
    /// Draft populated from a stored item, with the legacy image fallback
    /// applied.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: Some(item.category.clone()),
            price: item.price.to_string(),
            stock: item.stock.to_string(),
            brand: item.brand.clone(),
            pack_size: item.pack_size.clone().unwrap_or_default(),
            status: item.status,
            prescription: item.prescription,
            images: item.image_refs(),
        }
    }

    /// Checks the scalar rules and returns the parsed fields.
    ///
    /// Rules run in a fixed order and the first violation is returned:
    /// required fields, then (create only) images, then price, then stock.
    pub fn validate(
        &self,
        mode: &FormMode,
        pending_images: usize,
    ) -> Result<ItemFields, ValidationError> {
        let required = [
            (DraftField::Name, self.name.as_str()),
            (DraftField::Description, self.description.as_str()),
            (DraftField::Category, self.category.as_ref().map(Category::code).unwrap_or_default()),
            (DraftField::Price, self.price.as_str()),
            (DraftField::Stock, self.stock.as_str()),
            (DraftField::Brand, self.brand.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        if mode.is_create() && pending_images == 0 {
            return Err(ValidationError::MissingImages);
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
            .ok_or(ValidationError::InvalidPrice)?;

        let stock = parse_stock(&self.stock)?;

        let pack_size = Some(self.pack_size.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(ItemFields {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            // Presence checked by the required-field rule.
            category: self.category.clone().unwrap_or(Category::Other),
            price,
            stock,
            brand: self.brand.trim().to_string(),
            pack_size,
            status: self.status,
            prescription: self.prescription,
        })
    }
}

/// Stock is a number, not below zero, with no fractional part and within
/// `u32`. Exponent forms such as `1e2` are accepted.
fn parse_stock(text: &str) -> Result<u32, ValidationError> {
    let value = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or(ValidationError::StockNotWhole)?;
    if value < 0.0 {
        return Err(ValidationError::InvalidStock);
    }
    if value.fract() != 0.0 && value.is_finite() {
        return Err(ValidationError::StockNotWhole);
    }
    if !value.is_finite() || value > f64::from(u32::MAX) {
        return Err(ValidationError::StockTooLarge);
    }
    // Whole and in range, checked above.
    Ok(value as u32)
}

/// Whether the modal creates a new item or edits a stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    /// "Add New".
    #[default]
    Create,
    /// "Edit" of the item with this backend id.
    Edit {
        /// Backend id, never changed by the form.
        id: String,
    },
}

impl FormMode {
    /// `true` for [`FormMode::Create`].
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

/// Modal form controller state.
///
/// `U` is the platform's handle for a file that has been picked but not yet
/// uploaded. Methods that drop preview URLs hand them back so the platform
/// can release them.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm<U> {
    mode: FormMode,
    draft: Draft,
    pending: Vec<U>,
    previews: Vec<String>,
    open: bool,
    submitting: bool,
}

impl<U> Default for ItemForm<U> {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            draft: Draft::default(),
            pending: Vec::new(),
            previews: Vec::new(),
            open: false,
            submitting: false,
        }
    }
}

impl<U: Clone> ItemForm<U> {
    /// Current mode.
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable draft, for field edits.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Files picked but not yet uploaded.
    pub fn pending(&self) -> &[U] {
        &self.pending
    }

    /// Preview URLs, one per pending file, same order.
    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    /// Whether the modal is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a submit is waiting for the backend.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Resets to an empty draft and opens in create mode. Ignored while a
    /// submit is in flight.
    pub fn start_create(&mut self) -> Vec<String> {
        if self.submitting {
            return Vec::new();
        }
        let released = self.reset();
        self.open = true;
        released
    }

    /// Loads `item` into the draft and opens in edit mode. Ignored while a
    /// submit is in flight.
    pub fn start_edit(&mut self, item: &InventoryItem) -> Vec<String> {
        if self.submitting {
            return Vec::new();
        }
        let released = self.reset();
        self.mode = FormMode::Edit {
            id: item.id.clone(),
        };
        self.draft = Draft::from_item(item);
        self.open = true;
        released
    }

    /// Replaces the pending file set. Each file comes with its preview URL.
    ///
    /// While a submit is in flight the selection is refused and its own
    /// previews are handed back for release.
    pub fn select_images(&mut self, files: Vec<(U, String)>) -> Vec<String> {
        let (pending, previews): (Vec<U>, Vec<String>) = files.into_iter().unzip();
        if self.submitting {
            return previews;
        }
        self.pending = pending;
        std::mem::replace(&mut self.previews, previews)
    }

    /// Closes the modal and discards the draft. Ignored while a submit is in
    /// flight; the outcome decides whether the modal closes.
    pub fn close(&mut self) -> Vec<String> {
        if self.submitting {
            return Vec::new();
        }
        self.reset()
    }

    /// Validates the draft and marks a submit as in flight.
    pub fn begin_submit(&mut self) -> Result<ItemPayload<U>, AdminError> {
        if self.submitting {
            return Err(AdminError::SubmitInFlight);
        }
        let fields = self.draft.validate(&self.mode, self.pending.len())?;
        let images = if !self.pending.is_empty() {
            ImageUpload::New(self.pending.clone())
        } else {
            ImageUpload::Existing(self.draft.images.clone())
        };
        self.submitting = true;
        Ok(ItemPayload {
            fields,
            images,
        })
    }

    /// Settles the in-flight submit. A successful save closes the form.
    pub fn finish_submit(&mut self, saved: bool) -> Vec<String> {
        self.submitting = false;
        if saved {
            self.reset()
        } else {
            Vec::new()
        }
    }

    fn reset(&mut self) -> Vec<String> {
        let released = std::mem::take(&mut self.previews);
        *self = Self::default();
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> Draft {
        Draft {
            name: "Ibuprofen".into(),
            description: "Anti-inflammatory".into(),
            category: Some(Category::Medicines),
            price: "6.20".into(),
            stock: "40".into(),
            brand: "Acme".into(),
            ..Draft::default()
        }
    }

    fn edit_mode() -> FormMode {
        FormMode::Edit {
            id: "x1".into(),
        }
    }

    fn stored_item() -> InventoryItem {
        InventoryItem {
            id: "x1".into(),
            name: "Vitamin C".into(),
            description: "1000mg".into(),
            category: Category::Supplements,
            brand: "Sunny".into(),
            pack_size: None,
            price: 9.99,
            stock: 3,
            status: ItemStatus::Inactive,
            prescription: Prescription::NotRequired,
            images: Vec::new(),
            image: Some("uploads/products/vitc.png".into()),
        }
    }

    #[test]
    fn each_required_field_is_checked_in_order() {
        let cases: [(fn(&mut Draft), DraftField); 6] = [
            (|d| d.name = "  ".into(), DraftField::Name),
            (|d| d.description.clear(), DraftField::Description),
            (|d| d.category = None, DraftField::Category),
            (|d| d.price = "\t".into(), DraftField::Price),
            (|d| d.stock.clear(), DraftField::Stock),
            (|d| d.brand.clear(), DraftField::Brand),
        ];
        for (blank, field) in cases {
            let mut draft = filled_draft();
            blank(&mut draft);
            assert_eq!(
                draft.validate(&edit_mode(), 0),
                Err(ValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn missing_field_wins_over_missing_images() {
        let mut draft = filled_draft();
        draft.brand.clear();
        assert_eq!(
            draft.validate(&FormMode::Create, 0),
            Err(ValidationError::MissingField(DraftField::Brand))
        );
    }

    #[test]
    fn create_requires_an_image() {
        assert_eq!(
            filled_draft().validate(&FormMode::Create, 0),
            Err(ValidationError::MissingImages)
        );
        assert!(filled_draft().validate(&FormMode::Create, 1).is_ok());
        assert!(filled_draft().validate(&edit_mode(), 0).is_ok());
    }

    #[test]
    fn non_positive_or_garbage_price_is_rejected() {
        for price in ["0", "-1", "-0.01", "abc", "NaN", "inf"] {
            let mut draft = filled_draft();
            draft.price = price.into();
            assert_eq!(
                draft.validate(&edit_mode(), 0),
                Err(ValidationError::InvalidPrice),
                "price {price:?}"
            );
        }
    }

    #[test]
    fn negative_stock_is_rejected() {
        for stock in ["-1", "-100", "-0.5"] {
            let mut draft = filled_draft();
            draft.stock = stock.into();
            assert_eq!(
                draft.validate(&edit_mode(), 0),
                Err(ValidationError::InvalidStock),
                "stock {stock:?}"
            );
        }
    }

    #[test]
    fn stock_must_be_a_whole_number_in_range() {
        for (stock, expected) in [
            ("1.5", ValidationError::StockNotWhole),
            ("many", ValidationError::StockNotWhole),
            ("NaN", ValidationError::StockNotWhole),
            ("5000000000", ValidationError::StockTooLarge),
        ] {
            let mut draft = filled_draft();
            draft.stock = stock.into();
            assert_eq!(draft.validate(&edit_mode(), 0), Err(expected), "stock {stock:?}");
        }

        let mut draft = filled_draft();
        draft.stock = "1e2".into();
        assert_eq!(draft.validate(&edit_mode(), 0).map(|fields| fields.stock), Ok(100));
        draft.stock = "4294967295".into();
        assert_eq!(draft.validate(&edit_mode(), 0).map(|fields| fields.stock), Ok(u32::MAX));
    }

    #[test]
    fn unknown_category_survives_an_edit() {
        let mut item = stored_item();
        item.category = Category::Unknown("veterinary".into());
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&item);
        form.draft_mut().stock = "5".into();
        let payload = form.begin_submit().expect("valid edit");
        assert!(payload.fields.form_parts().contains(&("category", "veterinary".to_string())));
    }

    #[test]
    fn price_rule_runs_before_stock_rule() {
        let mut draft = filled_draft();
        draft.price = "0".into();
        draft.stock = "-5".into();
        assert_eq!(draft.validate(&edit_mode(), 0), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn valid_draft_is_trimmed_and_parsed() {
        let mut draft = filled_draft();
        draft.name = "  Ibuprofen ".into();
        draft.stock = "0".into();
        draft.pack_size = "  ".into();
        let fields = draft.validate(&edit_mode(), 0).expect("valid draft");
        assert_eq!(fields.name, "Ibuprofen");
        assert_eq!(fields.stock, 0);
        assert_eq!(fields.price, 6.2);
        assert_eq!(fields.pack_size, None);
    }

    #[test]
    fn start_edit_uses_legacy_image_when_list_is_empty() {
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&stored_item());
        assert!(form.is_open());
        assert_eq!(form.mode(), &edit_mode());
        assert_eq!(form.draft().images, vec!["uploads/products/vitc.png".to_string()]);
        assert_eq!(form.draft().status, ItemStatus::Inactive);
    }

    #[test]
    fn start_create_resets_previous_edit() {
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&stored_item());
        form.select_images(vec![(1, "blob:1".into())]);
        let released = form.start_create();
        assert_eq!(released, vec!["blob:1".to_string()]);
        assert!(form.mode().is_create());
        assert_eq!(form.draft(), &Draft::default());
        assert!(form.pending().is_empty());
        assert!(form.is_open());
    }

    #[test]
    fn select_images_replaces_files_and_returns_old_previews() {
        let mut form = ItemForm::<u8>::default();
        form.start_create();
        assert!(form.select_images(vec![(1, "blob:a".into())]).is_empty());
        let released = form.select_images(vec![(2, "blob:b".into()), (3, "blob:c".into())]);
        assert_eq!(released, vec!["blob:a".to_string()]);
        assert_eq!(form.pending(), &[2, 3]);
        assert_eq!(form.previews(), &["blob:b".to_string(), "blob:c".to_string()]);
    }

    #[test]
    fn edit_without_new_files_keeps_existing_images() {
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&stored_item());
        let payload = form.begin_submit().expect("valid edit");
        assert_eq!(
            payload.images,
            ImageUpload::Existing(vec!["uploads/products/vitc.png".to_string()])
        );
    }

    #[test]
    fn new_files_replace_existing_images() {
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&stored_item());
        form.select_images(vec![(7, "blob:7".into())]);
        let payload = form.begin_submit().expect("valid edit");
        assert_eq!(payload.images, ImageUpload::New(vec![7]));
    }

    #[test]
    fn second_submit_is_refused_until_settled() {
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&stored_item());
        form.begin_submit().expect("first submit");
        assert_eq!(form.begin_submit(), Err(AdminError::SubmitInFlight));

        assert!(form.finish_submit(false).is_empty());
        assert!(form.is_open(), "failed save keeps the draft");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn form_is_frozen_while_submit_is_in_flight() {
        let mut form = ItemForm::<u8>::default();
        form.start_edit(&stored_item());
        form.draft_mut().stock = "8".into();
        form.begin_submit().expect("valid edit");

        assert!(form.close().is_empty());
        assert!(form.start_create().is_empty());
        let refused = form.select_images(vec![(4, "blob:late".into())]);
        assert_eq!(refused, vec!["blob:late".to_string()]);
        assert!(form.is_open());
        assert_eq!(form.mode(), &edit_mode());
        assert_eq!(form.draft().stock, "8");
        assert!(form.pending().is_empty());

        form.finish_submit(false);
        assert!(form.close().is_empty());
        assert!(!form.is_open());
    }

    #[test]
    fn failed_validation_does_not_mark_in_flight() {
        let mut form = ItemForm::<u8>::default();
        form.start_create();
        assert!(form.begin_submit().is_err());
        assert!(!form.is_submitting());
    }

    #[test]
    fn successful_submit_closes_and_releases_previews() {
        let mut form = ItemForm::<u8>::default();
        form.start_create();
        *form.draft_mut() = filled_draft();
        form.select_images(vec![(1, "blob:1".into())]);
        form.begin_submit().expect("valid create");
        let released = form.finish_submit(true);
        assert_eq!(released, vec!["blob:1".to_string()]);
        assert!(!form.is_open());
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &Draft::default());
    }
}
