//! Inventory data model as served by `/api/admin/inventory`.

use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Product category codes accepted by the backend.
///
/// Codes this client does not know are kept verbatim in
/// [`Category::Unknown`] so an edit sends them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Over-the-counter and prescription medicines.
    Medicines,
    /// Vitamins and dietary supplements.
    Supplements,
    /// Personal hygiene products.
    PersonalCare,
    /// Infant care products.
    BabyCare,
    /// Skin care products.
    SkinCare,
    /// Devices such as thermometers or blood pressure monitors.
    MedicalDevices,
    /// Bandages, antiseptics and similar.
    FirstAid,
    /// Anything else.
    Other,
    /// A code served by the backend that is not in [`Category::ALL`].
    Unknown(String),
}

impl Category {
    /// Every known category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Medicines,
        Category::Supplements,
        Category::PersonalCare,
        Category::BabyCare,
        Category::SkinCare,
        Category::MedicalDevices,
        Category::FirstAid,
        Category::Other,
    ];

    /// Wire code, as sent in the multipart `category` field.
    pub fn code(&self) -> &str {
        match self {
            Category::Medicines => "medicines",
            Category::Supplements => "supplements",
            Category::PersonalCare => "personal_care",
            Category::BabyCare => "baby_care",
            Category::SkinCare => "skin_care",
            Category::MedicalDevices => "medical_devices",
            Category::FirstAid => "first_aid",
            Category::Other => "other",
            Category::Unknown(code) => code,
        }
    }

    /// Human readable label. Unknown codes are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            Category::Medicines => "Medicines",
            Category::Supplements => "Supplements",
            Category::PersonalCare => "Personal Care",
            Category::BabyCare => "Baby Care",
            Category::SkinCare => "Skin Care",
            Category::MedicalDevices => "Medical Devices",
            Category::FirstAid => "First Aid",
            Category::Other => "Other",
            Category::Unknown(code) => code,
        }
    }

    /// Looks a known category up by its wire code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        Category::from_code(&code).unwrap_or(Category::Unknown(code))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether an item is offered in the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Listed and purchasable.
    #[default]
    Active,
    /// Hidden from customers.
    Inactive,
}

impl ItemStatus {
    /// Wire code.
    pub fn code(self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Inactive => "inactive",
        }
    }

    /// Parses a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "active" => Some(ItemStatus::Active),
            "inactive" => Some(ItemStatus::Inactive),
            _ => None,
        }
    }
}

/// Whether selling the item requires a prescription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prescription {
    /// A prescription must be presented.
    Required,
    /// Freely sold.
    #[default]
    NotRequired,
}

impl Prescription {
    /// Wire code.
    pub fn code(self) -> &'static str {
        match self {
            Prescription::Required => "required",
            Prescription::NotRequired => "not_required",
        }
    }

    /// Parses a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "required" => Some(Prescription::Required),
            "not_required" => Some(Prescription::NotRequired),
            _ => None,
        }
    }
}

/// One inventory record. The backend owns it; the admin view only caches a
/// copy and never mutates `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Backend assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category code.
    pub category: Category,
    /// Manufacturer or brand.
    #[serde(default)]
    pub brand: String,
    /// Optional pack size, e.g. `"30 tablets"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_size: Option<String>,
    /// Unit price, always positive.
    pub price: f64,
    /// Units on hand. Fractional counts from older records are rounded
    /// down.
    #[serde(default, deserialize_with = "stock_count")]
    pub stock: u32,
    /// Listing status.
    #[serde(default)]
    pub status: ItemStatus,
    /// Prescription requirement.
    #[serde(default)]
    pub prescription: Prescription,
    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Single image reference kept for records created before multi-image
    /// support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn stock_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("stock `{text}` is not a number")))?,
    };
    if !value.is_finite() || value < 0.0 || value.floor() > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!("stock {value} is out of range")));
    }
    // Range checked above.
    Ok(value.floor() as u32)
}

impl InventoryItem {
    /// Image references to display or keep, falling back to the legacy
    /// single-image field when `images` is empty.
    pub fn image_refs(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| vec![value.to_string()])
            .unwrap_or_default()
    }

    /// First displayable image reference, if any.
    pub fn primary_image(&self) -> Option<String> {
        self.image_refs().into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "665f1c2ab9",
            "name": "Paracetamol 500mg",
            "description": "Pain relief",
            "category": "medicines",
            "brand": "Acme",
            "packSize": "20 tablets",
            "price": 4.5,
            "stock": 120,
            "status": "active",
            "prescription": "not_required",
            "images": [],
            "image": "uploads/products/legacy.png"
        }"#
    }

    #[test]
    fn deserializes_backend_shape_with_mongo_id() {
        let item: InventoryItem = serde_json::from_str(sample_json()).expect("parse item");
        assert_eq!(item.id, "665f1c2ab9");
        assert_eq!(item.category, Category::Medicines);
        assert_eq!(item.pack_size.as_deref(), Some("20 tablets"));
        assert_eq!(item.prescription, Prescription::NotRequired);
    }

    #[test]
    fn image_refs_falls_back_to_legacy_field() {
        let item: InventoryItem = serde_json::from_str(sample_json()).expect("parse item");
        assert_eq!(item.image_refs(), vec!["uploads/products/legacy.png".to_string()]);
    }

    #[test]
    fn image_refs_prefers_image_list() {
        let mut item: InventoryItem = serde_json::from_str(sample_json()).expect("parse item");
        item.images = vec!["a.png".to_string(), "b.png".to_string()];
        assert_eq!(item.image_refs(), vec!["a.png".to_string(), "b.png".to_string()]);
        assert_eq!(item.primary_image().as_deref(), Some("a.png"));
    }

    #[test]
    fn blank_legacy_image_yields_no_refs() {
        let mut item: InventoryItem = serde_json::from_str(sample_json()).expect("parse item");
        item.image = Some("   ".to_string());
        assert!(item.image_refs().is_empty());
        assert!(item.primary_image().is_none());
    }

    #[test]
    fn unknown_category_code_is_kept_verbatim() {
        let json = sample_json().replace("\"medicines\"", "\"veterinary\"");
        let item: InventoryItem = serde_json::from_str(&json).expect("parse item");
        assert_eq!(item.category, Category::Unknown("veterinary".to_string()));
        assert_eq!(item.category.code(), "veterinary");
        assert_eq!(item.category.label(), "veterinary");

        let back = serde_json::to_value(&item).expect("serialize item");
        assert_eq!(back["category"], "veterinary");
    }

    #[test]
    fn category_codes_round_trip_through_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category.clone()));
        }
        assert_eq!(Category::from_code("nope"), None);
        assert_eq!(Category::from("other".to_string()), Category::Other);
    }

    #[test]
    fn lenient_fields_tolerate_older_records() {
        let json = r#"{"_id":"x","name":"Gauze","category":"first_aid","price":2,"stock":1.5}"#;
        let item: InventoryItem = serde_json::from_str(json).expect("parse item");
        assert_eq!(item.brand, "");
        assert_eq!(item.description, "");
        assert_eq!(item.stock, 1);

        let json = r#"{"_id":"y","name":"Gauze","category":"first_aid","price":2,"stock":"7"}"#;
        let item: InventoryItem = serde_json::from_str(json).expect("parse item");
        assert_eq!(item.stock, 7);
    }

    #[test]
    fn negative_stock_is_not_decoded() {
        let json = r#"{"_id":"z","name":"Gauze","category":"first_aid","price":2,"stock":-4}"#;
        assert!(serde_json::from_str::<InventoryItem>(json).is_err());
    }
}
