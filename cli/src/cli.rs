//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stockdesk_shared::{Category, Draft, ItemStatus, Prescription};

/// API base used when neither the flag nor the environment sets one.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "sd-cli", version, about = "StockDesk inventory admin CLI")]
pub struct Cli {
    /// Backend API base URL.
    #[arg(long, env = "STOCKDESK_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,
    /// JSON session file written by the login flow.
    #[arg(
        long,
        env = "STOCKDESK_SESSION",
        default_value = ".stockdesk/session.json",
        global = true
    )]
    pub session_file: PathBuf,
    /// Subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

/// Inventory operations.
#[derive(Subcommand)]
pub enum Commands {
    /// List every inventory item.
    List {
        /// Print the raw items as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Create an item. At least one `--image` is required.
    Create {
        /// Item fields.
        #[command(flatten)]
        fields: ItemArgs,
        /// Image file to upload (repeatable).
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Update an item. Only the given fields change; stored images are kept
    /// unless new ones are given.
    Update {
        /// Backend id of the item.
        id: String,
        /// Item fields.
        #[command(flatten)]
        fields: ItemArgs,
        /// Replacement image file (repeatable).
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Delete an item.
    Delete {
        /// Backend id of the item.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Print the display URL of a stored image reference.
    ImageUrl {
        /// Stored reference, e.g. `uploads\products\pill.png`.
        reference: Option<String>,
    },
}

/// Editable item fields. Values are kept as typed so validation can report
/// the same messages as the web form.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemArgs {
    /// Item name.
    #[arg(long)]
    pub name: Option<String>,
    /// Item description.
    #[arg(long)]
    pub description: Option<String>,
    /// Category code.
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,
    /// Unit price.
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    /// Units on hand.
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,
    /// Brand.
    #[arg(long)]
    pub brand: Option<String>,
    /// Pack size, e.g. "30 tablets".
    #[arg(long)]
    pub pack_size: Option<String>,
    /// `active` or `inactive`.
    #[arg(long, value_parser = parse_status)]
    pub status: Option<ItemStatus>,
    /// `required` or `not_required`.
    #[arg(long, value_parser = parse_prescription)]
    pub prescription: Option<Prescription>,
}

impl ItemArgs {
    /// Copies every given field into `draft`, leaving the rest untouched.
    pub fn apply(&self, draft: &mut Draft) {
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(category) = &self.category {
            draft.category = Some(category.clone());
        }
        if let Some(price) = &self.price {
            draft.price = price.clone();
        }
        if let Some(stock) = &self.stock {
            draft.stock = stock.clone();
        }
        if let Some(brand) = &self.brand {
            draft.brand = brand.clone();
        }
        if let Some(pack_size) = &self.pack_size {
            draft.pack_size = pack_size.clone();
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(prescription) = self.prescription {
            draft.prescription = prescription;
        }
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::from_code(value).ok_or_else(|| {
        let codes = Category::ALL.iter().map(Category::code).collect::<Vec<_>>().join(", ");
        format!("unknown category `{value}` (expected one of: {codes})")
    })
}

fn parse_status(value: &str) -> Result<ItemStatus, String> {
    ItemStatus::from_code(value).ok_or_else(|| "expected `active` or `inactive`".to_string())
}

fn parse_prescription(value: &str) -> Result<Prescription, String> {
    Prescription::from_code(value)
        .ok_or_else(|| "expected `required` or `not_required`".to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn update_accepts_negative_stock_for_validation() {
        let cli = Cli::try_parse_from(["sd-cli", "update", "abc", "--stock", "-2"])
            .expect("parse update");
        let Commands::Update {
            id,
            fields,
            images,
        } = cli.command
        else {
            panic!("expected update");
        };
        assert_eq!(id, "abc");
        assert_eq!(fields.stock.as_deref(), Some("-2"));
        assert!(images.is_empty());
    }

    #[test]
    fn unknown_category_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["sd-cli", "create", "--category", "toys"]);
        assert!(result.is_err());
    }

    #[test]
    fn apply_only_touches_given_fields() {
        let mut draft = Draft {
            name: "Old".into(),
            brand: "Keep".into(),
            ..Draft::default()
        };
        let args = ItemArgs {
            name: Some("New".into()),
            status: Some(ItemStatus::Inactive),
            ..ItemArgs::default()
        };
        args.apply(&mut draft);
        assert_eq!(draft.name, "New");
        assert_eq!(draft.brand, "Keep");
        assert_eq!(draft.status, ItemStatus::Inactive);
    }
}
