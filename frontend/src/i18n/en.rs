pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod toast {
    pub const SUCCESS_TITLE: &str = "Done";
    pub const ERROR_TITLE: &str = "Something went wrong";
    pub const ARIA_CLOSE: &str = "Dismiss notification";
}

pub mod admin_inventory {
    pub const TITLE: &str = "Inventory";
    pub const SUBTITLE_TEMPLATE: &str = "{} items";
    pub const ADD_NEW: &str = "Add New";
    pub const SIGNED_IN_AS_TEMPLATE: &str = "Signed in as {}";
    pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";
}

pub mod inventory_table {
    pub const EMPTY: &str = "No inventory items yet.";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_NAME: &str = "Name";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_BRAND: &str = "Brand";
    pub const COL_PRICE: &str = "Price";
    pub const COL_STOCK: &str = "Stock";
    pub const COL_STATUS: &str = "Status";
    pub const COL_PRESCRIPTION: &str = "Prescription";
    pub const COL_ACTIONS: &str = "Actions";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const STATUS_ACTIVE: &str = "Active";
    pub const STATUS_INACTIVE: &str = "Inactive";
    pub const RX_REQUIRED: &str = "Required";
    pub const RX_NOT_REQUIRED: &str = "Not required";
}

pub mod item_form {
    pub const TITLE_CREATE: &str = "Add New Item";
    pub const TITLE_EDIT: &str = "Edit Item";
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const CATEGORY: &str = "Category";
    pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
    pub const PRICE: &str = "Price";
    pub const STOCK: &str = "Stock";
    pub const BRAND: &str = "Brand";
    pub const PACK_SIZE: &str = "Pack size";
    pub const STATUS: &str = "Status";
    pub const PRESCRIPTION: &str = "Prescription";
    pub const IMAGES: &str = "Images";
    pub const IMAGES_HINT_EDIT: &str = "Leave empty to keep the current images.";
    pub const CANCEL: &str = "Cancel";
    pub const SUBMIT_CREATE: &str = "Create";
    pub const SUBMIT_EDIT: &str = "Save";
    pub const SUBMITTING: &str = "Saving...";
}

pub mod login {
    pub const TITLE: &str = "Sign in required";
    pub const BODY: &str =
        "The inventory screen is only available to administrators. Sign in with an admin account and try again.";
    pub const RETRY: &str = "Back to inventory";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
}
