// Reusable components live here.

pub mod inventory_table;
pub mod item_form_modal;
pub mod loading_spinner;
pub mod toast;
