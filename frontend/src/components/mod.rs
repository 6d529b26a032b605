pub mod booking {
    pub mod court_picker;
}
pub mod clickable_row;
pub mod common_modal;
pub mod common_toast;
pub mod nav;
pub mod user_search;
