pub mod action_button;
pub mod form_item;
pub mod pagination;
