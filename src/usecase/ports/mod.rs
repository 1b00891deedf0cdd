pub mod dialogs;
pub mod source;
