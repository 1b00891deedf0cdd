pub mod edit_service;
pub mod load_service;
