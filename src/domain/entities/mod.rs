pub mod edit;
pub mod paging;
pub mod todo;
