mod categories_page;
mod core;
mod delete_endpoint;

pub use categories_page::get_categories_page;
pub use core::{Category, CategoryId, CategorySpending};
pub use delete_endpoint::delete_category_endpoint;
