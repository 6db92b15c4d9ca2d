pub mod card;
pub mod category_filter;
pub mod list;
