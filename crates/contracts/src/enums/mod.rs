pub mod sort_option;
