pub mod components;
pub mod icons;
pub mod price_format;
pub mod viewport;
