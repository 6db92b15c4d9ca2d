use crate::domain::a001_catalog_product::aggregate::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort orders offered by the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Keep whatever order the collection currently has
    #[default]
    Recommended,
    NewestFirst,
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOption {
    /// Code used as the `<option value>` of the sort control
    pub fn code(&self) -> &'static str {
        match self {
            SortOption::Recommended => "recommended",
            SortOption::NewestFirst => "newestFirst",
            SortOption::Popular => "popular",
            SortOption::PriceLowToHigh => "priceLowToHigh",
            SortOption::PriceHighToLow => "priceHighToLow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Recommended => "Recommended",
            SortOption::NewestFirst => "Newest First",
            SortOption::Popular => "Popular",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
        }
    }

    /// All options in the order the control lists them
    pub fn all() -> Vec<SortOption> {
        vec![
            SortOption::Recommended,
            SortOption::NewestFirst,
            SortOption::Popular,
            SortOption::PriceLowToHigh,
            SortOption::PriceHighToLow,
        ]
    }

    /// Parse a control code. `ratingHighToLow` is an older name for `popular`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "recommended" => Some(SortOption::Recommended),
            "newestFirst" => Some(SortOption::NewestFirst),
            "popular" | "ratingHighToLow" => Some(SortOption::Popular),
            "priceLowToHigh" => Some(SortOption::PriceLowToHigh),
            "priceHighToLow" => Some(SortOption::PriceHighToLow),
            _ => None,
        }
    }

    /// Comparator for this option. `Recommended` treats every pair as equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Recommended => Ordering::Equal,
            SortOption::NewestFirst => b.id.cmp(&a.id),
            SortOption::Popular => b.rating.rate.total_cmp(&a.rating.rate),
            SortOption::PriceLowToHigh => a.price.total_cmp(&b.price),
            SortOption::PriceHighToLow => b.price.total_cmp(&a.price),
        }
    }

    /// Stable sort of `products` in place
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl ToString for SortOption {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
