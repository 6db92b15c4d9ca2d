use contracts::domain::a001_catalog_product::aggregate::Product;
use contracts::enums::sort_option::SortOption;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Selecting this label disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Categories the user chose to include.
///
/// Empty, or containing [`ALL_CATEGORIES`], means "show everything".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection(BTreeSet<String>);

impl CategorySelection {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.0.is_empty() || self.0.contains(ALL_CATEGORIES)
    }

    pub fn includes(&self, category: &str) -> bool {
        self.is_unfiltered() || self.0.contains(category)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Visibility of the inline sidebar and of the compact overlay.
///
/// Both flags keep their value across layout switches; the compact signal
/// only decides which one is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVisibility {
    pub sidebar_visible: bool,
    pub overlay_visible: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            sidebar_visible: true,
            overlay_visible: false,
        }
    }
}

impl PanelVisibility {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_visible = !self.overlay_visible;
    }

    pub fn sidebar_shown(&self, compact: bool) -> bool {
        !compact && self.sidebar_visible
    }

    pub fn overlay_shown(&self, compact: bool) -> bool {
        compact && self.overlay_visible
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// State of the product listing: fetched collection, sort, category filter
/// and panel flags. The visible list is always derived, never stored.
#[derive(Clone, Debug, Default)]
pub struct ListingViewState {
    // Collection in its current display order
    products: Vec<Product>,

    sort_option: SortOption,
    selection: CategorySelection,
    panels: PanelVisibility,
    status: LoadStatus,
}

impl ListingViewState {
    /// Mark the single load attempt as started.
    ///
    /// Returns `false` if a load was already attempted for this state.
    pub fn begin_load(&mut self) -> bool {
        if self.status != LoadStatus::Idle {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Apply the fetch outcome. On failure the collection stays empty.
    ///
    /// A sort chosen while the request was in flight is applied to the
    /// arriving collection so the control and the order agree.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, String>) {
        match result {
            Ok(mut products) => {
                self.sort_option.sort(&mut products);
                self.products = products;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.products.clear();
                self.status = LoadStatus::Failed(e);
            }
        }
    }

    /// Reorder the stored collection.
    ///
    /// The new order replaces the old one: `Recommended` afterwards keeps
    /// whatever order the previous sort left.
    pub fn change_sort(&mut self, option: SortOption) {
        self.sort_option = option;
        let mut sorted = self.products.clone();
        option.sort(&mut sorted);
        self.products = sorted;
    }

    /// Sort by control code. Unknown codes leave order and option untouched.
    pub fn change_sort_code(&mut self, code: &str) -> bool {
        match SortOption::from_code(code) {
            Some(option) => {
                self.change_sort(option);
                true
            }
            None => {
                log::debug!("Ignoring unknown sort option '{}'", code);
                false
            }
        }
    }

    /// Replace the category selection. The collection is not touched.
    pub fn change_category_selection(&mut self, selection: CategorySelection) {
        self.selection = selection;
    }

    /// Products passing the category filter, in current sort order
    pub fn visible_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| self.selection.includes(&p.category))
            .cloned()
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| self.selection.includes(&p.category))
            .count()
    }

    /// Distinct categories of the collection in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    pub fn toggle_sidebar(&mut self) {
        self.panels.toggle_sidebar();
    }

    pub fn toggle_overlay(&mut self) {
        self.panels.toggle_overlay();
    }

    pub fn sidebar_shown(&self, compact: bool) -> bool {
        self.panels.sidebar_shown(compact)
    }

    pub fn overlay_shown(&self, compact: bool) -> bool {
        self.panels.overlay_shown(compact)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

pub fn create_state() -> RwSignal<ListingViewState> {
    RwSignal::new(ListingViewState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalog_product::aggregate::Rating;

    fn product(id: i64, price: f64, category: &str, rate: f64) -> Product {
        Product {
            id,
            title: format!("Item {}", id),
            image: String::new(),
            description: String::new(),
            price,
            category: category.to_string(),
            rating: Rating { rate, count: 1 },
            label: None,
        }
    }

    fn loaded(products: Vec<Product>) -> ListingViewState {
        let mut state = ListingViewState::default();
        assert!(state.begin_load());
        state.finish_load(Ok(products));
        state
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, 109.95, "men's clothing", 3.9),
            product(2, 22.3, "men's clothing", 4.1),
            product(3, 695.0, "jewelery", 4.6),
            product(4, 64.0, "Electronics", 3.3),
            product(5, 9.85, "Electronics", 2.1),
            product(6, 39.99, "women's clothing", 3.8),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    fn sorted_ids(products: &[Product]) -> Vec<i64> {
        let mut v = ids(products);
        v.sort();
        v
    }

    #[test]
    fn test_initial_state() {
        let state = ListingViewState::default();
        assert_eq!(state.status(), &LoadStatus::Idle);
        assert!(state.visible_products().is_empty());
        assert_eq!(state.sort_option(), SortOption::Recommended);
        assert!(state.panels().sidebar_visible);
        assert!(!state.panels().overlay_visible);
    }

    #[test]
    fn test_single_load_attempt() {
        let mut state = ListingViewState::default();
        assert!(state.begin_load());
        assert!(!state.begin_load());
        state.finish_load(Ok(catalog()));
        assert_eq!(state.status(), &LoadStatus::Loaded);
        assert!(!state.begin_load());
    }

    #[test]
    fn test_loaded_collection_keeps_source_order() {
        let state = loaded(catalog());
        assert_eq!(ids(&state.visible_products()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(state.visible_count(), 6);
    }

    #[test]
    fn test_result_after_teardown_is_discarded() {
        let owner = Owner::new();
        let state = owner.with(create_state);
        assert_eq!(state.try_update(|s| s.begin_load()), Some(true));
        drop(owner);

        assert!(state.try_update(|s| s.finish_load(Ok(catalog()))).is_none());
    }

    #[test]
    fn test_result_before_teardown_is_applied() {
        let owner = Owner::new();
        let state = owner.with(create_state);
        state.update(|s| {
            s.begin_load();
        });

        assert!(state.try_update(|s| s.finish_load(Ok(catalog()))).is_some());
        assert_eq!(state.with(|s| s.visible_count()), 6);
    }

    #[test]
    fn test_failed_fetch_leaves_empty_list() {
        let mut state = ListingViewState::default();
        state.begin_load();
        state.finish_load(Err("HTTP 500".to_string()));
        assert!(state.visible_products().is_empty());
        assert_eq!(state.visible_count(), 0);
        assert_eq!(state.status(), &LoadStatus::Failed("HTTP 500".to_string()));
    }

    #[test]
    fn test_sort_chosen_before_load_applies_on_arrival() {
        let mut state = ListingViewState::default();
        state.begin_load();
        state.change_sort(SortOption::PriceLowToHigh);
        state.finish_load(Ok(catalog()));
        assert_eq!(ids(&state.visible_products()), vec![5, 2, 6, 4, 1, 3]);
    }

    #[test]
    fn test_sort_never_changes_the_multiset() {
        let mut state = loaded(catalog());
        for option in SortOption::all() {
            state.change_sort(option);
            assert_eq!(sorted_ids(&state.visible_products()), vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_price_orders_are_reverses() {
        let mut state = loaded(catalog());
        state.change_sort(SortOption::PriceLowToHigh);
        let mut ascending = ids(&state.visible_products());
        state.change_sort(SortOption::PriceHighToLow);
        let descending = ids(&state.visible_products());
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_popular_and_newest() {
        let mut state = loaded(catalog());
        state.change_sort(SortOption::Popular);
        assert_eq!(ids(&state.visible_products()), vec![3, 2, 1, 6, 4, 5]);
        state.change_sort(SortOption::NewestFirst);
        assert_eq!(ids(&state.visible_products()), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_recommended_after_sort_keeps_last_order() {
        let mut state = loaded(catalog());
        state.change_sort(SortOption::NewestFirst);
        state.change_sort(SortOption::Recommended);
        assert_eq!(state.sort_option(), SortOption::Recommended);
        assert_eq!(ids(&state.visible_products()), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_unknown_sort_code_is_a_no_op() {
        let mut state = loaded(catalog());
        state.change_sort(SortOption::PriceHighToLow);
        let before = ids(&state.visible_products());

        assert!(!state.change_sort_code("alphabetical"));
        assert_eq!(state.sort_option(), SortOption::PriceHighToLow);
        assert_eq!(ids(&state.visible_products()), before);

        assert!(state.change_sort_code("ratingHighToLow"));
        assert_eq!(state.sort_option(), SortOption::Popular);
    }

    #[test]
    fn test_empty_and_all_selection_show_everything() {
        let mut state = loaded(catalog());
        state.change_category_selection(CategorySelection::new(["jewelery"]));
        assert_eq!(state.visible_count(), 1);

        state.change_category_selection(CategorySelection::default());
        assert_eq!(ids(&state.visible_products()), ids(state.products()));

        state.change_category_selection(CategorySelection::new(["jewelery"]));
        state.change_category_selection(CategorySelection::new([ALL_CATEGORIES, "jewelery"]));
        assert_eq!(ids(&state.visible_products()), ids(state.products()));
    }

    #[test]
    fn test_category_filter_preserves_sort_order() {
        let mut state = loaded(catalog());
        state.change_sort(SortOption::PriceHighToLow);
        state.change_category_selection(CategorySelection::new(["Electronics"]));

        let visible = state.visible_products();
        assert!(visible.iter().all(|p| p.category == "Electronics"));
        assert_eq!(ids(&visible), vec![4, 5]);

        state.change_sort(SortOption::PriceLowToHigh);
        assert_eq!(ids(&state.visible_products()), vec![5, 4]);
    }

    #[test]
    fn test_unmatched_category_yields_empty_view() {
        let mut state = loaded(catalog());
        state.change_category_selection(CategorySelection::new(["garden"]));
        assert!(state.visible_products().is_empty());
        assert_eq!(state.products().len(), 6);
    }

    #[test]
    fn test_count_matches_visible_list() {
        let mut state = loaded(catalog());
        for labels in [vec![], vec!["Electronics"], vec!["jewelery", "men's clothing"]] {
            state.change_category_selection(CategorySelection::new(labels));
            assert_eq!(state.visible_count(), state.visible_products().len());
        }
    }

    #[test]
    fn test_two_item_scenario() {
        let mut state = loaded(vec![product(1, 10.0, "A", 4.0), product(2, 5.0, "B", 2.0)]);
        state.change_sort(SortOption::PriceLowToHigh);
        assert_eq!(ids(&state.visible_products()), vec![2, 1]);

        state.change_category_selection(CategorySelection::new(["A"]));
        assert_eq!(ids(&state.visible_products()), vec![1]);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let state = loaded(catalog());
        assert_eq!(
            state.categories(),
            vec!["men's clothing", "jewelery", "Electronics", "women's clothing"]
        );
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut state = ListingViewState::default();
        let initial = state.panels();
        state.toggle_sidebar();
        assert!(!state.panels().sidebar_visible);
        state.toggle_sidebar();
        state.toggle_overlay();
        assert!(state.panels().overlay_visible);
        state.toggle_overlay();
        assert_eq!(state.panels(), initial);
    }

    #[test]
    fn test_panel_flags_gated_by_compact_signal() {
        let mut state = ListingViewState::default();
        assert!(state.sidebar_shown(false));
        assert!(!state.sidebar_shown(true));
        assert!(!state.overlay_shown(true));

        state.toggle_overlay();
        assert!(state.overlay_shown(true));
        assert!(!state.overlay_shown(false));

        // Switching layouts does not reset the other flag
        state.toggle_sidebar();
        assert!(!state.sidebar_shown(false));
        assert!(state.overlay_shown(true));
    }
}
