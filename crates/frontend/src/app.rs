use crate::config::CatalogConfig;
use crate::domain::a001_catalog_product::ui::list::ProductList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::from_location();
    log::info!(
        "Product listing using {} (compact below {}px)",
        config.api_url,
        config.compact_breakpoint_px
    );
    provide_context(config);

    view! {
        <ConfigProvider>
            <ProductList />
        </ConfigProvider>
    }
}
