pub mod state;

use self::state::{create_state, CategorySelection};
use super::card::ProductCard;
use super::category_filter::CategoryFilter;
use crate::config::CatalogConfig;
use crate::domain::a001_catalog_product::api::fetch_catalog;
use crate::shared::icons::icon;
use crate::shared::viewport::use_is_compact;
use contracts::enums::sort_option::SortOption;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let state = create_state();
    let is_compact = use_is_compact(config.compact_breakpoint_px);

    // One load attempt per activation, no retry
    if state.try_update(|s| s.begin_load()).unwrap_or(false) {
        let url = config.api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_catalog(&url).await;
            if let Err(e) = &result {
                log::error!("Error fetching products: {}", e);
            }
            // The list may have been torn down while the request was in flight
            if state.try_update(|s| s.finish_load(result)).is_none() {
                log::debug!("Product list disposed before the catalog arrived, dropping response");
            }
        });
    }

    let visible = Memo::new(move |_| state.with(|s| s.visible_products()));
    let item_count = move || state.with(|s| s.visible_count());
    let categories = Signal::derive(move || state.with(|s| s.categories()));
    let selection = Signal::derive(move || state.with(|s| s.selection().clone()));

    let on_category_change = Callback::new(move |next: CategorySelection| {
        log::debug!(
            "Selected categories: {:?}",
            next.labels().collect::<Vec<_>>()
        );
        state.update(|s| s.change_category_selection(next));
    });

    let on_sort_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        state.update(|s| {
            s.change_sort_code(&code);
        });
    };

    let sidebar_shown = move || state.with(|s| s.sidebar_shown(is_compact.get()));
    let overlay_shown = move || state.with(|s| s.overlay_shown(is_compact.get()));

    view! {
        <div class="product-listing">
            <div class="product-listing__top-bar">
                <div class="product-listing__count">
                    {move || format!("{} items", item_count())}
                </div>

                {move || {
                    if is_compact.get() {
                        view! {
                            <button
                                class="product-listing__filter-btn"
                                on:click=move |_| state.update(|s| s.toggle_overlay())
                            >
                                "FILTERS"
                            </button>
                        }
                            .into_any()
                    } else {
                        let shown = state.with(|s| s.panels().sidebar_visible);
                        view! {
                            <button
                                class="product-listing__hide-filter-btn"
                                on:click=move |_| state.update(|s| s.toggle_sidebar())
                            >
                                {if shown { icon("chevron-left") } else { icon("chevron-right") }}
                                <span>{if shown { "Hide Filter" } else { "Show Filter" }}</span>
                            </button>
                        }
                            .into_any()
                    }
                }}

                <div class="product-listing__sort">
                    <select class="form__select" on:change=on_sort_change>
                        {SortOption::all()
                            .into_iter()
                            .map(|option| {
                                let is_selected = move || state.with(|s| s.sort_option()) == option;
                                view! {
                                    <option value=option.code() selected=is_selected>
                                        {option.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="product-listing__content">
                <Show when=sidebar_shown>
                    <aside class="product-listing__sidebar">
                        <CategoryFilter
                            categories=categories
                            selection=selection
                            on_change=on_category_change
                        />
                    </aside>
                </Show>

                <section class="product-listing__products">
                    <div class="product-listing__grid">
                        <For
                            each=move || visible.get().into_iter().enumerate()
                            key=|(_, product)| product.id
                            children=move |(index, product)| {
                                view! { <ProductCard product=product index=index /> }
                            }
                        />
                    </div>

                    <Show when=overlay_shown>
                        <div class="product-listing__overlay">
                            <button
                                class="product-listing__overlay-close"
                                title="Close"
                                on:click=move |_| state.update(|s| s.toggle_overlay())
                            >
                                {icon("x")}
                            </button>
                            <CategoryFilter
                                categories=categories
                                selection=selection
                                on_change=on_category_change
                            />
                        </div>
                    </Show>
                </section>
            </div>
        </div>
    }
}
