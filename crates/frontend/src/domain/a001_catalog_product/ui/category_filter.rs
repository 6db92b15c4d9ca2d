use super::list::state::{CategorySelection, ALL_CATEGORIES};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Checkbox list of categories preceded by `All`.
///
/// Every change reports the complete selection, never a delta.
#[component]
pub fn CategoryFilter(
    /// Categories available in the loaded collection
    #[prop(into)]
    categories: Signal<Vec<String>>,
    /// Current selection, reflected in the checkboxes
    #[prop(into)]
    selection: Signal<CategorySelection>,
    on_change: Callback<CategorySelection>,
) -> impl IntoView {
    let toggle = move |label: String, checked: bool| {
        let mut labels: Vec<String> = selection
            .get_untracked()
            .labels()
            .filter(|l| *l != label)
            .map(str::to_string)
            .collect();
        if checked {
            labels.push(label);
        }
        on_change.run(CategorySelection::new(labels));
    };

    let options = move || {
        let mut all = vec![ALL_CATEGORIES.to_string()];
        all.extend(categories.get());
        all
    };

    view! {
        <div class="category-filter">
            <div class="category-filter__title">
                {icon("filter")}
                <span>"Category"</span>
            </div>
            <For
                each=options
                key=|label| label.clone()
                children=move |label| {
                    let checkbox_id = format!("category-{}", label.replace(' ', "-"));
                    let label_for_check = label.clone();
                    let label_for_change = label.clone();
                    let is_checked = move || selection.get().contains(&label_for_check);
                    view! {
                        <div class="form__checkbox-wrapper">
                            <input
                                id=checkbox_id.clone()
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=is_checked
                                on:change=move |ev| {
                                    toggle(label_for_change.clone(), event_target_checked(&ev));
                                }
                            />
                            <label class="form__checkbox-label" for=checkbox_id>
                                {label}
                            </label>
                        </div>
                    }
                }
            />
        </div>
    }
}
