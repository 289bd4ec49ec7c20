//! 商品名検索セクション（入力補完付き）

use crate::api::FetchClient;
use crate::components::mode_switch::display;
use crate::components::result_panel::PanelSink;
use boycott_common::autocomplete::{self, AutocompleteTracker};
use boycott_common::{messages, search_product, Product, Suggestions, ViewState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SearchBox(
    state: RwSignal<ViewState>,
    tracker: StoredValue<AutocompleteTracker>,
    client: FetchClient,
) -> impl IntoView {
    let visible = move || state.with(|s| s.chrome().search_section_visible);

    let on_input = {
        let client = client.clone();
        move |ev: web_sys::Event| {
            let raw = event_target_value(&ev);
            state.update(|s| {
                s.query = raw.clone();
                s.suggestions = Suggestions::Hidden;
            });

            let Some(ticket) = tracker.try_update_value(|t| t.issue()) else {
                return;
            };
            if autocomplete::normalize_query(&raw).is_none() {
                return;
            }

            let client = client.clone();
            spawn_local(async move {
                let suggestions = autocomplete::lookup(&client, &raw, |err| {
                    let message = err.describe(messages::SUGGESTIONS_ERROR);
                    gloo::console::error!("Error fetching suggestions:", message);
                })
                .await;

                // 新しい入力があれば古い結果は捨てる
                if tracker.with_value(|t| t.is_current(ticket)) {
                    state.update(|s| s.suggestions = suggestions);
                }
            });
        }
    };

    view! {
        <section
            id="searchSection"
            class="search-section"
            style:display=move || display(visible())
        >
            <input
                type="text"
                id="productSearch"
                placeholder="اكتب اسم المنتج..."
                autocomplete="off"
                prop:value=move || state.with(|s| s.query.clone())
                on:input=on_input
            />
            <div id="autocompleteList" class="autocomplete-list">
                {move || {
                    let client = client.clone();
                    match state.with(|s| s.suggestions.clone()) {
                        Suggestions::Hidden => ().into_any(),
                        Suggestions::NoResults => view! {
                            <div class="autocomplete-item">{messages::NO_RESULTS}</div>
                        }
                        .into_any(),
                        Suggestions::Products(products) => products
                            .into_iter()
                            .map(|product| suggestion_row(product, state, tracker, client.clone()))
                            .collect_view()
                            .into_any(),
                    }
                }}
            </div>
        </section>
    }
}

/// 候補1行。選択すると検索ボックスを商品名にして認識フローを走らせる
fn suggestion_row(
    product: Product,
    state: RwSignal<ViewState>,
    tracker: StoredValue<AutocompleteTracker>,
    client: FetchClient,
) -> impl IntoView {
    let label = product.name.clone();

    let on_select = move |_: web_sys::MouseEvent| {
        state.update(|s| {
            s.query = product.name.clone();
            s.suggestions = Suggestions::Hidden;
        });
        tracker.update_value(|t| {
            t.issue();
        });

        let client = client.clone();
        let query = product.name.clone();
        let product_id = product.product_id.clone();
        spawn_local(async move {
            search_product(&client, &query, &product_id, &PanelSink(state)).await;
        });
    };

    view! {
        <div class="autocomplete-item" on:click=on_select>
            {label}
        </div>
    }
}
