//! モード切替ボタン

use boycott_common::{Mode, ViewState};
use leptos::prelude::*;

#[component]
pub fn ModeSwitch<FS>(state: RwSignal<ViewState>, on_switch: FS) -> impl IntoView
where
    FS: Fn(Mode) + 'static + Clone + Send + Sync,
{
    let chrome = move || state.with(|s| s.chrome());

    view! {
        <div class="mode-switch">
            <button
                id="photoButton"
                class="btn mode-button"
                class:active=move || chrome().photo_button_active
                on:click={
                    let on_switch = on_switch.clone();
                    move |_| on_switch(Mode::Photo)
                }
            >
                "📷 بالصورة"
            </button>
            <button
                id="searchButton"
                class="btn mode-button"
                class:active=move || chrome().search_button_active
                on:click={
                    let on_switch = on_switch.clone();
                    move |_| on_switch(Mode::Search)
                }
            >
                "🔍 بالاسم"
            </button>
        </div>
    }
}

/// `display` の値
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// 写真モードの注意書き
#[component]
pub fn PhotoWarning(state: RwSignal<ViewState>) -> impl IntoView {
    let visible = move || state.with(|s| s.chrome().warning_visible);

    view! {
        <div
            id="photoWarning"
            class="photo-warning"
            style:display=move || display(visible())
        >
            {boycott_common::messages::PHOTO_WARNING}
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_display_value() {
        assert_eq!(display(true), "block");
        assert_eq!(display(false), "none");
    }

    #[wasm_bindgen_test]
    fn test_sections_follow_mode() {
        let mut state = ViewState::new();
        assert_eq!(display(state.chrome().photo_section_visible), "block");
        assert_eq!(display(state.chrome().search_section_visible), "none");

        state.switch_to(Mode::Search);
        assert_eq!(display(state.chrome().photo_section_visible), "none");
        assert_eq!(display(state.chrome().warning_visible), "none");
    }
}
