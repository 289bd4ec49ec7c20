//! メインアプリケーションコンポーネント

use crate::api::FetchClient;
use crate::components::{
    arrow_nav::ArrowNav,
    header::Header,
    mode_switch::{ModeSwitch, PhotoWarning},
    result_panel::{PanelSink, ResultPanelView},
    search_box::SearchBox,
    upload_area::{selected_file, UploadArea},
};
use boycott_common::{process_image, AutocompleteTracker, Mode, ViewState};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let state = RwSignal::new(ViewState::new());
    let tracker = StoredValue::new(AutocompleteTracker::new());
    let file_input = NodeRef::<html::Input>::new();
    let client = FetchClient::default();

    // モード切替ハンドラ
    let on_switch = move |mode: Mode| {
        state.update(|s| s.switch_to(mode));
        // 処理中の候補リクエストを無効化
        tracker.update_value(|t| {
            t.issue();
        });
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    // 画像認識ハンドラ
    let on_process = {
        let client = client.clone();
        move |_: ()| {
            let file = selected_file(file_input.get_untracked());
            let client = client.clone();
            spawn_local(async move {
                process_image(&client, file.as_ref(), &PanelSink(state)).await;
            });
        }
    };

    view! {
        <div class="container">
            <Header />

            <ModeSwitch state=state on_switch=on_switch />
            <PhotoWarning state=state />

            <UploadArea state=state file_input=file_input on_process=on_process />
            <SearchBox state=state tracker=tracker client=client />

            <ResultPanelView state=state />

            <ArrowNav />
        </div>
    }
}
