//! 写真アップロードセクション

use crate::components::mode_switch::display;
use boycott_common::ViewState;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea<FP>(
    state: RwSignal<ViewState>,
    file_input: NodeRef<html::Input>,
    on_process: FP,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone + Send + Sync,
{
    let visible = move || state.with(|s| s.chrome().photo_section_visible);

    let on_change = move |_: web_sys::Event| {
        if let Err(err) = preview_selection(file_input.get_untracked(), state) {
            gloo::console::error!("Failed to read image:", err);
        }
    };

    view! {
        <section
            id="photoSection"
            class="photo-section"
            style:display=move || display(visible())
        >
            <label class="upload-area" for="productImage">
                <div class="upload-icon">"📷"</div>
                <p>"اختر صورة المنتج"</p>
                <p class="text-muted">"JPEG, PNG"</p>
            </label>
            <input
                type="file"
                id="productImage"
                accept="image/*"
                node_ref=file_input
                on:change=on_change
            />

            <div id="imagePreview" class="image-preview">
                {move || state.with(|s| s.preview.clone()).map(|src| view! {
                    <img src=src alt="Uploaded Image" class="preview-image" />
                })}
            </div>

            <button
                class="btn btn-primary"
                on:click={
                    let on_process = on_process.clone();
                    move |_| on_process(())
                }
            >
                "تحقق من المنتج"
            </button>
        </section>
    }
}

/// 選択中の先頭ファイル
pub fn selected_file(input: Option<HtmlInputElement>) -> Option<File> {
    input.and_then(|input| input.files()).and_then(|files| files.get(0))
}

/// 選択ファイルのプレビューを読み始める。未選択なら何もしない
///
/// 読み込みを始めたかどうかを返す。
fn preview_selection(
    input: Option<HtmlInputElement>,
    state: RwSignal<ViewState>,
) -> Result<bool, JsValue> {
    let Some(file) = selected_file(input) else {
        return Ok(false);
    };
    read_preview(file, state)?;
    Ok(true)
}

/// 画像をData URLとして読み、プレビューに反映
///
/// 読み込みが重なった場合は後に終わった方が残る。
/// 読み終わる前にモードを切り替えていたら反映しない。
fn read_preview(file: File, state: RwSignal<ViewState>) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let epoch = state.with_untracked(|s| s.begin_preview());

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            state.update(|s| {
                s.apply_preview(epoch, data_url);
            });
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_data_url(&file)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file_input() -> HtmlInputElement {
        let input: HtmlInputElement = gloo::utils::document()
            .create_element("input")
            .expect("create input")
            .dyn_into()
            .expect("input element");
        input.set_type("file");
        input
    }

    #[wasm_bindgen_test]
    fn test_no_file_selected() {
        assert!(selected_file(None).is_none());
        assert!(selected_file(Some(file_input())).is_none());
    }

    #[wasm_bindgen_test]
    fn test_preview_without_file_is_noop() {
        let state = RwSignal::new(ViewState::new());

        let started = preview_selection(Some(file_input()), state).expect("no error");

        assert!(!started);
        assert!(state.with_untracked(|s| s.preview.is_none()));
    }
}
