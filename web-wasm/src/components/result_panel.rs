//! 結果パネルコンポーネント

use boycott_common::{messages, PanelBlock, ResultSink, ViewState};
use leptos::prelude::*;

/// フローの書き込み先（画面状態のパネル）
#[derive(Clone, Copy)]
pub struct PanelSink(pub RwSignal<ViewState>);

impl ResultSink for PanelSink {
    fn replace(&self, blocks: Vec<PanelBlock>) {
        self.0.update(|s| s.panel.replace(blocks));
    }

    fn append(&self, block: PanelBlock) {
        self.0.update(|s| s.panel.push(block));
    }
}

#[component]
pub fn ResultPanelView(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div id="result" class="result">
            {move || {
                state
                    .with(|s| s.panel.blocks().to_vec())
                    .into_iter()
                    .map(render_block)
                    .collect_view()
            }}
        </div>
    }
}

fn render_block(block: PanelBlock) -> AnyView {
    match block {
        PanelBlock::Loading(text) => view! {
            <div class="spinner"></div>
            {text}
        }
        .into_any(),
        PanelBlock::Text(text) | PanelBlock::Recognized(text) => view! {
            <span>{text}</span>
        }
        .into_any(),
        PanelBlock::Badge(status) => view! {
            <span class=format!("status-circle {}", status.as_str())>{status.label()}</span>
        }
        .into_any(),
        PanelBlock::Note(text) => view! { <p class="status-message">{text}</p> }.into_any(),
        PanelBlock::Alternatives(alternatives) => view! {
            <h3>{messages::ALTERNATIVES_HEADER}</h3>
            <ul>
                {alternatives
                    .into_iter()
                    .map(|alternative| {
                        let score = alternative.score_label().map(|score| view! {
                            <span class="cosine-score">{format!(" ({})", score)}</span>
                        });
                        view! { <li>{alternative.name}{score}</li> }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        PanelBlock::Error(text) => view! { <p class="error">{text}</p> }.into_any(),
    }
}
