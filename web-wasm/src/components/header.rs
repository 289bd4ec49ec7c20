//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"قاطع"</h1>
            <p class="text-muted">"صوّر المنتج أو ابحث باسمه لمعرفة إن كان ضمن المقاطعة"</p>
        </header>
    }
}
