//! ナビゲーション矢印
//!
//! クリック時のエフェクトは [`crate::transition::install`] が付ける。

use leptos::prelude::*;

/// (href, 表示, ラベル)
pub const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("/report.html", "→", "صفحة الإبلاغ"),
    ("/about.html", "←", "عن الحملة"),
];

#[component]
pub fn ArrowNav() -> impl IntoView {
    view! {
        <nav class="arrow-nav">
            {NAV_LINKS
                .iter()
                .map(|(href, arrow, label)| view! {
                    <a href=*href title=*label>{*arrow}</a>
                })
                .collect_view()}
        </nav>
    }
}
