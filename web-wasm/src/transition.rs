//! ページ遷移エフェクト（DOM）
//!
//! `.arrow-nav a` のクリックを横取りし、オーバーレイのアニメーションを再生してから
//! 遷移する。段階と時刻は [`PageTransition`] が持ち、ここではタイマーとDOMだけを扱う。
//!
//! クリックごとに1本のタイマーチェーンを持つ。タイマーが遅れても経過時間で
//! 追いつく。`pagehide` では全チェーンを止め、追加済みのレイヤーも外す。

use boycott_common::messages;
use boycott_common::transition::{trim_slashes, NAV_SELECTOR};
use boycott_common::{PageTransition, TransitionAction};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

const OVERLAY_CLASS: &str = "overlay";
const EXPAND_CLASS: &str = "red-expand";
const MESSAGE_CLASS: &str = "overlay-message";

thread_local! {
    static CHAINS: RefCell<HashMap<u64, Chain>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// 実行中の1本
struct Chain {
    run: Rc<RefCell<Run>>,
    /// 次のステップ（dropでキャンセル）
    _timer: Timeout,
}

/// エフェクトで追加する要素
struct Layers {
    overlay: Element,
    expand: Element,
    message: Element,
}

impl Layers {
    fn create(document: &Document) -> Result<Self, JsValue> {
        let overlay = document.create_element("div")?;
        overlay.class_list().add_1(OVERLAY_CLASS)?;

        let expand = document.create_element("div")?;
        expand.class_list().add_1(EXPAND_CLASS)?;

        let message = document.create_element("div")?;
        message.class_list().add_1(MESSAGE_CLASS)?;
        message.set_text_content(Some(messages::TRANSITION_MESSAGE));
        overlay.append_child(&message)?;

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&overlay)?;
        body.append_child(&expand)?;

        Ok(Self {
            overlay,
            expand,
            message,
        })
    }

    fn remove(&self) {
        self.overlay.remove();
        self.expand.remove();
    }
}

/// 1クリック分の実行状態
struct Run {
    id: u64,
    /// クリック時刻（`Date.now()`）
    started: f64,
    transition: PageTransition,
    layers: Option<Layers>,
}

impl Run {
    fn elapsed(&self) -> Duration {
        Duration::from_millis((js_sys::Date::now() - self.started).max(0.0) as u64)
    }

    /// 残りのステップを破棄し、追加済みのレイヤーを外す
    fn cancel(&mut self) {
        self.transition.cancel();
        if let Some(layers) = self.layers.take() {
            layers.remove();
        }
    }

    fn apply(&mut self, action: TransitionAction) -> Result<(), JsValue> {
        match action {
            TransitionAction::Mount => {
                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .ok_or_else(|| JsValue::from_str("document is not available"))?;
                self.layers = Some(Layers::create(&document)?);
            }
            TransitionAction::Activate => {
                if let Some(layers) = &self.layers {
                    layers.overlay.class_list().add_1("active")?;
                    layers.expand.class_list().add_1("expand")?;
                }
            }
            TransitionAction::Navigate => {
                if let Some(window) = web_sys::window() {
                    window.location().set_href(self.transition.href())?;
                }
            }
            TransitionAction::FadeMessage => {
                if let Some(layers) = &self.layers {
                    layers.message.class_list().add_1("fade-out")?;
                }
            }
            TransitionAction::Exit => {
                if let Some(layers) = &self.layers {
                    layers.overlay.class_list().add_1("slide-right")?;
                    layers.expand.class_list().add_1("fly")?;
                }
            }
            TransitionAction::Remove => {
                if let Some(layers) = self.layers.take() {
                    layers.remove();
                }
            }
        }
        Ok(())
    }
}

/// 期限の来たステップを実行し、次のステップのタイマーを仕掛ける
fn step(run: Rc<RefCell<Run>>) {
    let (id, delay) = {
        let mut state = run.borrow_mut();
        let elapsed = state.elapsed();
        let actions = state.transition.advance_to(elapsed);
        for action in actions {
            if let Err(err) = state.apply(action) {
                gloo::console::error!("Page transition step failed:", err);
            }
        }

        let delay = if state.transition.is_finished() {
            None
        } else {
            let elapsed = state.elapsed();
            state.transition.delay_from(elapsed)
        };
        (state.id, delay)
    };

    match delay {
        Some(delay) => {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let next = Rc::clone(&run);
            let timer = Timeout::new(millis, move || step(next));
            CHAINS.with(|chains| {
                chains.borrow_mut().insert(id, Chain { run, _timer: timer });
            });
        }
        None => {
            CHAINS.with(|chains| chains.borrow_mut().remove(&id));
        }
    }
}

/// エフェクトを再生して `href` へ遷移する
///
/// 連続クリックは重複排除せず、それぞれ独立に再生する。
pub fn play(href: &str) {
    let current = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    gloo::console::log!("Navigating from:", trim_slashes(&current), "to:", href);

    let Some(transition) = PageTransition::new(href) else {
        gloo::console::error!("Invalid href:", href);
        return;
    };

    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    step(Rc::new(RefCell::new(Run {
        id,
        started: js_sys::Date::now(),
        transition,
        layers: None,
    })));
}

/// 実行中のチェーンをすべて止め、画面に残ったレイヤーを外す
pub fn cancel_all() {
    let chains: Vec<Chain> =
        CHAINS.with(|chains| chains.borrow_mut().drain().map(|(_, chain)| chain).collect());
    for chain in chains {
        chain.run.borrow_mut().cancel();
    }
}

/// ナビゲーションリンクにエフェクトを仕掛ける
///
/// リンクがなければ何もしない。戻り値のリスナーはページの寿命だけ保持する。
pub fn install() -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let links = document.query_selector_all(NAV_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let href = link.get_attribute("href").unwrap_or_default();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                play(&href);
            },
        )
        .forget();
    }

    EventListener::new(&window, "pagehide", |_| cancel_all()).forget();

    Ok(links.length() as usize)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        gloo::utils::document()
    }

    fn count(selector: &str) -> u32 {
        document()
            .query_selector_all(selector)
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    fn live_chains() -> usize {
        CHAINS.with(|chains| chains.borrow().len())
    }

    /// `<nav class="arrow-nav"><a href=...></a></nav>` をbodyに追加
    fn mount_nav(href: &str) -> (Element, Element) {
        let nav = document().create_element("nav").expect("create nav");
        nav.set_class_name("arrow-nav");
        let link = document().create_element("a").expect("create link");
        link.set_attribute("href", href).expect("set href");
        nav.append_child(&link).expect("append link");
        document().body().expect("body").append_child(&nav).expect("append nav");
        (nav, link)
    }

    fn click() -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).expect("click event")
    }

    #[wasm_bindgen_test]
    fn test_click_prevents_default_and_mounts_layers() {
        let (nav, link) = mount_nav("#next");
        assert!(install().expect("install") >= 1);

        let event = click();
        let proceed = link.dispatch_event(&event).expect("dispatch");

        assert!(!proceed);
        assert!(event.default_prevented());
        assert_eq!(count(".overlay"), 1);
        assert_eq!(count(".red-expand"), 1);
        assert_eq!(count(".overlay .overlay-message"), 1);
        assert_eq!(live_chains(), 1);

        cancel_all();
        nav.remove();
    }

    /// ページ離脱時は途中のエフェクトも画面から消える
    #[wasm_bindgen_test]
    fn test_cancel_all_removes_mounted_layers() {
        play("#a");
        play("#b");
        assert_eq!(count(".overlay"), 2);
        assert_eq!(count(".red-expand"), 2);
        assert_eq!(live_chains(), 2);

        cancel_all();

        assert_eq!(count(".overlay"), 0);
        assert_eq!(count(".red-expand"), 0);
        assert_eq!(live_chains(), 0);
    }

    #[wasm_bindgen_test]
    fn test_empty_href_plays_nothing() {
        play("");
        assert_eq!(count(".overlay"), 0);
        assert_eq!(live_chains(), 0);
    }
}
