//! 画面状態
//!
//! 「写真」「検索」の2モードと、モード切替時に消える入力・候補・プレビュー・
//! 結果パネルをひとまとめにした状態。DOMへの反映はWeb側の薄いアダプタが行う。

use crate::autocomplete::Suggestions;
use crate::panel::ResultPanel;

/// 入力モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Photo,
    Search,
}

/// モードから決まる表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub photo_button_active: bool,
    pub search_button_active: bool,
    pub photo_section_visible: bool,
    pub search_section_visible: bool,
    /// 写真モードのみ表示
    pub warning_visible: bool,
}

/// 画面全体の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    /// 検索ボックスの値（未トリム）
    pub query: String,
    pub suggestions: Suggestions,
    /// 選択画像のData URL
    pub preview: Option<String>,
    pub panel: ResultPanel,
    /// モード切替ごとに進む。切替前に始まった画像読み込みを捨てるのに使う
    preview_epoch: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// モードを切り替え、両モードの入力と結果をクリアする
    ///
    /// 同じモードへの再切替でも同じ状態になる。
    pub fn switch_to(&mut self, mode: Mode) {
        self.mode = mode;
        self.query.clear();
        self.suggestions = Suggestions::Hidden;
        self.preview = None;
        self.panel.clear();
        self.preview_epoch = self.preview_epoch.wrapping_add(1);
    }

    /// 画像読み込みの開始時に呼び、戻り値を [`Self::apply_preview`] に渡す
    pub fn begin_preview(&self) -> u64 {
        self.preview_epoch
    }

    /// 読み込み結果をプレビューに反映する
    ///
    /// 読み込み中にモードを切り替えていたら（写真モードに戻っていても）捨てる。
    /// 同じモード内で読み込みが重なった場合は後に終わった方が残る。
    pub fn apply_preview(&mut self, epoch: u64, data_url: String) -> bool {
        if epoch != self.preview_epoch || self.mode != Mode::Photo {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    pub fn switch_to_photo(&mut self) {
        self.switch_to(Mode::Photo);
    }

    pub fn switch_to_search(&mut self) {
        self.switch_to(Mode::Search);
    }

    pub fn chrome(&self) -> Chrome {
        let photo = self.mode == Mode::Photo;
        Chrome {
            photo_button_active: photo,
            search_button_active: !photo,
            photo_section_visible: photo,
            search_section_visible: !photo,
            warning_visible: photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelBlock;
    use crate::types::{Product, ProductId};

    fn dirty_state(mode: Mode) -> ViewState {
        let mut state = ViewState {
            mode,
            query: "pep".to_string(),
            suggestions: Suggestions::Products(vec![Product {
                product_id: ProductId::Number(1),
                name: "Pepsi".to_string(),
                is_boycotted: None,
            }]),
            preview: Some("data:image/png;base64,AAAA".to_string()),
            panel: ResultPanel::new(),
            preview_epoch: 0,
        };
        state.panel.push(PanelBlock::Recognized("✅ Pepsi".to_string()));
        state
    }

    fn assert_cleared(state: &ViewState) {
        assert!(state.query.is_empty());
        assert_eq!(state.suggestions, Suggestions::Hidden);
        assert!(state.preview.is_none());
        assert!(state.panel.is_empty());
    }

    #[test]
    fn test_default_is_photo() {
        let state = ViewState::new();
        assert_eq!(state.mode, Mode::Photo);
        assert!(state.chrome().photo_section_visible);
    }

    #[test]
    fn test_switch_photo_to_search_clears() {
        let mut state = dirty_state(Mode::Photo);
        state.switch_to_search();
        assert_eq!(state.mode, Mode::Search);
        assert_cleared(&state);
    }

    #[test]
    fn test_switch_search_to_photo_clears() {
        let mut state = dirty_state(Mode::Search);
        state.switch_to_photo();
        assert_eq!(state.mode, Mode::Photo);
        assert_cleared(&state);
    }

    #[test]
    fn test_switch_is_idempotent() {
        let mut once = dirty_state(Mode::Search);
        once.switch_to_photo();
        let mut twice = once.clone();
        twice.switch_to_photo();
        assert_eq!(once.mode, twice.mode);
        assert_eq!(once.chrome(), twice.chrome());
        assert_cleared(&twice);
    }

    #[test]
    fn test_preview_applied_in_photo_mode() {
        let mut state = ViewState::new();
        let epoch = state.begin_preview();
        assert!(state.apply_preview(epoch, "data:a".to_string()));
        assert_eq!(state.preview.as_deref(), Some("data:a"));
    }

    #[test]
    fn test_overlapping_reads_last_to_finish_wins() {
        let mut state = ViewState::new();
        let first = state.begin_preview();
        let second = state.begin_preview();

        assert!(state.apply_preview(second, "data:second".to_string()));
        assert!(state.apply_preview(first, "data:first".to_string()));
        assert_eq!(state.preview.as_deref(), Some("data:first"));
    }

    #[test]
    fn test_preview_dropped_after_leaving_photo_mode() {
        let mut state = ViewState::new();
        let epoch = state.begin_preview();
        state.switch_to_search();

        assert!(!state.apply_preview(epoch, "data:a".to_string()));
        assert!(state.preview.is_none());
    }

    /// 写真→検索→写真と戻っても、切替前の読み込みは反映しない
    #[test]
    fn test_preview_dropped_after_round_trip() {
        let mut state = ViewState::new();
        let stale = state.begin_preview();
        state.switch_to_search();
        state.switch_to_photo();

        assert!(!state.apply_preview(stale, "data:stale".to_string()));
        assert!(state.preview.is_none());

        let fresh = state.begin_preview();
        assert!(state.apply_preview(fresh, "data:fresh".to_string()));
        assert_eq!(state.preview.as_deref(), Some("data:fresh"));
    }

    #[test]
    fn test_chrome_photo() {
        let chrome = ViewState::new().chrome();
        assert_eq!(
            chrome,
            Chrome {
                photo_button_active: true,
                search_button_active: false,
                photo_section_visible: true,
                search_section_visible: false,
                warning_visible: true,
            }
        );
    }

    #[test]
    fn test_chrome_search_hides_warning() {
        let mut state = ViewState::new();
        state.switch_to_search();
        let chrome = state.chrome();
        assert!(chrome.search_button_active);
        assert!(!chrome.photo_button_active);
        assert!(chrome.search_section_visible);
        assert!(!chrome.photo_section_visible);
        assert!(!chrome.warning_visible);
    }
}
