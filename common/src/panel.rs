//! 結果パネル
//!
//! 画面とCLIが共有する結果表示モデル。フローはブロック列を書き込むだけで、
//! 描画方法は各アダプタ（Leptosコンポーネント / ターミナル）が決める。

use crate::messages;
use crate::types::Alternative;
use std::cell::RefCell;
use std::fmt;

/// ボイコット判定バッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoycottStatus {
    Boycotted,
    NotBoycotted,
}

impl BoycottStatus {
    pub fn from_flag(is_boycotted: bool) -> Self {
        if is_boycotted {
            BoycottStatus::Boycotted
        } else {
            BoycottStatus::NotBoycotted
        }
    }

    /// CSSクラス
    pub fn as_str(&self) -> &'static str {
        match self {
            BoycottStatus::Boycotted => "boycotted",
            BoycottStatus::NotBoycotted => "non-boycotted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoycottStatus::Boycotted => messages::BOYCOTTED,
            BoycottStatus::NotBoycotted => messages::NOT_BOYCOTTED,
        }
    }
}

/// パネルの1ブロック
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBlock {
    /// スピナー付きの処理中表示
    Loading(String),
    /// 案内文（画像未選択・未認識など）
    Text(String),
    /// ✅ 見出し
    Recognized(String),
    Badge(BoycottStatus),
    /// サーバーからの補足メッセージ
    Note(String),
    /// 代替商品の一覧（見出し付き、類似度があれば併記）
    Alternatives(Vec<Alternative>),
    Error(String),
}

impl fmt::Display for PanelBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelBlock::Loading(text)
            | PanelBlock::Text(text)
            | PanelBlock::Recognized(text)
            | PanelBlock::Note(text)
            | PanelBlock::Error(text) => write!(f, "{}", text),
            PanelBlock::Badge(status) => write!(f, "[{}]", status.label()),
            PanelBlock::Alternatives(alternatives) => {
                write!(f, "{}", messages::ALTERNATIVES_HEADER)?;
                for alternative in alternatives {
                    write!(f, "\n  - {}", alternative.name)?;
                    if let Some(score) = alternative.score_label() {
                        write!(f, " ({})", score)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// 結果パネルの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPanel {
    blocks: Vec<PanelBlock>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[PanelBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn replace(&mut self, blocks: Vec<PanelBlock>) {
        self.blocks = blocks;
    }

    pub fn push(&mut self, block: PanelBlock) {
        self.blocks.push(block);
    }

    pub fn is_loading(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, PanelBlock::Loading(_)))
    }

    pub fn badge(&self) -> Option<BoycottStatus> {
        self.blocks.iter().find_map(|b| match b {
            PanelBlock::Badge(status) => Some(*status),
            _ => None,
        })
    }

    /// プレーンテキスト（ブロックごとに改行）
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// フローが結果を書き込む先
///
/// `&self` で受けるのは、Leptosのシグナルや `RefCell` のような
/// 共有ハンドル越しに書き込むため。
pub trait ResultSink {
    /// パネルの内容を置き換える
    fn replace(&self, blocks: Vec<PanelBlock>);

    /// 現在の内容の後ろに追加する
    fn append(&self, block: PanelBlock);

    fn clear(&self) {
        self.replace(Vec::new());
    }
}

impl ResultSink for RefCell<ResultPanel> {
    fn replace(&self, blocks: Vec<PanelBlock>) {
        self.borrow_mut().replace(blocks);
    }

    fn append(&self, block: PanelBlock) {
        self.borrow_mut().push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(BoycottStatus::from_flag(true).as_str(), "boycotted");
        assert_eq!(BoycottStatus::from_flag(false).as_str(), "non-boycotted");
        assert_eq!(BoycottStatus::Boycotted.label(), messages::BOYCOTTED);
    }

    #[test]
    fn test_alternatives_display() {
        let block = PanelBlock::Alternatives(vec![
            Alternative {
                name: "A".into(),
                cosine_score: Some(0.876),
            },
            Alternative::new("B"),
        ]);
        let text = block.to_string();
        assert!(text.starts_with(messages::ALTERNATIVES_HEADER));
        assert!(text.contains("  - A (0.88)"));
        assert!(text.ends_with("  - B"));
    }

    #[test]
    fn test_refcell_sink_replace_then_append() {
        let panel = RefCell::new(ResultPanel::new());
        ResultSink::replace(&panel, vec![PanelBlock::Loading("...".into())]);
        assert!(panel.borrow().is_loading());

        panel.append(PanelBlock::Error("boom".into()));
        assert_eq!(panel.borrow().blocks().len(), 2);

        panel.clear();
        assert!(panel.borrow().is_empty());
    }

    #[test]
    fn test_badge_lookup() {
        let mut panel = ResultPanel::new();
        assert_eq!(panel.badge(), None);
        panel.push(PanelBlock::Recognized("✅ X".into()));
        panel.push(PanelBlock::Badge(BoycottStatus::Boycotted));
        assert_eq!(panel.badge(), Some(BoycottStatus::Boycotted));
        assert_eq!(panel.text(), format!("✅ X\n[{}]", messages::BOYCOTTED));
    }
}
