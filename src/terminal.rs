//! 結果パネルの端末出力
//!
//! 処理中ブロックはスピナー、それ以外は1ブロック1行（代替商品は複数行）で出す。

use boycott_common::{PanelBlock, ResultPanel, ResultSink};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

#[derive(Default)]
pub struct TerminalSink {
    spinner: RefCell<Option<ProgressBar>>,
    panel: RefCell<ResultPanel>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直近に描画された内容
    pub fn panel(&self) -> ResultPanel {
        self.panel.borrow().clone()
    }

    /// スピナーを止める
    pub fn finish(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    fn show(&self, block: &PanelBlock) {
        match block {
            PanelBlock::Loading(text) => {
                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message(text.clone());
                spinner.enable_steady_tick(Duration::from_millis(100));
                *self.spinner.borrow_mut() = Some(spinner);
            }
            PanelBlock::Error(_) => {
                self.finish();
                eprintln!("❌ {}", block);
            }
            _ => {
                self.finish();
                println!("{}", block);
            }
        }
    }
}

impl ResultSink for TerminalSink {
    fn replace(&self, blocks: Vec<PanelBlock>) {
        self.finish();
        blocks.iter().for_each(|block| self.show(block));
        self.panel.borrow_mut().replace(blocks);
    }

    fn append(&self, block: PanelBlock) {
        self.show(&block);
        self.panel.borrow_mut().push(block);
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boycott_common::BoycottStatus;

    #[test]
    fn test_records_rendered_blocks() {
        let sink = TerminalSink::new();
        sink.replace(vec![PanelBlock::Loading("...".into())]);
        assert!(sink.panel().is_loading());

        sink.replace(vec![
            PanelBlock::Recognized("X".into()),
            PanelBlock::Badge(BoycottStatus::Boycotted),
        ]);
        sink.append(PanelBlock::Error("boom".into()));

        let panel = sink.panel();
        assert!(!panel.is_loading());
        assert_eq!(panel.badge(), Some(BoycottStatus::Boycotted));
        assert_eq!(panel.blocks().len(), 3);
    }
}
