//! ページ遷移エフェクトのタイムライン
//!
//! ナビゲーションリンクのクリックごとに1本のタイムラインを進める。
//!
//! ```text
//! Idle -> Mounted -> Entering -> Navigated -> FadingMessage -> Exiting -> Removed
//!   t=0ms    t=50ms     t=1500ms    t=3000ms        t=4000ms     t=4500ms
//! ```
//!
//! 実際のタイマーとDOM操作はWeb側が担当し、ここでは段階と時刻だけを持つ。
//! 同時に複数のタイムラインが走ってもよい（互いに干渉しない）。

use std::time::Duration;

/// ナビゲーション領域のリンク
pub const NAV_SELECTOR: &str = ".arrow-nav a";

/// 段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    /// オーバーレイを追加済み
    Mounted,
    /// enterトランジション中
    Entering,
    /// 遷移先へ移動済み（アニメーションは継続）
    Navigated,
    FadingMessage,
    Exiting,
    Removed,
}

/// 各時刻で行う操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    /// オーバーレイと拡大レイヤーを追加
    Mount,
    /// `active` / `expand` を付与
    Activate,
    /// `location.href` を書き換え
    Navigate,
    /// メッセージに `fade-out`
    FadeMessage,
    /// `slide-right` / `fly`
    Exit,
    /// 両レイヤーを削除
    Remove,
}

impl TransitionAction {
    /// 操作後の段階
    pub fn phase(self) -> TransitionPhase {
        match self {
            TransitionAction::Mount => TransitionPhase::Mounted,
            TransitionAction::Activate => TransitionPhase::Entering,
            TransitionAction::Navigate => TransitionPhase::Navigated,
            TransitionAction::FadeMessage => TransitionPhase::FadingMessage,
            TransitionAction::Exit => TransitionPhase::Exiting,
            TransitionAction::Remove => TransitionPhase::Removed,
        }
    }
}

/// タイムラインの1ステップ（クリックからの経過時間）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionStep {
    pub at: Duration,
    pub action: TransitionAction,
}

pub const TIMELINE: [TransitionStep; 6] = [
    TransitionStep {
        at: Duration::from_millis(0),
        action: TransitionAction::Mount,
    },
    TransitionStep {
        at: Duration::from_millis(50),
        action: TransitionAction::Activate,
    },
    TransitionStep {
        at: Duration::from_millis(1500),
        action: TransitionAction::Navigate,
    },
    TransitionStep {
        at: Duration::from_millis(3000),
        action: TransitionAction::FadeMessage,
    },
    TransitionStep {
        at: Duration::from_millis(4000),
        action: TransitionAction::Exit,
    },
    TransitionStep {
        at: Duration::from_millis(4500),
        action: TransitionAction::Remove,
    },
];

/// 1クリック分のエフェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTransition {
    href: String,
    phase: TransitionPhase,
    next: usize,
}

impl PageTransition {
    /// 空の `href` ではエフェクトを作らない
    pub fn new(href: &str) -> Option<Self> {
        if href.is_empty() {
            return None;
        }
        Some(Self {
            href: href.to_string(),
            phase: TransitionPhase::Idle,
            next: 0,
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.next >= TIMELINE.len()
    }

    /// クリックから `elapsed` 経過した時点で、次のステップまでの待ち時間
    pub fn delay_from(&self, elapsed: Duration) -> Option<Duration> {
        let step = TIMELINE.get(self.next)?;
        Some(step.at.saturating_sub(elapsed))
    }

    /// 次のステップへ進み、その操作を返す
    pub fn advance(&mut self) -> Option<TransitionAction> {
        let step = TIMELINE.get(self.next)?;
        self.next += 1;
        self.phase = step.action.phase();
        Some(step.action)
    }

    /// 経過時間 `elapsed` までに期限が来たステップをすべて進める
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<TransitionAction> {
        let mut actions = Vec::new();
        while let Some(step) = TIMELINE.get(self.next) {
            if step.at > elapsed {
                break;
            }
            if let Some(action) = self.advance() {
                actions.push(action);
            }
        }
        actions
    }

    /// 残りのステップを破棄（ページ離脱時）
    pub fn cancel(&mut self) {
        self.next = TIMELINE.len();
    }
}

/// 先頭と末尾の `/` を1つずつ除く（ログ表示用）
pub fn trim_slashes(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}
