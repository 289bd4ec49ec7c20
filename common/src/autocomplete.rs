//! 入力補完
//!
//! キー入力ごとに候補を取り直す。2文字未満ではリクエストしない
//! （時間ではなく文字数でのデバウンス）。取得失敗は候補なしとして扱い、
//! 呼び出し側がログに残すだけにする。

use crate::api::BoycottApi;
use crate::error::{ClientError, Result};
use crate::types::Product;

/// 検索を始める最小文字数
pub const MIN_QUERY_CHARS: usize = 2;

/// 候補リストの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Suggestions {
    /// リストは空（未入力・短すぎる・選択済み）
    #[default]
    Hidden,
    /// 「結果なし」のプレースホルダ1行
    NoResults,
    Products(Vec<Product>),
}

impl Suggestions {
    pub fn from_products(products: Vec<Product>) -> Self {
        if products.is_empty() {
            Suggestions::NoResults
        } else {
            Suggestions::Products(products)
        }
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Suggestions::Products(products) => products,
            _ => &[],
        }
    }
}

/// 検索に使うクエリ（トリム済み）。短すぎる場合は `None`
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (query.chars().count() >= MIN_QUERY_CHARS).then_some(query)
}

/// 候補を取得
///
/// `error` だけのレスポンスも候補なしになる。
pub async fn fetch_suggestions<A: BoycottApi>(api: &A, query: &str) -> Result<Vec<Product>> {
    let response = api.search_products(query).await?;
    if response.has_error() && response.products.is_empty() {
        return Err(ClientError::Rejected(response.error.unwrap_or_default()));
    }
    Ok(response.products)
}

/// 入力値から候補リストを作る
///
/// 取得に失敗したら `on_error` に渡したうえで「結果なし」を返す。
pub async fn lookup<A, F>(api: &A, raw: &str, on_error: F) -> Suggestions
where
    A: BoycottApi,
    F: FnOnce(&ClientError),
{
    let Some(query) = normalize_query(raw) else {
        return Suggestions::Hidden;
    };

    match fetch_suggestions(api, query).await {
        Ok(products) => Suggestions::from_products(products),
        Err(err) => {
            on_error(&err);
            Suggestions::NoResults
        }
    }
}

/// 候補リクエストの受付番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 遅れて届いた候補レスポンスを捨てるための採番器
///
/// 入力のたびに番号を発行し、最新番号のレスポンスだけを反映する。
#[derive(Debug, Clone, Copy, Default)]
pub struct AutocompleteTracker {
    latest: u64,
}

impl AutocompleteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい番号を発行（それ以前の番号はすべて古くなる）
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
