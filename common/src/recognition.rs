//! 商品認識フロー
//!
//! 画像アップロード / 候補選択から認識エンドポイントを呼び、
//! 結果を [`ResultSink`] に描画する。
//!
//! 描画規則（両フロー共通）:
//! 1. `error` があるか `detected_product` が空 → 「未認識、報告ページへ」
//! 2. ✅ 見出し → 判定バッジ → （あれば）補足メッセージ → （あれば）代替商品
//!
//! 失敗はすべてパネル上の表示で終わる。リトライはしない。

use crate::api::BoycottApi;
use crate::error::ClientError;
use crate::messages;
use crate::panel::{BoycottStatus, PanelBlock, ResultSink};
use crate::types::{ProductId, RecognitionResult};

/// フローの結果
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionOutcome {
    /// 画像が選択されていない
    MissingImage,
    /// 検索し直しても商品が見つからない
    NotFound,
    /// サーバーは応答したが商品を認識できなかった
    NotRecognized,
    Recognized(RecognitionResult),
    Failed(ClientError),
}

impl RecognitionOutcome {
    pub fn is_recognized(&self) -> bool {
        matches!(self, RecognitionOutcome::Recognized(_))
    }
}

/// 認識結果のブロック列
///
/// `heading` は ✅ 行の全文。画像認識では検出名、名前検索では選んだ商品名を使う。
pub fn render_recognition(heading: &str, result: &RecognitionResult) -> Vec<PanelBlock> {
    let mut blocks = vec![
        PanelBlock::Recognized(heading.to_string()),
        PanelBlock::Badge(BoycottStatus::from_flag(result.is_boycotted)),
    ];

    if let Some(note) = result.status_message.as_deref().filter(|s| !s.is_empty()) {
        blocks.push(PanelBlock::Note(note.to_string()));
    }

    if !result.alternatives.is_empty() {
        blocks.push(PanelBlock::Alternatives(result.alternatives.clone()));
    }

    blocks
}

fn error_line(err: &ClientError, context: &str) -> String {
    format!("{}: {}", messages::ERROR_PREFIX, err.describe(context))
}

/// 成功レスポンスの描画
fn settle(
    result: RecognitionResult,
    heading: impl FnOnce(&str) -> String,
    sink: &impl ResultSink,
) -> RecognitionOutcome {
    let detected = match result.detected() {
        Some(name) if !result.has_error() => name.to_string(),
        _ => {
            sink.replace(vec![PanelBlock::Text(messages::NOT_RECOGNIZED.to_string())]);
            return RecognitionOutcome::NotRecognized;
        }
    };

    sink.replace(render_recognition(&heading(&detected), &result));
    RecognitionOutcome::Recognized(result)
}

/// 画像から商品を認識
///
/// 画像がなければ案内文だけ表示してAPIは呼ばない。
/// 処理中表示はリクエスト開始前に同期的に出す。
pub async fn process_image<A>(
    api: &A,
    image: Option<&A::Image>,
    sink: &impl ResultSink,
) -> RecognitionOutcome
where
    A: BoycottApi,
{
    let Some(image) = image else {
        sink.replace(vec![PanelBlock::Text(messages::UPLOAD_FIRST.to_string())]);
        return RecognitionOutcome::MissingImage;
    };

    sink.replace(vec![PanelBlock::Loading(messages::LOADING_IMAGE.to_string())]);

    match api.recognize_image(image).await {
        Ok(result) => settle(
            result,
            |detected| format!("{}{}", messages::RECOGNIZED_PREFIX, detected),
            sink,
        ),
        Err(err) => {
            sink.replace(vec![PanelBlock::Error(error_line(&err, messages::CONNECTION_ERROR))]);
            RecognitionOutcome::Failed(err)
        }
    }
}

/// 候補から選んだ商品を認識
///
/// 候補レスポンスはキャッシュせず、`query`（検索ボックスの現在値）で検索し直して
/// `product_id` の商品を引き直し、その名前で認識エンドポイントを呼ぶ。
/// 2回目の呼び出しの失敗はパネルを置き換えず追記する。
pub async fn search_product<A>(
    api: &A,
    query: &str,
    product_id: &ProductId,
    sink: &impl ResultSink,
) -> RecognitionOutcome
where
    A: BoycottApi,
{
    sink.replace(vec![PanelBlock::Loading(messages::LOADING_SEARCH.to_string())]);

    let response = match api.search_products(query).await {
        Ok(response) => response,
        Err(err) => {
            sink.replace(vec![PanelBlock::Error(error_line(&err, messages::CONNECTION_ERROR))]);
            return RecognitionOutcome::Failed(err);
        }
    };

    let product = match response.find(product_id) {
        Some(product) if !response.has_error() => product.clone(),
        _ => {
            sink.replace(vec![PanelBlock::Text(messages::NOT_FOUND.to_string())]);
            return RecognitionOutcome::NotFound;
        }
    };

    match api.recognize_name(&product.name).await {
        Ok(result) => settle(
            result,
            |_| format!("{}{}", messages::PRODUCT_PREFIX, product.name),
            sink,
        ),
        Err(err) => {
            sink.append(PanelBlock::Error(format!(
                "{}: {}",
                messages::ALTERNATIVES_ERROR,
                err.describe(messages::CONNECTION_ERROR)
            )));
            RecognitionOutcome::Failed(err)
        }
    }
}
