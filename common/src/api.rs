//! バックエンドAPIの契約
//!
//! エンドポイントのパスと、各プラットフォームのHTTPクライアントが実装する
//! [`BoycottApi`] トレイト。WASM版は `fetch`、CLI版は `reqwest` で実装する。

use crate::error::Result;
use crate::types::{AddProductRequest, AddProductResponse, RecognitionResult, SearchResponse};

pub const PROCESS_IMAGE_PATH: &str = "/api/process_image";
pub const SEARCH_PRODUCTS_PATH: &str = "/api/search_products";
pub const ADD_PRODUCT_PATH: &str = "/api/add_product";

/// multipartの画像フィールド名
pub const IMAGE_FIELD: &str = "image";
/// 検索クエリのパラメータ名
pub const QUERY_PARAM: &str = "query";

/// ベースURLとパスを結合
///
/// ブラウザでは空文字のベースURLで相対パスになる。
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// バックエンドAPI
///
/// ブラウザのイベントループ上でも動かすため、Futureに `Send` は要求しない。
#[allow(async_fn_in_trait)]
pub trait BoycottApi {
    /// アップロードする画像の型（WASM: `web_sys::File`、CLI: バイト列）
    type Image;

    /// `GET /api/search_products?query=...`
    async fn search_products(&self, query: &str) -> Result<SearchResponse>;

    /// `POST /api/process_image`（multipart）
    async fn recognize_image(&self, image: &Self::Image) -> Result<RecognitionResult>;

    /// `POST /api/process_image`（JSON `{name}`）
    async fn recognize_name(&self, name: &str) -> Result<RecognitionResult>;

    /// `POST /api/add_product`
    async fn add_product(&self, request: &AddProductRequest) -> Result<AddProductResponse>;
}
