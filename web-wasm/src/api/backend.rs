//! バックエンドAPI連携（fetch）
//!
//! `/api/process_image` と `/api/search_products` をブラウザの `fetch` で呼ぶ。
//! タイムアウトやキャンセルは設定しない（ブラウザ既定のまま）。

use boycott_common::api::{
    endpoint, ADD_PRODUCT_PATH, IMAGE_FIELD, PROCESS_IMAGE_PATH, QUERY_PARAM, SEARCH_PRODUCTS_PATH,
};
use boycott_common::{
    AddProductRequest, AddProductResponse, BoycottApi, ClientError, NameQuery,
    RecognitionResult, Result, SearchResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// fetchクライアント
///
/// ベースURLは空文字（ページと同じオリジン）が既定。
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base_url: String,
}

impl FetchClient {
    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// GET
    async fn get(&self, url: &str) -> Result<Response> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        send(request).await
    }

    /// JSONボディでPOST
    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<Response> {
        let body = serde_json::to_string(body)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        send(request).await
    }
}

impl BoycottApi for FetchClient {
    type Image = File;

    async fn search_products(&self, query: &str) -> Result<SearchResponse> {
        let url = format!(
            "{}?{}={}",
            self.url(SEARCH_PRODUCTS_PATH),
            QUERY_PARAM,
            String::from(js_sys::encode_uri_component(query))
        );
        let response = self.get(&url).await?;
        read_json(response).await
    }

    async fn recognize_image(&self, image: &File) -> Result<RecognitionResult> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(IMAGE_FIELD, image, &image.name())
            .map_err(js_error)?;

        // Content-Typeはブラウザがboundary付きで設定する
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        let request =
            Request::new_with_str_and_init(&self.url(PROCESS_IMAGE_PATH), &opts).map_err(js_error)?;
        let response = send(request).await?;
        let result: RecognitionResult = read_json(response).await?;
        log_recognition("processImage", &result);
        Ok(result)
    }

    async fn recognize_name(&self, name: &str) -> Result<RecognitionResult> {
        let body = NameQuery {
            name: name.to_string(),
        };
        let response = self.post_json(&self.url(PROCESS_IMAGE_PATH), &body).await?;
        let result: RecognitionResult = read_json(response).await?;
        log_recognition("searchProduct", &result);
        Ok(result)
    }

    async fn add_product(&self, request: &AddProductRequest) -> Result<AddProductResponse> {
        let response = self.post_json(&self.url(ADD_PRODUCT_PATH), request).await?;
        if !response.ok() {
            // エラー本文に `error` があればそれを使う
            let status = response.status();
            let body: AddProductResponse = read_body(response).await.unwrap_or_default();
            return Err(body
                .error
                .map(ClientError::Rejected)
                .unwrap_or(ClientError::Status(status)));
        }
        read_body(response).await
    }
}

async fn send(request: Request) -> Result<Response> {
    let window =
        web_sys::window().ok_or_else(|| ClientError::Transport("window is not available".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    value.dyn_into::<Response>().map_err(js_error)
}

/// ステータス確認してからJSONを読む
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    read_body(response).await
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| ClientError::Decode("response body is not text".into()))?;
    Ok(serde_json::from_str(&text)?)
}

fn log_recognition(source: &str, result: &RecognitionResult) {
    let full = serde_json::to_string(result).unwrap_or_default();
    gloo::console::log!(format!("Full response ({}):", source), full);
    gloo::console::log!(
        format!("Processed boycotted value ({}):", source),
        result.is_boycotted
    );
}

/// JsValueのエラーを文字列化
fn js_error(value: JsValue) -> ClientError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ClientError::Transport(message)
}
