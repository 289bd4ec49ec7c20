//! バックエンドAPI連携（reqwest）

use crate::error::{BoycottCheckError, Result};
use boycott_common::api::{
    endpoint, ADD_PRODUCT_PATH, IMAGE_FIELD, PROCESS_IMAGE_PATH, QUERY_PARAM, SEARCH_PRODUCTS_PATH,
};
use boycott_common::{
    AddProductRequest, AddProductResponse, BoycottApi, ClientError, NameQuery, RecognitionResult,
    SearchResponse,
};
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

/// アップロードする画像
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BoycottCheckError::FileNotFound(path.display().to_string()));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self::new(file_name, std::fs::read(path)?))
    }

    /// 拡張子から推定したMIMEタイプ
    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

/// HTTPクライアント
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    verbose: bool,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into(),
            verbose: false,
        })
    }

    /// 認識レスポンスの全文を表示する
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    fn log_recognition(&self, source: &str, result: &RecognitionResult) {
        if !self.verbose {
            return;
        }
        let full = serde_json::to_string_pretty(result).unwrap_or_default();
        println!("  Full response ({}):\n{}", source, full);
        println!("  Processed boycotted value ({}): {}", source, result.is_boycotted);
    }
}

impl BoycottApi for HttpClient {
    type Image = ImageFile;

    async fn search_products(&self, query: &str) -> boycott_common::Result<SearchResponse> {
        let response = self
            .http
            .get(self.url(SEARCH_PRODUCTS_PATH))
            .query(&[(QUERY_PARAM, query)])
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn recognize_image(
        &self,
        image: &ImageFile,
    ) -> boycott_common::Result<RecognitionResult> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type())
            .map_err(transport)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(self.url(PROCESS_IMAGE_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let result: RecognitionResult = read_json(response).await?;
        self.log_recognition("processImage", &result);
        Ok(result)
    }

    async fn recognize_name(&self, name: &str) -> boycott_common::Result<RecognitionResult> {
        let body = NameQuery {
            name: name.to_string(),
        };
        let response = self
            .http
            .post(self.url(PROCESS_IMAGE_PATH))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        let result: RecognitionResult = read_json(response).await?;
        self.log_recognition("searchProduct", &result);
        Ok(result)
    }

    async fn add_product(
        &self,
        request: &AddProductRequest,
    ) -> boycott_common::Result<AddProductResponse> {
        let response = self
            .http
            .post(self.url(ADD_PRODUCT_PATH))
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            // エラー本文に `error` があればそれを使う
            let status = response.status().as_u16();
            let body: AddProductResponse = read_body(response).await.unwrap_or_default();
            return Err(body
                .error
                .map(ClientError::Rejected)
                .unwrap_or(ClientError::Status(status)));
        }
        read_body(response).await
    }
}

/// ステータス確認してからJSONを読む
async fn read_json<T: DeserializeOwned>(response: Response) -> boycott_common::Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    read_body(response).await
}

async fn read_body<T: DeserializeOwned>(response: Response) -> boycott_common::Result<T> {
    let text = response.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&text)?)
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_by_extension() {
        assert_eq!(ImageFile::new("a.JPG", vec![]).mime_type(), "image/jpeg");
        assert_eq!(ImageFile::new("a.jpeg", vec![]).mime_type(), "image/jpeg");
        assert_eq!(ImageFile::new("a.png", vec![]).mime_type(), "image/png");
        assert_eq!(ImageFile::new("a.webp", vec![]).mime_type(), "image/webp");
        assert_eq!(ImageFile::new("a", vec![]).mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_read_missing_file() {
        let err = ImageFile::read(Path::new("/nonexistent/product.jpg")).unwrap_err();
        assert!(matches!(err, BoycottCheckError::FileNotFound(_)));
    }
}
