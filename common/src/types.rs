//! APIの型定義
//!
//! バックエンドが返す形:
//! - SearchResponse: `GET /api/search_products`
//! - RecognitionResult: `POST /api/process_image`
//! - AddProductResponse: `POST /api/add_product`
//!
//! 値はSQLの行からそのまま出てくるため、真偽値は `0`/`1`、
//! IDは数値または文字列で届くことがある。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 商品ID
///
/// 比較は厳密: `5` と `"5"` は別の商品。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

/// 検索結果の商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_truthy_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_boycotted: Option<bool>,
}

/// `GET /api/search_products` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn has_error(&self) -> bool {
        is_set(&self.error)
    }

    /// IDが一致する商品
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.product_id == id)
    }
}

/// 代替商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosine_score: Option<f64>,
}

impl Alternative {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cosine_score: None,
        }
    }

    /// 類似度（小数2桁）
    pub fn score_label(&self) -> Option<String> {
        self.cosine_score.map(|score| format!("{:.2}", score))
    }
}

/// `POST /api/process_image` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub detected_product: Option<String>,

    /// 欠落・`null` はどちらも「対象外」
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_boycotted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub alternatives: Vec<Alternative>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecognitionResult {
    pub fn has_error(&self) -> bool {
        is_set(&self.error)
    }

    /// 認識された商品名（空文字は未認識扱い）
    pub fn detected(&self) -> Option<&str> {
        self.detected_product.as_deref().filter(|s| !s.is_empty())
    }
}

/// 商品名による認識リクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// `POST /api/add_product` のリクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub is_boycotted: bool,
    /// 分類（指定時はサーバー側で一覧表にも追記される）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// `POST /api/add_product` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddProductResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// JavaScriptの真偽判定と同じ規則
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(truthy))
}

fn deserialize_truthy_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(truthy(&v)),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_result_default() {
        let result = RecognitionResult::default();
        assert_eq!(result.detected(), None);
        assert!(!result.is_boycotted);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_recognition_result_deserialize() {
        let json = r#"{
            "detected_product": "Pepsi",
            "is_boycotted": 1,
            "alternatives": [
                {"name": "Spiro Spathis", "cosine_score": 0.91},
                {"name": "V7"}
            ]
        }"#;

        let result: RecognitionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.detected(), Some("Pepsi"));
        assert!(result.is_boycotted);
        assert_eq!(result.alternatives.len(), 2);
        assert_eq!(result.alternatives[0].cosine_score, Some(0.91));
        assert_eq!(result.alternatives[1].name, "V7");
        assert_eq!(result.alternatives[0].score_label().as_deref(), Some("0.91"));
        assert_eq!(result.alternatives[1].score_label(), None);
    }

    #[test]
    fn test_is_boycotted_truthiness() {
        let cases = [
            (r#"{"is_boycotted": true}"#, true),
            (r#"{"is_boycotted": false}"#, false),
            (r#"{"is_boycotted": 0}"#, false),
            (r#"{"is_boycotted": 1}"#, true),
            (r#"{"is_boycotted": null}"#, false),
            (r#"{}"#, false),
        ];
        for (json, expected) in cases {
            let result: RecognitionResult = serde_json::from_str(json).unwrap();
            assert_eq!(result.is_boycotted, expected, "{}", json);
        }
    }

    #[test]
    fn test_null_detected_product() {
        let result: RecognitionResult =
            serde_json::from_str(r#"{"detected_product": null, "alternatives": null}"#).unwrap();
        assert_eq!(result.detected(), None);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_empty_detected_product_is_nothing() {
        let result: RecognitionResult =
            serde_json::from_str(r#"{"detected_product": ""}"#).unwrap();
        assert_eq!(result.detected(), None);
    }

    #[test]
    fn test_empty_error_is_not_an_error() {
        let result: RecognitionResult =
            serde_json::from_str(r#"{"detected_product": "X", "error": ""}"#).unwrap();
        assert!(!result.has_error());
    }

    #[test]
    fn test_product_id_strict_equality() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"products": [
                {"product_id": 5, "name": "Numeric"},
                {"product_id": "5", "name": "Textual"}
            ]}"#,
        )
        .unwrap();

        let numeric = response.find(&ProductId::Number(5)).unwrap();
        assert_eq!(numeric.name, "Numeric");
        let textual = response.find(&ProductId::Text("5".into())).unwrap();
        assert_eq!(textual.name, "Textual");
        assert!(response.find(&ProductId::Number(6)).is_none());
    }

    #[test]
    fn test_search_response_error_only() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"error": "Database query failed"}"#).unwrap();
        assert!(response.has_error());
        assert!(response.products.is_empty());
    }

    #[test]
    fn test_product_optional_boycott_flag() {
        let product: Product =
            serde_json::from_str(r#"{"product_id": 3, "name": "Almarai", "is_boycotted": 0}"#)
                .unwrap();
        assert_eq!(product.is_boycotted, Some(false));

        let product: Product =
            serde_json::from_str(r#"{"product_id": 3, "name": "Almarai"}"#).unwrap();
        assert_eq!(product.is_boycotted, None);
    }

    #[test]
    fn test_add_product_request_serialize() {
        let request = AddProductRequest {
            name: "Nescafe".to_string(),
            is_boycotted: true,
            category: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"name":"Nescafe","is_boycotted":true}"#);
    }

    #[test]
    fn test_add_product_request_with_category() {
        let request = AddProductRequest {
            name: "Nescafe".to_string(),
            is_boycotted: true,
            category: Some("coffee".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Nescafe","is_boycotted":true,"category":"coffee"}"#
        );
    }
}
