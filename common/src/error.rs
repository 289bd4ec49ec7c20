//! エラー型定義
//!
//! バックエンド呼び出しで発生しうる失敗。どれも致命的ではなく、
//! [`crate::recognition`] のフローが結果パネルのブロックに変換する。

use thiserror::Error;

/// API呼び出しエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// 2xx以外のステータス
    #[error("HTTP {0}")]
    Status(u16),

    /// レスポンスが得られなかった（DNS、接続断、CORSなど）
    #[error("{0}")]
    Transport(String),

    /// 想定外のJSON
    #[error("invalid response: {0}")]
    Decode(String),

    /// サーバーが `error` フィールドで拒否理由を返した
    #[error("{0}")]
    Rejected(String),
}

impl ClientError {
    /// ユーザー向けの表示文言
    ///
    /// ステータスエラーはサーバー側の文言を持たないため、
    /// `context` にステータスコードを付けて返す。
    pub fn describe(&self, context: &str) -> String {
        match self {
            ClientError::Status(code) => format!("{} ({})", context, code),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = ClientError::Status(502);
        assert_eq!(format!("{}", error), "HTTP 502");
    }

    #[test]
    fn test_error_display_transport() {
        let error = ClientError::Transport("Failed to fetch".to_string());
        assert_eq!(format!("{}", error), "Failed to fetch");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ClientError = json_error.into();
        assert!(matches!(error, ClientError::Decode(_)));
        assert!(error.to_string().starts_with("invalid response"));
    }

    #[test]
    fn test_describe_status_uses_context() {
        let error = ClientError::Status(500);
        assert_eq!(error.describe("connection failed"), "connection failed (500)");
    }

    #[test]
    fn test_describe_other_ignores_context() {
        let error = ClientError::Rejected("Product 'name' is required".to_string());
        assert_eq!(error.describe("ignored"), "Product 'name' is required");
    }
}
