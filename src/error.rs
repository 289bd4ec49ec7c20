use boycott_common::{messages, ClientError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoycottCheckError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("候補番号が範囲外です: {0}")]
    InvalidSelection(usize),

    /// 報告の失敗（サーバーの拒否理由、またはステータス）
    #[error("{prefix}: {0}", prefix = messages::REPORT_ERROR)]
    Report(String),

    #[error("API呼び出しエラー: {0}")]
    Client(#[from] ClientError),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, BoycottCheckError>;
