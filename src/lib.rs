//! Boycott Check CLI
//!
//! 共通ライブラリの認識・検索・報告フローを端末から実行する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod scanner;
pub mod terminal;
