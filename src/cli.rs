use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boycott-check")]
#[command(about = "商品のボイコット判定・代替商品検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（レスポンス全文）
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品写真から判定
    Image {
        /// 画像ファイル、または画像フォルダのパス
        #[arg(required = true)]
        path: PathBuf,
    },

    /// 商品名で検索して判定
    Search {
        /// 検索語（2文字以上）
        #[arg(required = true)]
        query: String,

        /// 候補番号を指定（1始まり、省略時は対話選択）
        #[arg(short, long)]
        pick: Option<usize>,
    },

    /// 未登録の商品を報告
    Report {
        /// 商品名
        #[arg(required = true)]
        name: String,

        /// ボイコット対象として報告
        #[arg(short, long)]
        boycotted: bool,

        /// 分類（例: drinks）
        #[arg(short, long)]
        category: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_pick() {
        let cli = Cli::parse_from(["boycott-check", "search", "cola", "--pick", "2"]);
        match cli.command {
            Commands::Search { query, pick } => {
                assert_eq!(query, "cola");
                assert_eq!(pick, Some(2));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "boycott-check",
            "report",
            "Pepsi",
            "--boycotted",
            "--verbose",
            "--base-url",
            "http://api.test",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
        assert!(matches!(cli.command, Commands::Report { boycotted: true, .. }));
    }

    #[test]
    fn test_report_category() {
        let cli = Cli::parse_from(["boycott-check", "report", "Pepsi", "--category", "drinks"]);
        match cli.command {
            Commands::Report {
                name,
                boycotted,
                category,
            } => {
                assert_eq!(name, "Pepsi");
                assert!(!boycotted);
                assert_eq!(category.as_deref(), Some("drinks"));
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_image_requires_path() {
        assert!(Cli::try_parse_from(["boycott-check", "image"]).is_err());
    }
}
