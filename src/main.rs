use boycott_check::{cli, client, config, error, scanner, terminal};
use boycott_common::{autocomplete, messages, process_image, report, search_product, Suggestions};
use clap::Parser;
use cli::{Cli, Commands};
use client::{HttpClient, ImageFile};
use config::Config;
use dialoguer::Select;
use error::{BoycottCheckError, Result};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use terminal::TerminalSink;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    let timeout = config.timeout_seconds.map(Duration::from_secs);

    match cli.command {
        Commands::Image { path } => {
            let client = HttpClient::new(base_url, timeout)?.verbose(cli.verbose);
            run_image(&client, &path).await?;
        }

        Commands::Search { query, pick } => {
            let client = HttpClient::new(base_url, timeout)?.verbose(cli.verbose);
            run_search(&client, &query, pick).await?;
        }

        Commands::Report {
            name,
            boycotted,
            category,
        } => {
            let client = HttpClient::new(base_url, timeout)?.verbose(cli.verbose);
            let message = report::report(&client, &name, boycotted, category.as_deref())
                .await
                .map_err(|err| {
                    BoycottCheckError::Report(err.describe(messages::CONNECTION_ERROR))
                })?;
            println!("✔ {}", message);
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.base_url);
                println!("  実効ベースURL: {}", base_url);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(())
}

/// 画像1枚またはフォルダ内の全画像を判定
async fn run_image(client: &HttpClient, path: &Path) -> Result<()> {
    let images = scanner::collect_images(path)?;
    let total = images.len();
    if is_batch(total) {
        println!("✔ {}枚の写真を検出\n", total);
    }

    let mut recognized = 0;
    for (i, info) in images.iter().enumerate() {
        if is_batch(total) {
            println!("[{}/{}] {}", i + 1, total, info.file_name);
        }

        let image = ImageFile::read(&info.path)?;
        let sink = TerminalSink::new();
        if process_image(client, Some(&image), &sink).await.is_recognized() {
            recognized += 1;
        }
        sink.finish();
        println!();
    }

    if is_batch(total) {
        println!("✅ 完了: {}/{}枚を認識", recognized, total);
    }
    Ok(())
}

fn is_batch(total: usize) -> bool {
    total > 1
}

/// 候補を出して選ばせ、選んだ商品を判定
async fn run_search(client: &HttpClient, query: &str, pick: Option<usize>) -> Result<()> {
    let suggestions = autocomplete::lookup(client, query, |err| {
        eprintln!("{}: {}", messages::SUGGESTIONS_ERROR, err.describe(messages::SUGGESTIONS_ERROR));
    })
    .await;

    let products = match suggestions {
        Suggestions::Hidden => {
            println!(
                "検索語は{}文字以上で入力してください",
                autocomplete::MIN_QUERY_CHARS
            );
            return Ok(());
        }
        Suggestions::NoResults => {
            println!("{}", messages::NO_RESULTS);
            return Ok(());
        }
        Suggestions::Products(products) => products,
    };

    let index = match pick {
        Some(n) => n
            .checked_sub(1)
            .filter(|i| *i < products.len())
            .ok_or(BoycottCheckError::InvalidSelection(n))?,
        None => {
            let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
            Select::new()
                .with_prompt("商品を選択")
                .items(&names)
                .default(0)
                .interact()?
        }
    };

    // 検索ボックスを選んだ商品名にしてから引き直す
    let product = &products[index];
    let sink = TerminalSink::new();
    search_product(client, &product.name, &product.product_id, &sink).await;
    sink.finish();
    Ok(())
}
