use artwork_select::{browse, cli, client, config, error, render};
use browse::BrowseOptions;
use clap::Parser;
use cli::{Cli, Commands};
use client::CatalogClient;
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Browse { start_page, output, format, title } => {
            println!("🖼  artwork-select - 作品選択\n");

            let client = CatalogClient::new(&config)?;
            browse::run_browse(
                &client,
                BrowseOptions { start_page, output, format, title },
            )
            .await?;
        }

        Commands::Page { page, json } => {
            let client = CatalogClient::new(&config)?;
            let page = client.fetch_page(page.max(1)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                match page.total_pages {
                    Some(total) => println!("ページ {}/{} ({}件)", page.index, total, page.len()),
                    None => println!("ページ {} ({}件)", page.index, page.len()),
                }
                println!("---");
                render::print_records(&page.records);
            }
        }

        Commands::Config { set_api_url, set_timeout, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ APIのURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  API URL: {}", config.api_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  User-Agent: {}", config.user_agent);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// ログはstderrへ。RUST_LOGがあればそちらを優先
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
