mod config;

use crate::config::{Config, read_config};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use spore::endpoint::ApiEndpoint;
use spore::model::{AssetId, AssetType, SporecastId, ViewType};
use spore::reqwest::{self, Proxy};
use spore::{Client, HttpClient, Page};
use std::path::PathBuf;

#[macro_use]
extern crate log;

#[derive(Parser, Debug)]
#[command(version, about = "Query the Spore REST service")]
struct Cli {
    /// JSON config file.
    #[arg(long, default_value = "sporectl.json")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 0)]
    start: u32,
    #[arg(long, default_value_t = 20)]
    length: u32,
}

impl From<PageArgs> for Page {
    fn from(p: PageArgs) -> Self {
        Page::new(p.start, p.length)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Service-wide upload and user counters
    Stats,
    Creature { id: AssetId },
    User { name: String },
    Assets {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Sporecasts { name: String },
    SporecastAssets {
        id: SporecastId,
        #[command(flatten)]
        page: PageArgs,
    },
    Achievements {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// One asset with its author id and comments
    Asset { id: AssetId },
    Comments {
        id: AssetId,
        #[command(flatten)]
        page: PageArgs,
    },
    Buddies {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Subscribers {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// View is one of TOP_RATED, TOP_RATED_NEW, NEWEST, FEATURED, MAXIS_MADE,
    /// RANDOM, CUTE_AND_CREEPY
    Search {
        view: ViewType,
        #[arg(long = "type")]
        asset_type: Option<AssetType>,
        #[command(flatten)]
        page: PageArgs,
    },
}

fn build_client(conf: &Config) -> Result<HttpClient> {
    let mut http = reqwest::Client::builder().timeout(conf.timeout);
    if let Some(proxy) = &conf.proxy {
        http = http.proxy(Proxy::all(proxy).context("invalid proxy")?);
    }
    if let Some(ua) = &conf.user_agent {
        http = http.user_agent(ua);
    }
    let api = ApiEndpoint::with_base(&conf.base_url)
        .with_context(|| format!("invalid base url {}", conf.base_url))?;
    Ok(Client::with_transport(http.build()?, api))
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_listing<T: Serialize>(value: &T, count: usize) -> Result<()> {
    print(value)?;
    eprintln!("count: {count}");
    Ok(())
}

async fn run(client: &HttpClient, command: Command) -> Result<()> {
    use Command::*;
    match command {
        Stats => print(&client.stats().await?),
        Creature { id } => print(&client.creature(id).await?),
        User { name } => print(&client.user_info(&name).await?),
        Assets { name, page } => {
            let r = client.user_assets(&name, page.into()).await?;
            print_listing(&r, r.count())
        }
        Sporecasts { name } => {
            let r = client.user_sporecasts(&name).await?;
            print_listing(&r, r.count())
        }
        SporecastAssets { id, page } => {
            let r = client.sporecast_assets(id, page.into()).await?;
            print_listing(&r, r.count())
        }
        Achievements { name, page } => {
            let r = client.user_achievements(&name, page.into()).await?;
            print_listing(&r, r.count())
        }
        Asset { id } => print(&client.asset_info(id).await?),
        Comments { id, page } => {
            let r = client.asset_comments(id, page.into()).await?;
            print_listing(&r, r.count())
        }
        Buddies { name, page } => {
            let r = client.user_buddies(&name, page.into()).await?;
            print_listing(&r, r.count())
        }
        Subscribers { name, page } => {
            let r = client.user_subscribers(&name, page.into()).await?;
            print_listing(&r, r.count())
        }
        Search {
            view,
            asset_type,
            page,
        } => {
            let r = client.search_assets(view, page.into(), asset_type).await?;
            print_listing(&r, r.count())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let conf = read_config(&cli.config).await?;
    debug!("config: {:?}", conf);
    let client = build_client(&conf)?;
    run(&client, cli.command).await.context("request failed")
}
