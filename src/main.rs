use anyhow::Result;
use clap::Parser;
use sol_nft_crawler::application::crawler::{CrawlerConfig, SolanaCrawler, DEFAULT_PAGE_SIZE};
use sol_nft_crawler::application::Crawler;
use sol_nft_crawler::infrastructure::json_sink::JsonLineSink;
use sol_nft_crawler::infrastructure::solana_client::SolanaClient;
use tokio::signal;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Solana NFT crawler: scans confirmed blocks for NFT mints and decodes their Metaplex metadata"
)]
struct CrawlerProgram {
    /// Slot to start crawling from
    start_slot: u64,

    /// RPC endpoint
    #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
    rpc_endpoint: String,

    /// Maximum number of slots per getBlocks query
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u64).range(1..))]
    page_size: u64,

    /// Only crawl transactions involving these program ids (e.g. the Candy
    /// Machine programs); no scoping when omitted
    #[arg(short, long = "minter-program")]
    minter_programs: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = CrawlerProgram::parse();

    let crawler = SolanaCrawler::builder()
        .bc_client(SolanaClient::from_url(&args.rpc_endpoint))
        .sink(JsonLineSink)
        .config(CrawlerConfig {
            page_size: args.page_size,
            minter_programs: args.minter_programs.into_iter().collect(),
        })
        .build();

    tracing::info!("Running crawler from slot {} ...", args.start_slot);

    tokio::select! {
        result = crawler.run(args.start_slot) => {
            result?;
            tracing::info!("Crawl complete");
        }
        _ = signal::ctrl_c() => {
            tracing::warn!("Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}
