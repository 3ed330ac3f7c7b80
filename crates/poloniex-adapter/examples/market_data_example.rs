/*
[INPUT]:  Currency pair (e.g., "BTC_ETH")
[OUTPUT]: Market data (ticker, volume, order book, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use chrono::Utc;
use poloniex_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no authentication required)
///
/// Run with `RUST_LOG=poloniex_adapter=debug` to see each dispatched command.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Poloniex Market Data Example ===\n");

    let client = match PoloniexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let pair = "BTC_ETH";

    println!("Querying ticker...");
    match client.get_ticker().await {
        Ok(ticker) => println!("✓ {}: {}", pair, ticker[pair]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", pair);
    match client.get_order_book(pair, 5).await {
        Ok(book) => println!("✓ Order book: {}", book),
        Err(e) => println!("✗ Error: {}", e),
    }

    let end = Utc::now().timestamp() as u64;
    let start = end - 3600;
    println!("\nQuerying last hour of trades for {}...", pair);
    match client.get_trade_history(pair, start, end).await {
        Ok(trades) => {
            let count = trades.as_array().map(Vec::len).unwrap_or_default();
            println!("✓ {} trades", count);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
