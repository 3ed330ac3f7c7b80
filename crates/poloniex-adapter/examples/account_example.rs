/*
[INPUT]:  POLONIEX_API_KEY / POLONIEX_API_SECRET environment variables
[OUTPUT]: Account balances, open orders and fee tier
[POS]:    Examples - signed account queries (no orders placed)
[UPDATE]: When trading API changes
*/

use poloniex_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Private account queries (requires API key and secret)
///
/// Orders are deliberately not placed here; see `PoloniexClient::buy`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Poloniex Account Example ===\n");

    let key = std::env::var("POLONIEX_API_KEY").unwrap_or_default();
    let secret = std::env::var("POLONIEX_API_SECRET").unwrap_or_default();

    let client = match PoloniexClient::new() {
        Ok(c) => c.with_credentials(Credentials::new(key, secret)),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.my_balances().await {
        Ok(balances) => println!("✓ Balances: {}", balances),
        Err(e) if e.is_config_error() => {
            eprintln!("✗ {} (set POLONIEX_API_KEY and POLONIEX_API_SECRET)", e);
            return;
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.my_open_orders("all").await {
        Ok(orders) => println!("✓ Open orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_fee_info().await {
        Ok(fees) => println!("✓ Fee info: {}", fees),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
