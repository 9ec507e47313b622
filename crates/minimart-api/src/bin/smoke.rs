//! # Backend Smoke Tool
//!
//! Manual exerciser against a running backend. Lists the catalog, builds a
//! demo cart from the first products, and prints the totals breakdown.
//! Never books an invoice.
//!
//! ## Usage
//! ```bash
//! # Against the default local backend
//! cargo run -p minimart-api --bin smoke
//!
//! # Against a specific backend with a session token
//! MINIMART_API_URL=https://pos.example.com \
//! MINIMART_API_TOKEN=eyJhbGci... \
//! cargo run -p minimart-api --bin smoke
//! ```

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use minimart_api::{ApiClient, ApiConfig};
use minimart_core::checkout::CheckoutSession;
use minimart_core::money::Money;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url =
        env::var("MINIMART_API_URL").unwrap_or_else(|_| "https://localhost:7158".to_string());
    let mut config = ApiConfig::new(base_url);
    if let Ok(token) = env::var("MINIMART_API_TOKEN") {
        config = config.with_token(token);
    }

    info!(base_url = %config.base_url, "connecting");
    let client = ApiClient::new(config);

    let products = client.products().list_active().await?;
    let promotions = client.promotions().list_active().await?;
    let taxes = client.taxes().list_active().await?;
    info!(
        products = products.len(),
        promotions = promotions.len(),
        taxes = taxes.len(),
        "catalog loaded"
    );

    let mut session = CheckoutSession::new();
    // The POS default: first active tax preselected, no promotion.
    session.select_tax(taxes.first().cloned());

    for product in products.iter().take(3) {
        match session.cart_mut().add(product) {
            Ok(()) => info!(name = %product.name, price = %product.price, "added to demo cart"),
            Err(e) => info!(name = %product.name, error = %e, "skipped"),
        }
    }

    let totals = session.totals();
    println!("-- demo cart ----------------------------------");
    for line in session.cart().lines() {
        println!(
            "{:>3} x {:<30} {:>14}",
            line.quantity,
            line.name,
            line.line_total().to_string()
        );
    }
    println!("subtotal        {:>14}", totals.subtotal.to_string());
    println!("discount        {:>14}", totals.total_discount.to_string());
    println!("tax             {:>14}", totals.tax_amount.to_string());
    println!("grand total     {:>14}", totals.grand_total.to_string());
    println!(
        "change for 500k {:>14}",
        session.change_due(Money::from_dong(500_000)).to_string()
    );

    Ok(())
}
