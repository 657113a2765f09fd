use basiq::{Client, Config};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = Config::from_env()
        .map_err(|e| format!("Set BASIQ_API_KEY in your environment or .env file: {e}"))?;
    let user_id = env::args()
        .nth(1)
        .ok_or("Usage: fetch_transactions <USER_ID>")?;

    let client = Client::new(config)?;
    let transactions = client.transactions(&user_id).await?;

    println!(
        "Fetched {} transactions for user {}:",
        transactions.len(),
        user_id
    );
    for txn in &transactions {
        println!(
            "{} | {} | {}",
            txn.post_date.as_deref().unwrap_or("-"),
            txn.amount.map(|a| a.to_string()).unwrap_or_default(),
            txn.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
