use anyhow::Result;
use rights_chat::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional, same as running without one
    let _ = dotenvy::dotenv();
    cli::run().await
}
