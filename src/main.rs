// Start of file: src/main.rs

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    event_management_api::run().await
}

// End of file: src/main.rs
