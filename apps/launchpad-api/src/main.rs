#[tokio::main]
async fn main() -> eyre::Result<()> {
    launchpad_api::bootstrap::run().await
}
