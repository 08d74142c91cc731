#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sightline_cli::run_server().await
}
