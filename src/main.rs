#[tokio::main]
async fn main() -> anyhow::Result<()> {
  adresa::entrypoint().await
}
