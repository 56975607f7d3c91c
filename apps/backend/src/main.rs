#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_recap_backend::run().await
}
