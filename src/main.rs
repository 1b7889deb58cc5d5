#[tokio::main]
async fn main() {
    if let Err(e) = feedback_collector::start_server().await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
