use article_service::config::ArticleConfig;
use article_service::services::init_metrics;
use article_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics()?;

    let config = ArticleConfig::load()?;

    init_tracing(
        "article-service",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );

    // Any start-up failure, including an unreachable MongoDB, ends the process here.
    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start article-service: {}", e);
        e
    })?;
    application.run_until_stopped().await?;

    Ok(())
}
