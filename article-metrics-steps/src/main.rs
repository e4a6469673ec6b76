mod article_metrics;
mod progress;
mod utils;

use {
    tracing::info,
    anyhow::Result,
    article_metrics_core::{
        config::Config,
        engine::TextMetricsEngine,
        fetcher::HttpArticleFetcher,
    },
    crate::{
        article_metrics::article_metrics_step,
        utils::init_logging,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("article metrics");

    let config = Config::load();
    let engine = TextMetricsEngine::load(&config.lexicon)?;
    let fetcher = HttpArticleFetcher::new(&config.fetcher)?;

    article_metrics_step(&config.batch, &engine, &fetcher).await?;

    Ok(())
}
