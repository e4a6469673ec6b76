use {
    tracing::{info, warn},
    anyhow::Result,
    article_metrics_core::{
        config::BatchConfig,
        engine::TextMetricsEngine,
        entity::{MetricsRecord, into_metrics_record},
        fetcher::ArticleFetcher,
        table::{InputRow, read_input_rows, write_records},
    },
    crate::progress::Progress,
};

#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub analyzed: usize,
    pub fetch_failed: usize,
    pub empty: usize,
}

pub async fn article_metrics_step<F: ArticleFetcher>(config: &BatchConfig, engine: &TextMetricsEngine, fetcher: &F) -> Result<BatchSummary> {
    info!("running article metrics step");

    let rows = read_input_rows(config.input())?;
    info!("loaded {} urls from {}", rows.len(), config.input().display());

    let (records, summary) = analyze_articles(rows, engine, fetcher).await;

    write_records(config.output(), &records)?;
    info!(
        "analyzed {} articles ({} failed to fetch, {} without text), output saved to {}",
        summary.analyzed,
        summary.fetch_failed,
        summary.empty,
        config.output().display(),
    );

    Ok(summary)
}

/// Fetches and scores articles one at a time in input order. Urls that cannot
/// be fetched or have no text left after cleaning produce no record.
pub async fn analyze_articles<F: ArticleFetcher>(rows: Vec<InputRow>, engine: &TextMetricsEngine, fetcher: &F) -> (Vec<MetricsRecord>, BatchSummary) {
    let mut progress = Progress::new("analyzing articles".to_owned(), rows.len());
    let mut summary = BatchSummary::default();
    let mut records = Vec::new();

    for row in rows {
        match fetcher.fetch(&row.url).await {
            Ok(article) => match engine.analyze(&article.body) {
                Some(metrics) => {
                    info!("analyzed {} ({})", row.url, article.title.as_deref().unwrap_or("untitled"));
                    records.push(into_metrics_record(row.url_id, row.url, metrics));
                    summary.analyzed += 1;
                },
                None => {
                    warn!("skipping {}: no words left after cleaning", row.url);
                    summary.empty += 1;
                },
            },
            Err(err) => {
                warn!("skipping {}: failed to fetch article: {}", row.url, err);
                summary.fetch_failed += 1;
            },
        }

        progress.update();
    }
    progress.finish();

    (records, summary)
}
