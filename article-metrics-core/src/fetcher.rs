use {
    anyhow::{anyhow, Result},
    async_trait::async_trait,
    reqwest::StatusCode,
    scraper::{ElementRef, Html, Selector},
    thiserror::Error,
    url::Url,
    crate::config::FetcherConfig,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned status: {0}")]
    Status(u16),
    #[error("article body not found")]
    MissingBody,
    #[error("article body is empty")]
    EmptyBody,
}

/// Source of article text. Failures are reported through `FetchError` and
/// never escape as panics, so callers can skip the url and carry on.
#[async_trait]
pub trait ArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<RawArticle, FetchError>;
}

pub struct ArticleSelectors {
    title: Selector,
    body: Selector,
}

pub struct HttpArticleFetcher {
    client: reqwest::Client,
    selectors: ArticleSelectors,
}

impl ArticleSelectors {
    pub fn new(title: &str, body: &str) -> Result<Self> {
        Ok(Self {
            title: parse_selector(title)?,
            body: parse_selector(body)?,
        })
    }
}

impl HttpArticleFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            selectors: ArticleSelectors::new(config.title_selector(), config.body_selector())?,
        })
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<RawArticle, FetchError> {
        let url = Url::parse(url)?;

        let res = self.client.get(url).send().await?;
        if res.status() != StatusCode::OK {
            return Err(FetchError::Status(res.status().as_u16()));
        }

        let html = res.text().await?;
        extract_article(&html, &self.selectors)
    }
}

/// Pulls the title and body text out of an article page. The body is required,
/// the title is optional.
pub fn extract_article(html: &str, selectors: &ArticleSelectors) -> Result<RawArticle, FetchError> {
    let document = Html::parse_document(html);

    let title = document.select(&selectors.title)
        .next()
        .map(element_text)
        .filter(|title| !title.is_empty());

    let body = document.select(&selectors.body)
        .next()
        .map(element_text)
        .ok_or(FetchError::MissingBody)?;

    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    Ok(RawArticle { title, body })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_owned()
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|err| anyhow!("invalid css selector \"{}\": {}", selector, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_PAGE: &str = r#"
<html>
  <head><title>Site name</title></head>
  <body>
    <h1 class="entry-title">  Rising demand for clean energy  </h1>
    <div class="td-post-content tagdiv-type">
      <p>Solar installations grew strongly.</p>
      <p>Investors remain <b>optimistic</b>.</p>
    </div>
  </body>
</html>
"#;

    fn selectors() -> ArticleSelectors {
        let config = FetcherConfig::default();
        ArticleSelectors::new(config.title_selector(), config.body_selector()).unwrap()
    }

    #[test]
    fn extracts_title_and_body_with_default_selectors() {
        let article = extract_article(ARTICLE_PAGE, &selectors()).unwrap();

        assert_eq!(article.title.as_deref(), Some("Rising demand for clean energy"));
        assert!(article.body.starts_with("Solar installations grew strongly."));
        assert!(article.body.ends_with("Investors remain optimistic."));
    }

    #[test]
    fn missing_title_is_allowed() {
        let html = r#"<div class="td-post-content tagdiv-type">Body only.</div>"#;
        let article = extract_article(html, &selectors()).unwrap();

        assert_eq!(article.title, None);
        assert_eq!(article.body, "Body only.");
    }

    #[test]
    fn missing_body_is_an_error() {
        let html = r#"<h1 class="entry-title">Title</h1><div class="td-post-content">Other layout</div>"#;

        assert!(matches!(extract_article(html, &selectors()), Err(FetchError::MissingBody)));
    }

    #[test]
    fn blank_body_is_an_error() {
        let html = r#"<div class="td-post-content tagdiv-type">   </div>"#;

        assert!(matches!(extract_article(html, &selectors()), Err(FetchError::EmptyBody)));
    }

    #[test]
    fn invalid_selector_is_rejected() {
        assert!(ArticleSelectors::new("h1..broken", "div").is_err());
    }
}
