use {
    std::{fs::read_to_string, path::{Path, PathBuf}, time::Duration},
    tracing::warn,
    serde::Deserialize,
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct BatchConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct FetcherConfig {
    title_selector: Option<String>,
    body_selector: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

// paths override the word lists bundled with the crate
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LexiconConfig {
    positive_words: Option<PathBuf>,
    negative_words: Option<PathBuf>,
    stopwords: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::parse(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn parse(config: &str) -> Result<Self, String> {
        toml::from_str(config).map_err(|err| err.to_string())
    }
}

impl BatchConfig {
    pub fn input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new("input.csv"))
    }

    pub fn output(&self) -> &Path {
        self.output.as_deref().unwrap_or(Path::new("output.csv"))
    }
}

impl FetcherConfig {
    pub fn title_selector(&self) -> &str {
        self.title_selector.as_deref().unwrap_or("h1.entry-title")
    }

    pub fn body_selector(&self) -> &str {
        self.body_selector.as_deref().unwrap_or("div.td-post-content.tagdiv-type")
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(concat!("article-metrics/", env!("CARGO_PKG_VERSION")))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

impl LexiconConfig {
    pub fn positive_words(&self) -> Option<&Path> {
        self.positive_words.as_deref()
    }

    pub fn negative_words(&self) -> Option<&Path> {
        self.negative_words.as_deref()
    }

    pub fn stopwords(&self) -> Option<&Path> {
        self.stopwords.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.batch.input(), Path::new("input.csv"));
        assert_eq!(config.batch.output(), Path::new("output.csv"));
        assert_eq!(config.fetcher.title_selector(), "h1.entry-title");
        assert_eq!(config.fetcher.body_selector(), "div.td-post-content.tagdiv-type");
        assert_eq!(config.fetcher.timeout(), Duration::from_secs(30));
        assert!(config.lexicon.positive_words().is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse(r#"
[batch]
input = "data/urls.csv"
output = "data/metrics.csv"

[fetcher]
body_selector = "article .content"
timeout_secs = 5

[lexicon]
stopwords = "lists/stopwords.txt"
"#).unwrap();

        assert_eq!(config.batch.input(), Path::new("data/urls.csv"));
        assert_eq!(config.batch.output(), Path::new("data/metrics.csv"));
        assert_eq!(config.fetcher.title_selector(), "h1.entry-title");
        assert_eq!(config.fetcher.body_selector(), "article .content");
        assert_eq!(config.fetcher.timeout(), Duration::from_secs(5));
        assert_eq!(config.lexicon.stopwords(), Some(Path::new("lists/stopwords.txt")));
        assert!(config.lexicon.negative_words().is_none());
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(Config::parse("[batch\ninput = 1").is_err());
    }
}
