use {
    std::{collections::HashSet, fs::read_to_string, path::Path},
    anyhow::{anyhow, Context, Result},
    tracing::{info, warn},
    crate::config::LexiconConfig,
};

const BUNDLED_POSITIVE_WORDS: &str = include_str!("../data/positive-words.txt");
const BUNDLED_NEGATIVE_WORDS: &str = include_str!("../data/negative-words.txt");
const BUNDLED_STOPWORDS: &str = include_str!("../data/stopwords-english.txt");

/// Positive and negative opinion words used for lookup-based sentiment scoring.
/// The two lists are not required to be disjoint.
#[derive(Debug, Clone)]
pub struct OpinionLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl OpinionLexicon {
    pub fn new<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bundled() -> Self {
        Self {
            positive: parse_word_list(BUNDLED_POSITIVE_WORDS),
            negative: parse_word_list(BUNDLED_NEGATIVE_WORDS),
        }
    }

    pub fn load(config: &LexiconConfig) -> Result<Self> {
        let positive = match config.positive_words() {
            Some(path) => load_word_list(path)?,
            None => parse_word_list(BUNDLED_POSITIVE_WORDS),
        };
        let negative = match config.negative_words() {
            Some(path) => load_word_list(path)?,
            None => parse_word_list(BUNDLED_NEGATIVE_WORDS),
        };

        let lexicon = Self { positive, negative };
        let overlap = lexicon.overlap();
        if overlap > 0 {
            warn!("{} words are present in both positive and negative lexicons", overlap);
        }
        info!("loaded opinion lexicon: {} positive, {} negative words", lexicon.positive.len(), lexicon.negative.len());

        Ok(lexicon)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn overlap(&self) -> usize {
        self.positive.intersection(&self.negative).count()
    }
}

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bundled() -> Self {
        Self {
            words: parse_word_list(BUNDLED_STOPWORDS),
        }
    }

    pub fn load(config: &LexiconConfig) -> Result<Self> {
        let words = match config.stopwords() {
            Some(path) => load_word_list(path)?,
            None => parse_word_list(BUNDLED_STOPWORDS),
        };
        info!("loaded {} stopwords", words.len());

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    let contents = read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = parse_word_list(&contents);
    if words.is_empty() {
        return Err(anyhow!("word list {} is empty", path.display()));
    }

    Ok(words)
}

// opinion lexicon files carry a header of `;` comment lines
fn parse_word_list(contents: &str) -> HashSet<String> {
    contents.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(|line| line.to_owned())
        .collect()
}
