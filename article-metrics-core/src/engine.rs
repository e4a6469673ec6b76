use {
    anyhow::Result,
    crate::{
        config::LexiconConfig,
        lexicon::{OpinionLexicon, Stopwords},
        pronouns::count_personal_pronouns,
        readability::{self, Readability},
        sentiment::{self, SentimentScore},
        syllables,
        text_cleaner::{self, word_tokenize},
        word_length,
    },
};

/// Every metric computed for one article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_of_complex_words: f64,
    pub fog_index: f64,
    pub avg_number_of_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// Holds the immutable word lists and computes article metrics from them.
pub struct TextMetricsEngine {
    lexicon: OpinionLexicon,
    stopwords: Stopwords,
}

impl TextMetricsEngine {
    pub fn new(lexicon: OpinionLexicon, stopwords: Stopwords) -> Self {
        Self {
            lexicon,
            stopwords,
        }
    }

    pub fn bundled() -> Self {
        Self::new(OpinionLexicon::bundled(), Stopwords::bundled())
    }

    pub fn load(config: &LexiconConfig) -> Result<Self> {
        Ok(Self::new(OpinionLexicon::load(config)?, Stopwords::load(config)?))
    }

    pub fn clean(&self, text: &str) -> String {
        text_cleaner::clean(text, &self.stopwords)
    }

    pub fn sentiment<S: AsRef<str>>(&self, tokens: &[S]) -> SentimentScore {
        sentiment::score(tokens, &self.lexicon)
    }

    pub fn readability(&self, text: &str) -> Readability {
        let cleaned = self.clean(text);
        readability::analyze(text, &split_words(&cleaned))
    }

    pub fn syllables_per_word(&self, text: &str) -> f64 {
        syllables::syllables_per_word(&split_words(&self.clean(text)))
    }

    pub fn average_word_length(&self, text: &str) -> f64 {
        word_length::average_word_length(&split_words(&self.clean(text)))
    }

    /// Scores an article body. Returns `None` when nothing is left after
    /// cleaning; such articles are skipped rather than scored with zeros.
    pub fn analyze(&self, body: &str) -> Option<ArticleMetrics> {
        let cleaned = self.clean(body);
        let tokens = word_tokenize(&cleaned);

        // cleaning is idempotent, so one split of the cleaned text serves every metric
        let cleaned_words = split_words(&cleaned);
        if cleaned_words.is_empty() {
            return None;
        }

        let sentiment = self.sentiment(&tokens);
        let readability = readability::analyze(&cleaned, &cleaned_words);

        Some(ArticleMetrics {
            positive_score: sentiment.positive,
            negative_score: sentiment.negative,
            polarity_score: sentiment.polarity,
            subjectivity_score: sentiment.subjectivity,
            avg_sentence_length: readability.avg_words_per_sentence,
            percentage_of_complex_words: ratio(readability.complex_word_count as f64, tokens.len()),
            fog_index: readability.fog_index,
            avg_number_of_words_per_sentence: readability.avg_words_per_sentence,
            complex_word_count: readability.complex_word_count,
            word_count: tokens.len(),
            syllable_per_word: syllables::syllables_per_word(&cleaned_words),
            personal_pronouns: count_personal_pronouns(body),
            avg_word_length: word_length::average_word_length(&cleaned_words),
        })
    }
}

fn split_words(cleaned: &str) -> Vec<&str> {
    cleaned.split_whitespace().collect()
}

/// Division that yields `0.0` for an empty denominator.
pub(crate) fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}
